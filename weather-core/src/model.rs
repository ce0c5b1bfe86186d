use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::proxy::ProxyError;

/// A validated lookup request: the city name the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Only an absent or empty name is rejected; the text is otherwise kept verbatim.
    pub fn new(city: Option<&str>) -> Result<Self, ProxyError> {
        match city {
            Some(city) if !city.is_empty() => Ok(Self {
                city: city.to_owned(),
            }),
            _ => Err(ProxyError::MissingCity),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current weather as OpenWeather reports it (metric units).
///
/// Only the fields the view needs are modelled; the proxy itself relays the
/// provider payload untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub name: String,
    pub weather: Vec<Condition>,
    pub main: Readings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ResultError {
    #[error("weather payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("weather payload has no condition entries")]
    NoConditions,
}

impl WeatherResult {
    /// Parse a provider payload, requiring at least one condition entry.
    pub fn from_value(value: Value) -> Result<Self, ResultError> {
        let result: WeatherResult = serde_json::from_value(value)?;
        if result.weather.is_empty() {
            return Err(ResultError::NoConditions);
        }
        Ok(result)
    }

    /// The first condition entry, which drives the description and icon.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// Status bucket of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    ServerError,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::ServerError => 500,
        }
    }
}

/// Normalized error body returned by the proxy: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    #[serde(skip)]
    pub kind: ErrorKind,
    #[serde(rename = "error")]
    pub message: String,
}

impl From<&ProxyError> for ErrorResult {
    fn from(err: &ProxyError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paris() -> Value {
        json!({
            "cod": 200,
            "name": "Paris",
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
            "main": { "temp": 15, "feels_like": 14, "humidity": 80, "pressure": 1012 },
            "wind": { "speed": 3.6 }
        })
    }

    #[test]
    fn query_rejects_missing_and_empty_city() {
        assert!(matches!(WeatherQuery::new(None), Err(ProxyError::MissingCity)));
        assert!(matches!(WeatherQuery::new(Some("")), Err(ProxyError::MissingCity)));
    }

    #[test]
    fn query_keeps_city_verbatim() {
        let q = WeatherQuery::new(Some(" New York ")).expect("non-empty city");
        assert_eq!(q.city(), " New York ");
    }

    #[test]
    fn result_parses_provider_payload_and_ignores_extra_fields() {
        let result = WeatherResult::from_value(paris()).expect("valid payload");

        assert_eq!(result.name, "Paris");
        assert_eq!(result.main.temp, 15.0);
        assert_eq!(result.main.humidity, 80.0);

        let primary = result.primary_condition().expect("one condition");
        assert_eq!(primary.description, "light rain");
        assert_eq!(primary.icon, "10d");
    }

    #[test]
    fn result_requires_a_condition_entry() {
        let mut payload = paris();
        payload["weather"] = json!([]);

        let err = WeatherResult::from_value(payload).unwrap_err();
        assert!(matches!(err, ResultError::NoConditions));
    }

    #[test]
    fn result_rejects_missing_readings() {
        let err = WeatherResult::from_value(json!({ "name": "Paris", "weather": [] })).unwrap_err();
        assert!(matches!(err, ResultError::Malformed(_)));
    }

    #[test]
    fn error_result_serializes_message_only() {
        let body = ErrorResult::from(&ProxyError::MissingCity);

        assert_eq!(body.kind, ErrorKind::BadRequest);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "error": "City is required" })
        );
    }

    #[test]
    fn error_kind_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::ServerError.status_code(), 500);
    }
}
