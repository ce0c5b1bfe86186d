//! Client-side view state.
//!
//! The view is a value plus a pure transition function. A driver (the
//! terminal front end, a test, anything else) feeds events in and executes
//! the [`Fetch`] commands that come out:
//!
//! ```text
//! Idle ──Submit──▶ Loading ──Responded/TransportFailed──▶ Loaded | Failed
//!   ▲                                                          │
//!   └──────────────────────────Submit──────────────────────────┘
//! ```
//!
//! In-flight fetches are never cancelled. If several overlap, each
//! completion is applied as it arrives and the last one wins.

use serde_json::Value;

use crate::{
    model::WeatherResult,
    suggestion::{ClothingSuggestion, suggest},
};

/// Banner text when the proxy call itself fails.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded(WeatherResult),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    input: String,
    phase: Phase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The text field changed.
    Input(String),
    Submit,
    /// The proxy answered with a JSON body (any HTTP status).
    Responded(Value),
    /// The proxy could not be reached or its body was not JSON.
    TransportFailed,
}

/// Command emitted on submission: call the proxy for `city`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub city: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The submit control is disabled while this is true.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match &self.phase {
            Phase::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply `event`, returning the new state and a fetch to run, if any.
    pub fn next(self, event: ViewEvent) -> (Self, Option<Fetch>) {
        match event {
            ViewEvent::Input(input) => (Self { input, ..self }, None),
            ViewEvent::Submit if self.input.is_empty() => (self, None),
            ViewEvent::Submit => {
                let fetch = Fetch {
                    city: self.input.clone(),
                };
                (self.with_phase(Phase::Loading), Some(fetch))
            }
            ViewEvent::Responded(body) => {
                let phase = phase_for_body(body);
                (self.with_phase(phase), None)
            }
            ViewEvent::TransportFailed => {
                (self.with_phase(Phase::Failed(GENERIC_ERROR.to_string())), None)
            }
        }
    }

    fn with_phase(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }
}

fn phase_for_body(body: Value) -> Phase {
    match body.get("error").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => return Phase::Failed(message.to_string()),
        _ => {}
    }

    match WeatherResult::from_value(body) {
        Ok(result) => Phase::Loaded(result),
        Err(e) => {
            tracing::debug!(error = %e, "proxy body is not a weather result");
            Phase::Failed(GENERIC_ERROR.to_string())
        }
    }
}

/// Display-ready fields of the result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub suggestion: &'static str,
}

impl From<&WeatherResult> for WeatherCard {
    fn from(result: &WeatherResult) -> Self {
        let (description, icon) = result
            .primary_condition()
            .map(|c| (c.description.clone(), c.icon.as_str()))
            .unwrap_or_default();

        Self {
            name: result.name.clone(),
            description,
            icon_url: format!("{ICON_URL_BASE}/{icon}@4x.png"),
            temperature: format!("{}°C", result.main.temp),
            feels_like: format!("{}°C", result.main.feels_like),
            humidity: format!("{}%", result.main.humidity),
            suggestion: ClothingSuggestion::message(suggest(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paris_body() -> Value {
        json!({
            "cod": 200,
            "name": "Paris",
            "weather": [{ "description": "light rain", "icon": "10d" }],
            "main": { "temp": 15, "feels_like": 14, "humidity": 80 }
        })
    }

    fn typed(text: &str) -> ViewState {
        ViewState::new().next(ViewEvent::Input(text.into())).0
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ViewState::new();
        assert_eq!(state.input(), "");
        assert_eq!(state.phase(), &Phase::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_with_empty_input_is_a_no_op() {
        let (state, fetch) = ViewState::new().next(ViewEvent::Submit);
        assert_eq!(state, ViewState::new());
        assert!(fetch.is_none());
    }

    #[test]
    fn submit_enters_loading_and_emits_fetch() {
        let (state, fetch) = typed("Paris").next(ViewEvent::Submit);

        assert!(state.is_loading());
        assert_eq!(fetch, Some(Fetch { city: "Paris".into() }));
    }

    #[test]
    fn submit_clears_previous_result_and_error() {
        let (loaded, _) = typed("Paris")
            .next(ViewEvent::Submit)
            .0
            .next(ViewEvent::Responded(paris_body()));
        assert!(loaded.result().is_some());

        let (state, _) = loaded.next(ViewEvent::Submit);
        assert!(state.result().is_none());
        assert!(state.error().is_none());

        let (failed, _) = state.next(ViewEvent::TransportFailed);
        let (state, _) = failed.next(ViewEvent::Submit);
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn success_body_becomes_result() {
        let (state, fetch) = typed("Paris")
            .next(ViewEvent::Submit)
            .0
            .next(ViewEvent::Responded(paris_body()));

        assert!(fetch.is_none());
        assert!(!state.is_loading());
        assert_eq!(state.result().map(|r| r.name.as_str()), Some("Paris"));
        assert!(state.error().is_none());
    }

    #[test]
    fn error_body_becomes_banner() {
        let (state, _) = typed("Atlantis")
            .next(ViewEvent::Submit)
            .0
            .next(ViewEvent::Responded(json!({ "error": "city not found" })));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("city not found"));
        assert!(state.result().is_none());
    }

    #[test]
    fn transport_failure_shows_generic_message() {
        let (state, _) = typed("Paris")
            .next(ViewEvent::Submit)
            .0
            .next(ViewEvent::TransportFailed);

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(GENERIC_ERROR));
    }

    #[test]
    fn unusable_body_shows_generic_message() {
        let (state, _) = typed("Paris")
            .next(ViewEvent::Submit)
            .0
            .next(ViewEvent::Responded(json!({ "unexpected": true })));

        assert_eq!(state.error(), Some(GENERIC_ERROR));
    }

    #[test]
    fn overlapping_submissions_last_arrival_wins() {
        let (state, first) = typed("Paris").next(ViewEvent::Submit);
        let state = state.next(ViewEvent::Input("Atlantis".into())).0;
        let (state, second) = state.next(ViewEvent::Submit);
        assert_eq!(first.map(|f| f.city), Some("Paris".into()));
        assert_eq!(second.map(|f| f.city), Some("Atlantis".into()));

        // The second request resolves first, then the slower first one lands.
        let state = state
            .next(ViewEvent::Responded(json!({ "error": "city not found" })))
            .0;
        assert_eq!(state.error(), Some("city not found"));

        let state = state.next(ViewEvent::Responded(paris_body())).0;
        assert_eq!(state.result().map(|r| r.name.as_str()), Some("Paris"));
        assert!(state.error().is_none());
        assert_eq!(state.input(), "Atlantis");
    }

    #[test]
    fn typing_keeps_the_displayed_outcome() {
        let state = typed("Paris")
            .next(ViewEvent::Submit)
            .0
            .next(ViewEvent::Responded(paris_body()))
            .0
            .next(ViewEvent::Input("Lon".into()))
            .0;

        assert_eq!(state.input(), "Lon");
        assert!(state.result().is_some());
    }

    #[test]
    fn card_formats_result_fields() {
        let result = WeatherResult::from_value(paris_body()).unwrap();
        let card = WeatherCard::from(&result);

        assert_eq!(card.name, "Paris");
        assert_eq!(card.description, "light rain");
        assert_eq!(card.icon_url, "https://openweathermap.org/img/wn/10d@4x.png");
        assert_eq!(card.temperature, "15°C");
        assert_eq!(card.feels_like, "14°C");
        assert_eq!(card.humidity, "80%");
        assert_eq!(card.suggestion, ClothingSuggestion::Rain.message());
    }

    #[test]
    fn card_keeps_fractional_temperatures() {
        let mut body = paris_body();
        body["main"]["temp"] = json!(20.5);
        body["weather"][0]["description"] = json!("clear sky");

        let card = WeatherCard::from(&WeatherResult::from_value(body).unwrap());
        assert_eq!(card.temperature, "20.5°C");
        assert_eq!(card.suggestion, ClothingSuggestion::Warm.message());
    }
}
