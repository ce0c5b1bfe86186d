//! Plain-text rendering of the view state.

use weather_core::{ViewState, WeatherCard};

pub fn loading() -> &'static str {
    "Loading..."
}

/// Error banner, result card, or nothing, depending on the last outcome.
pub fn outcome(state: &ViewState) -> String {
    if let Some(error) = state.error() {
        return banner(error);
    }
    state
        .result()
        .map(|result| card(&WeatherCard::from(result)))
        .unwrap_or_default()
}

fn banner(message: &str) -> String {
    format!("✖ {message}")
}

fn card(card: &WeatherCard) -> String {
    [
        format!("── {} ──", card.name),
        card.description.clone(),
        format!("icon: {}", card.icon_url),
        card.temperature.clone(),
        format!("Feels like {} • Humidity {}", card.feels_like, card.humidity),
        String::new(),
        card.suggestion.to_string(),
    ]
    .join("\n")
}
