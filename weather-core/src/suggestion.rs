//! Clothing advice derived from a weather result.
//!
//! Rules are checked top to bottom and the first match wins. Precipitation
//! is checked before temperature, so rain at 35 °C still yields the rain
//! advice. Temperature thresholds are strict: exactly 20 °C is a cool day.

use std::fmt;

use crate::model::WeatherResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClothingSuggestion {
    Rain,
    Snow,
    Hot,
    Warm,
    Cool,
    Cold,
    Freezing,
}

impl ClothingSuggestion {
    pub fn message(self) -> &'static str {
        match self {
            ClothingSuggestion::Rain => {
                "☔ Rainy day — wear a waterproof jacket and carry an umbrella."
            }
            ClothingSuggestion::Snow => {
                "❄️ Snowy weather — bundle up with a heavy coat, gloves, and boots."
            }
            ClothingSuggestion::Hot => "🥵 Hot weather — wear light clothes, shorts, and sunglasses.",
            ClothingSuggestion::Warm => {
                "😎 Warm & pleasant — a T-shirt or light shirt works perfectly."
            }
            ClothingSuggestion::Cool => "🧥 Cool day — wear a light jacket or hoodie.",
            ClothingSuggestion::Cold => "🧣 Cold — wear a coat, scarf, and gloves.",
            ClothingSuggestion::Freezing => {
                "🥶 Freezing — heavy winter clothes, hat, scarf, and insulated boots are a must."
            }
        }
    }
}

impl fmt::Display for ClothingSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a rule looks at: lowercased primary description and temperature in °C.
struct Observed<'a> {
    description: &'a str,
    temp: f64,
}

struct Rule {
    applies: fn(&Observed<'_>) -> bool,
    suggestion: ClothingSuggestion,
}

fn rainy(o: &Observed<'_>) -> bool {
    o.description.contains("rain")
}

fn snowy(o: &Observed<'_>) -> bool {
    o.description.contains("snow")
}

fn above_30(o: &Observed<'_>) -> bool {
    o.temp > 30.0
}

fn above_20(o: &Observed<'_>) -> bool {
    o.temp > 20.0
}

fn above_10(o: &Observed<'_>) -> bool {
    o.temp > 10.0
}

fn above_0(o: &Observed<'_>) -> bool {
    o.temp > 0.0
}

/// Evaluation order matters; do not regroup. Anything unmatched is freezing.
const RULES: &[Rule] = &[
    Rule { applies: rainy, suggestion: ClothingSuggestion::Rain },
    Rule { applies: snowy, suggestion: ClothingSuggestion::Snow },
    Rule { applies: above_30, suggestion: ClothingSuggestion::Hot },
    Rule { applies: above_20, suggestion: ClothingSuggestion::Warm },
    Rule { applies: above_10, suggestion: ClothingSuggestion::Cool },
    Rule { applies: above_0, suggestion: ClothingSuggestion::Cold },
];

/// Pick the clothing advice for `weather`.
pub fn suggest(weather: &WeatherResult) -> ClothingSuggestion {
    let description = weather
        .primary_condition()
        .map(|c| c.description.to_lowercase())
        .unwrap_or_default();

    suggest_for(&description, weather.main.temp)
}

fn suggest_for(description: &str, temp: f64) -> ClothingSuggestion {
    let observed = Observed { description, temp };

    RULES
        .iter()
        .find(|rule| (rule.applies)(&observed))
        .map_or(ClothingSuggestion::Freezing, |rule| rule.suggestion)
}
