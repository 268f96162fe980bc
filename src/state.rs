//! Application state - single source of truth

use std::fmt;

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::conditions::WeatherCondition;
use crate::error::LookupError;

/// City text shown in the input when the session starts
pub const DEFAULT_CITY: &str = "New York";

/// A trimmed, non-empty city name ready to be sent to the backend.
/// Only [`CityQuery::parse`] builds one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Strip surrounding whitespace and reject blank input
    pub fn parse(text: &str) -> Result<Self, LookupError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a successful lookup. Replaced wholesale on every new success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReading {
    pub city_name: String,
    pub temperature_celsius: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: u16, // WMO weather code
    /// Captured on our side when the response arrived
    pub observed_at: DateTime<Local>,
}

impl WeatherReading {
    /// Temperature rounded to the nearest whole degree, e.g. `22°C`.
    /// Halves round up: -2.5 shows as `-2°C`, 2.5 as `3°C`.
    pub fn temperature_label(&self) -> String {
        format!("{}°C", (self.temperature_celsius + 0.5).floor() as i64)
    }

    /// `Paris · wind 9 km/h`
    pub fn summary_label(&self) -> String {
        format!("{} · wind {} km/h", self.city_name, self.wind_speed_kmh)
    }

    pub fn code_label(&self) -> String {
        format!("Code: {}", self.weather_code)
    }

    pub fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_code(self.weather_code)
    }

    /// Local time of day the reading was received
    pub fn observed_label(&self) -> String {
        self.observed_at.format("%H:%M:%S").to_string()
    }
}

/// Interval of the pulse on the "Loading..." label
pub const PULSE_TICK_MS: u64 = 400;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text currently in the city input
    #[debug(section = "Input", label = "City")]
    pub city_text: String,

    /// Lookup lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Lookup", label = "Result", debug_fmt)]
    pub lookup: DataResource<WeatherReading>,

    /// Id of the most recently issued request
    #[debug(section = "Lookup", label = "Request")]
    pub request_seq: u64,

    /// Ticks seen since the outstanding request was issued
    #[debug(skip)]
    pub pulse_ticks: u32,
}

impl AppState {
    /// Create state with the given city text in the input
    pub fn new(city_text: impl Into<String>) -> Self {
        Self {
            city_text: city_text.into(),
            lookup: DataResource::Empty,
            request_seq: 0,
            pulse_ticks: 0,
        }
    }

    /// True strictly while a request is outstanding
    pub fn is_loading(&self) -> bool {
        self.lookup.is_loading()
    }

    pub fn last_result(&self) -> Option<&WeatherReading> {
        self.lookup.data()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.lookup.error()
    }

    /// Bright half of the loading pulse; always false when idle
    pub fn pulse_on(&self) -> bool {
        self.is_loading() && self.pulse_ticks % 2 == 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
