//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::state::WeatherReading;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== City category =====
    /// City input text changed (every keystroke)
    CityTextChange(String),

    // ===== Lookup category =====
    /// Intent: look up the city currently in the input (triggers async task)
    LookupSubmit,

    /// Result: backend returned a reading for request `request_id`
    LookupDidLoad {
        request_id: u64,
        reading: WeatherReading,
    },

    /// Result: request `request_id` failed
    LookupDidFail { request_id: u64, error: LookupError },

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic tick that pulses the loading label
    Tick,

    /// Exit the application
    Quit,
}
