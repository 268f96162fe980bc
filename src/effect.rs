//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::WeatherSource;
use crate::state::CityQuery;

/// Task key for the single in-flight lookup
pub const LOOKUP_TASK: &str = "lookup";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for the city as it was at submit time
    FetchWeather { query: CityQuery, request_id: u64 },
}

/// Run one lookup and turn its outcome into the result action
pub async fn run_lookup(source: &dyn WeatherSource, query: CityQuery, request_id: u64) -> Action {
    match source.fetch_weather(&query).await {
        Ok(reading) => Action::LookupDidLoad {
            request_id,
            reading,
        },
        Err(error) => Action::LookupDidFail { request_id, error },
    }
}
