//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, CityQuery};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== City actions =====
        Action::CityTextChange(text) => {
            if state.city_text == text {
                return DispatchResult::unchanged();
            }
            // An in-flight request keeps the city it was issued with
            state.city_text = text;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit => {
            // At most one request in flight
            if state.is_loading() {
                return DispatchResult::unchanged();
            }
            let Ok(query) = CityQuery::parse(&state.city_text) else {
                return DispatchResult::unchanged();
            };

            state.request_seq = state.request_seq.wrapping_add(1);
            state.lookup = DataResource::Loading;
            state.pulse_ticks = 0;
            DispatchResult::changed_with(Effect::FetchWeather {
                query,
                request_id: state.request_seq,
            })
        }

        Action::LookupDidLoad {
            request_id,
            reading,
        } => {
            if !is_outstanding(state, request_id) {
                return DispatchResult::unchanged();
            }
            state.lookup = DataResource::Loaded(reading);
            DispatchResult::changed()
        }

        Action::LookupDidFail { request_id, error } => {
            if !is_outstanding(state, request_id) {
                return DispatchResult::unchanged();
            }
            state.lookup = DataResource::Failed(error.to_string());
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            // Only the loading label pulses
            if !state.is_loading() {
                return DispatchResult::unchanged();
            }
            state.pulse_ticks = state.pulse_ticks.wrapping_add(1);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn is_outstanding(state: &AppState, request_id: u64) -> bool {
    state.is_loading() && request_id == state.request_seq
}
