//! Action and state tests using TestHarness
//!
//! FRAMEWORK PATTERN: TestHarness
//! - Create harness with initial state
//! - Emit actions to simulate user/async events
//! - Drain and assert emitted actions
//! - Use fluent assertions for readable tests

use chrono::Local;
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_lookup::{
    action::Action,
    components::{Component, LookupScreen, LookupScreenProps},
    effect::Effect,
    error::LookupError,
    reducer::reducer,
    state::{AppState, CityQuery, DEFAULT_CITY, WeatherReading},
};

fn reading(city: &str) -> WeatherReading {
    WeatherReading {
        city_name: city.into(),
        temperature_celsius: 21.6,
        wind_speed_kmh: 9.0,
        weather_code: 2,
        observed_at: Local::now(),
    }
}

#[test]
fn test_reducer_submit() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().lookup.is_empty());

    // Submit - should set loading and return FetchWeather effect
    let result = store.dispatch(Action::LookupSubmit);
    assert!(result.changed, "State should change");
    assert!(store.state().is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { query, request_id: 1 } if query.as_str() == DEFAULT_CITY
    ));
}

#[test]
fn test_reducer_load() {
    let mut store = EffectStore::new(AppState::new("Paris"), reducer);

    store.dispatch(Action::LookupSubmit);
    store.dispatch(Action::LookupDidLoad {
        request_id: 1,
        reading: reading("Paris"),
    });

    assert!(!store.state().is_loading());
    assert_eq!(
        store.state().last_result().map(|r| r.city_name.as_str()),
        Some("Paris")
    );
    assert!(store.state().last_error().is_none());
}

#[test]
fn test_reducer_typing_then_submit_uses_trimmed_text() {
    let mut store = EffectStore::new(AppState::new(""), reducer);

    store.dispatch(Action::CityTextChange("  Buenos Aires  ".into()));
    let result = store.dispatch(Action::LookupSubmit);

    assert_eq!(
        result.effects,
        vec![Effect::FetchWeather {
            query: CityQuery::parse("Buenos Aires").unwrap(),
            request_id: 1,
        }]
    );
    // The text box keeps exactly what was typed
    assert_eq!(store.state().city_text, "  Buenos Aires  ");
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = LookupScreen::new();

    // A printable key edits the city text, it never submits
    let actions = harness.send_keys::<NumericComponentId, _, _>("x", |state, event| {
        let props = LookupScreenProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    assert_emitted!(actions, Action::CityTextChange(_));
    assert_not_emitted!(actions, Action::LookupSubmit);
    assert_not_emitted!(actions, Action::Quit);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = LookupScreen::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("a b c", |state, event| {
        let props = LookupScreenProps {
            state,
            is_focused: false, // Not focused!
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::LookupDidLoad {
        request_id: 1,
        reading: reading("Paris"),
    };
    let edit = Action::CityTextChange("Pa".into());
    let tick = Action::Tick;

    // Categories are inferred from naming convention
    assert_eq!(did_load.category(), Some("lookup_did"));
    assert_eq!(edit.category(), Some("city"));
    assert_eq!(tick.category(), None); // Uncategorized

    assert!(did_load.is_lookup_did());
    assert!(edit.is_city());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::LookupSubmit);
    harness.emit(Action::CityTextChange("Oslo".into()));
    harness.emit(Action::LookupDidFail {
        request_id: 1,
        error: LookupError::Rejected { status: 503 },
    });

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::LookupSubmit,
        Action::LookupDidLoad {
            request_id: 1,
            reading: reading("Paris"),
        },
    ];

    assert_emitted!(actions, Action::LookupSubmit);
    assert_emitted!(actions, Action::LookupDidLoad { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::LookupDidFail { .. });
}

#[test]
fn test_custom_city() {
    let state = AppState::new("My Town");

    assert_eq!(state.city_text, "My Town");
    assert!(!state.is_loading());
    assert!(state.lookup.is_empty());
}
