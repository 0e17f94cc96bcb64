//! Flow tests using EffectStoreTestHarness
//!
//! Store, component, and render testing combined: dispatch the user's
//! action, check the declared effect, then complete it the way the effect
//! handler would.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tui_dispatch::testing::*;
use tui_dispatch::EventKind;
use weather_lookup::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    demo::DemoResolver,
    effect::Effect,
    reducer::reducer,
    resolver::WeatherResolver,
    state::{AppState, SearchFocus},
};

fn press(code: KeyCode) -> EventKind {
    EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Run the resolver the way the effect handler does
async fn complete(effect: &Effect) -> Action {
    let resolver = DemoResolver::new(Duration::ZERO);
    match effect {
        Effect::ResolveWeather { city } => match resolver.resolve(city).await {
            Ok(reading) => Action::WeatherDidLoad(reading),
            Err(e) => Action::WeatherDidError(e.to_string()),
        },
    }
}

// ============================================================================
// Lookup flow
// ============================================================================

#[tokio::test]
async fn test_demo_lookup_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("london".into()));
    harness.assert_state(|s| s.page.loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::ResolveWeather { city } if city == "london"),
    );

    harness.complete_action(complete(&effects[0]).await);
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.page.loading);
    harness.assert_state(|s| s.page.result_visible);
    harness.assert_state(|s| s.page.city_name == "London, GB");
    harness.assert_state(|s| s.page.temperature == "14°C");
    harness.assert_state(|s| s.page.error_text.is_empty());
}

#[tokio::test]
async fn test_unknown_city_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Gotham".into()));
    let effects = harness.drain_effects();

    harness.complete_action(complete(&effects[0]).await);
    harness.process_emitted();

    harness.assert_state(|s| !s.page.loading);
    harness.assert_state(|s| !s.page.result_visible);
    harness.assert_state(|s| s.page.error_text == "City not found in demo data");
}

#[tokio::test]
async fn test_failure_hides_earlier_success() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Tokyo".into()));
    let effects = harness.drain_effects();
    harness.complete_action(complete(&effects[0]).await);
    harness.process_emitted();
    harness.assert_state(|s| s.page.result_visible);

    harness.dispatch_collect(Action::SearchSubmit("Nowhere".into()));
    let effects = harness.drain_effects();
    harness.complete_action(complete(&effects[0]).await);
    harness.process_emitted();

    harness.assert_state(|s| !s.page.result_visible);
    harness.assert_state(|s| s.page.has_error());
}

#[test]
fn test_blank_search_emits_nothing() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit(" \t ".into()));

    let effects = harness.drain_effects();
    effects.effects_empty();
    harness.assert_state(|s| s.page.error_text == "Please enter a city name");
    harness.assert_state(|s| !s.page.loading);
}

#[test]
fn test_success_clears_validation_error() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit(String::new()));
    harness.assert_state(|s| s.page.has_error());

    harness.complete_action(Action::WeatherDidLoad(
        weather_lookup::demo::demo_reading("New York").unwrap_or_default(),
    ));
    harness.process_emitted();

    harness.assert_state(|s| !s.page.has_error());
    harness.assert_state(|s| !s.page.loading);
}

// ============================================================================
// Component + Store Integration Tests
// ============================================================================

/// Feed one key through the display component and reduce what it emits
fn key_through_display(
    component: &mut WeatherDisplay,
    state: &mut AppState,
    code: KeyCode,
) -> Vec<Effect> {
    let actions: Vec<_> = component
        .handle_event(
            &press(code),
            WeatherDisplayProps {
                state,
                is_focused: true,
            },
        )
        .into_iter()
        .collect();

    let mut effects = Vec::new();
    for action in actions {
        effects.extend(reducer(state, action).effects);
    }
    effects
}

#[test]
fn test_enter_key_submits_current_input() {
    let mut state = AppState::default().with_input("Tokyo");
    let mut component = WeatherDisplay::new();

    let effects = key_through_display(&mut component, &mut state, KeyCode::Enter);

    assert_eq!(
        effects,
        vec![Effect::ResolveWeather {
            city: "Tokyo".into()
        }]
    );
    assert!(state.page.loading);
}

#[test]
fn test_tab_then_enter_activates_button() {
    let mut state = AppState::default().with_input("  Paris ");
    let mut component = WeatherDisplay::new();

    let effects = key_through_display(&mut component, &mut state, KeyCode::Tab);
    assert!(effects.is_empty());
    assert_eq!(state.focus, SearchFocus::Button);

    let effects = key_through_display(&mut component, &mut state, KeyCode::Enter);
    assert_eq!(
        effects,
        vec![Effect::ResolveWeather {
            city: "Paris".into()
        }]
    );
}

// ============================================================================
// Render Tests with Harness
// ============================================================================

#[test]
fn test_render_loading_indicator() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::new();

    harness.dispatch_collect(Action::SearchSubmit("London".into()));

    let output = harness.render_plain(60, 20, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("Loading..."),
        "Loading indicator should be visible:\n{}",
        output
    );
}

#[test]
fn test_render_error_message() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = WeatherDisplay::new();

    harness.dispatch_collect(Action::SearchSubmit(String::new()));

    let output = harness.render_plain(60, 20, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("Please enter a city name"),
        "Validation message should be visible:\n{}",
        output
    );
    assert!(!output.contains("Loading..."));
}

// ============================================================================
// Async Simulation Tests
// ============================================================================

#[test]
fn test_last_completion_wins() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let london = weather_lookup::demo::demo_reading("London").unwrap_or_default();
    let tokyo = weather_lookup::demo::demo_reading("Tokyo").unwrap_or_default();
    harness.complete_action(Action::WeatherDidLoad(london));
    harness.complete_action(Action::WeatherDidLoad(tokyo));

    let (changed, total) = harness.process_emitted();
    assert_eq!(total, 2);
    assert_eq!(changed, 2);

    harness.assert_state(|s| s.page.city_name == "Tokyo, JP");
}
