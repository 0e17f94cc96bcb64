//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use tui_dispatch::testing::*;
use weather_lookup::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    config::LookupConfig,
    demo::demo_reading,
    render::{show_error, show_weather},
    state::{AppState, WeatherReading},
};

fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay::new();
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn loaded(reading: &WeatherReading) -> AppState {
    let mut state = AppState::default();
    show_weather(&mut state.page, reading, state.mode, &state.config);
    state
}

#[test]
fn test_render_loading_state() {
    let mut state = AppState::default();
    state.page.loading = true;

    let output = render_state(&state, 60, 24);

    assert!(output.contains("Loading..."), "Should show loading");
    assert!(!output.contains("Humidity"), "Result panel stays hidden");
}

#[test]
fn test_render_demo_reading() {
    let reading = demo_reading("London").unwrap_or_default();
    let output = render_state(&loaded(&reading), 70, 24);

    assert!(output.contains("London, GB"), "Should show city:\n{output}");
    assert!(output.contains("light rain"), "Should show description");
    assert!(output.contains("Humidity: 82%"), "Should show humidity");
    assert!(output.contains("Wind: 4.1 m/s"), "Should show wind");
    assert!(output.contains("images/rain.jpg"), "Should show local icon");
    assert!(output.contains("images/rain2.png"), "Should show background");
}

#[test]
fn test_render_sparse_reading_placeholders() {
    let reading = WeatherReading {
        name: "Null Island".into(),
        ..Default::default()
    };
    let output = render_state(&loaded(&reading), 70, 24);

    assert!(output.contains("Null Island"));
    assert!(output.contains("Humidity: -%"));
    assert!(output.contains("Wind: - m/s"));
    assert!(output.contains("images/search1.png"));
}

#[test]
fn test_render_live_icon_url() {
    let reading = WeatherReading {
        name: "Paris".into(),
        country: Some("FR".into()),
        temperature: Some(9.5),
        description: "mist".into(),
        main_category: Some("Mist".into()),
        icon_code: Some("50d".into()),
        humidity: Some(93),
        wind_speed: Some(1.0),
    };
    let mut state = AppState::new(LookupConfig::with_api_key("KEY1"));
    show_weather(&mut state.page, &reading, state.mode, &state.config);

    let output = render_state(&state, 90, 24);

    assert!(
        output.contains("openweathermap.org/img/wn/50d@2x.png"),
        "Should reference provider icon:\n{output}"
    );
    assert!(output.contains("Wind: 1 m/s"));
}

#[test]
fn test_render_error_state() {
    let mut state = loaded(&demo_reading("Tokyo").unwrap_or_default());
    show_error(&mut state.page, "City not found");

    let output = render_state(&state, 60, 20);

    assert!(output.contains("City not found"), "Should show error message");
    assert!(!output.contains("Tokyo, JP"), "Previous result is hidden");
}

#[test]
fn test_render_help_bar() {
    let output = render_state(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("focus"), "Should show focus hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_live_mode_hint() {
    let state = AppState::new(LookupConfig::with_api_key("KEY1"));
    let output = render_state(&state, 80, 24);

    assert!(output.contains("Using OpenWeatherMap"));
    assert!(!output.contains("Tokyo"));
}
