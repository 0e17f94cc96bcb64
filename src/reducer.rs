//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::LookupError;
use crate::page::RenderPort;
use crate::render;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchInputChange(value) => {
            if state.input == value {
                return DispatchResult::unchanged();
            }
            state.input = value;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            state.input = raw;
            let city = state.input.trim().to_string();
            if city.is_empty() {
                render::show_error(&mut state.page, &LookupError::EmptyInput.to_string());
                return DispatchResult::changed();
            }

            state.page.set_loading(true);
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::ResolveWeather { city })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(reading) => {
            render::show_weather(&mut state.page, &reading, state.mode, &state.config);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            render::show_error(&mut state.page, &message);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiFocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.page.loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
