use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::state::SearchFocus;

pub const BUTTON_LABEL: &str = "[ Search ]";
const PLACEHOLDER: &str = "Enter a city name...";

/// City input with a Search button beside it
pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub value: &'a str,
    pub focus: SearchFocus,
    pub is_focused: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => return vec![Action::UiFocusNext],
            KeyCode::Enter => return vec![(props.on_submit)(props.value.to_string())],
            _ => {}
        }

        match props.focus {
            SearchFocus::Button => match key.code {
                KeyCode::Char(' ') => vec![(props.on_submit)(props.value.to_string())],
                _ => Vec::new(),
            },
            SearchFocus::Input => {
                let input_props = TextInputProps {
                    value: props.value,
                    placeholder: PLACEHOLDER,
                    is_focused: true,
                    style: TextInputStyle {
                        base: BaseStyle {
                            border: None,
                            padding: Padding::new(1, 0, 1, 0),
                            bg: None,
                            fg: None,
                        },
                        placeholder_style: None,
                        cursor_style: None,
                    },
                    on_change: props.on_change,
                    on_submit: props.on_submit,
                    on_cursor_move: Some(|_| Action::Render),
                };
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(BUTTON_LABEL.len() as u16 + 2),
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused && props.focus == SearchFocus::Input,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let button_style = if props.is_focused && props.focus == SearchFocus::Button {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let button_area = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(chunks[1])[1];
        frame.render_widget(
            Paragraph::new(BUTTON_LABEL)
                .style(button_style)
                .alignment(Alignment::Center),
            button_area,
        );
    }
}
