use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const SUBMIT_LABEL: &str = "Get Weather";
pub const LOADING_LABEL: &str = "Loading...";
pub const PLACEHOLDER: &str = "Enter city name...";

const BUTTON_WIDTH: u16 = 15;

/// City text field plus the submit control
pub struct InputPanel {
    input: TextInput,
    /// Where the button was last drawn, for click hit-testing
    button_area: Rect,
}

pub struct InputPanelProps<'a> {
    pub city_text: &'a str,
    pub is_loading: bool,
    /// Bright half of the "Loading..." pulse
    pub pulse_on: bool,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn() -> Action,
}

impl Default for InputPanel {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            button_area: Rect::default(),
        }
    }
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg: Some(Color::Rgb(31, 41, 55)),
            fg: Some(Color::White),
        },
        placeholder_style: Some(Style::default().fg(Color::DarkGray)),
        cursor_style: None,
    }
}

/// Enter never reaches the text input, this only satisfies its props
fn submit_from_input(_: String) -> Action {
    Action::LookupSubmit
}

impl Component<Action> for InputPanel {
    type Props<'a> = InputPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let key = match event {
            EventKind::Key(key) => key,
            EventKind::Mouse(mouse) => {
                let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && self
                        .button_area
                        .contains(Position::new(mouse.column, mouse.row));
                if clicked && !props.is_loading {
                    return vec![(props.on_submit)()];
                }
                return Vec::new();
            }
            _ => return Vec::new(),
        };

        // Enter in the field, F5 and a button click share one submit path
        if matches!(key.code, KeyCode::Enter | KeyCode::F(5)) {
            if props.is_loading {
                return Vec::new();
            }
            return vec![(props.on_submit)()];
        }

        // Everything else edits the text, loading or not
        let input_props = TextInputProps {
            value: props.city_text,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: props.on_change,
            on_submit: submit_from_input,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),              // Text field
            Constraint::Length(1),            // Gap
            Constraint::Length(BUTTON_WIDTH), // Submit
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.city_text,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(),
            on_change: props.on_change,
            on_submit: submit_from_input,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let (label, style) = if props.is_loading {
            let fg = if props.pulse_on {
                Color::White
            } else {
                Color::Gray
            };
            (
                LOADING_LABEL,
                Style::default()
                    .bg(Color::Rgb(75, 85, 99))
                    .fg(fg)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (
                SUBMIT_LABEL,
                Style::default()
                    .bg(Color::Rgb(37, 99, 235))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };

        // Vertically centre the label in a button as tall as the field
        let button = Paragraph::new(vec![Line::default(), Line::from(label), Line::default()])
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(button, chunks[2]);
        self.button_area = chunks[2];
    }
}
