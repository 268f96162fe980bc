use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    AppHeader, Component, ERROR_BANNER_HEIGHT, ErrorBanner, ErrorBannerProps,
    InputPanel, InputPanelProps, RESULT_PANEL_HEIGHT, ResultPanel, ResultPanelProps,
};
use crate::action::Action;
use crate::state::AppState;

const HEADER_HEIGHT: u16 = 8;
const INPUT_HEIGHT: u16 = 3;

pub const ATTRIBUTION: &str = "Powered by Open-Meteo API";

/// Props for LookupScreen - read-only view of state
pub struct LookupScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole lookup view: header, input, error banner, result, hints
#[derive(Default)]
pub struct LookupScreen {
    input: InputPanel,
}

impl LookupScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props(state: &AppState, is_focused: bool) -> InputPanelProps<'_> {
        InputPanelProps {
            city_text: &state.city_text,
            is_loading: state.is_loading(),
            pulse_on: state.pulse_on(),
            is_focused,
            on_change: Action::CityTextChange,
            on_submit: || Action::LookupSubmit,
        }
    }
}

impl Component<Action> for LookupScreen {
    type Props<'a> = LookupScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        self.input
            .handle_event(event, Self::input_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: LookupScreenProps<'_>) {
        let state = props.state;
        let error_h = if state.last_error().is_some() {
            ERROR_BANNER_HEIGHT
        } else {
            0
        };

        let chunks = Layout::vertical([
            Constraint::Max(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(error_h),
            Constraint::Length(RESULT_PANEL_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut header = AppHeader;
        header.render(frame, chunks[0], ());

        self.input
            .render(frame, chunks[2], Self::input_props(state, props.is_focused));

        let mut banner = ErrorBanner;
        banner.render(
            frame,
            chunks[4],
            ErrorBannerProps {
                error: state.last_error(),
            },
        );

        if state.lookup.is_empty() {
            let hint = Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to get the weather", Style::default().fg(Color::DarkGray)),
            ])
            .centered();
            frame.render_widget(Paragraph::new(hint), chunks[5]);
        } else {
            let mut result = ResultPanel;
            result.render(
                frame,
                chunks[5],
                ResultPanelProps {
                    reading: state.last_result(),
                },
            );
        }

        let attribution = [StatusBarItem::span(Span::styled(
            ATTRIBUTION,
            Style::default().fg(Color::DarkGray),
        ))];
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[7],
            StatusBarProps {
                left: StatusBarSection::hints(&[
                    StatusBarHint::new("Enter", "get weather"),
                    StatusBarHint::new("F5", "submit"),
                    StatusBarHint::new("Esc", "quit"),
                ])
                .with_separator("  "),
                center: StatusBarSection::empty(),
                right: StatusBarSection::items(&attribution),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
    use tui_dispatch::DataResource;
    use tui_dispatch::testing::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> EventKind {
        EventKind::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_handle_event_submit() {
        let mut screen = LookupScreen::new();
        let state = AppState::default();
        let props = LookupScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = screen
            .handle_event(&press(KeyCode::Enter, KeyModifiers::NONE), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::LookupSubmit);
    }

    #[test]
    fn test_handle_event_quit() {
        let mut screen = LookupScreen::new();
        let state = AppState::default();

        for event in [
            press(KeyCode::Esc, KeyModifiers::NONE),
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let props = LookupScreenProps {
                state: &state,
                is_focused: true,
            };
            let actions: Vec<_> = screen.handle_event(&event, props).into_iter().collect();
            actions.assert_first(Action::Quit);
        }
    }

    #[test]
    fn test_click_on_rendered_button_submits() {
        let mut render = RenderHarness::new(60, 24);
        let mut screen = LookupScreen::new();
        let state = AppState::default();

        render.render_to_string_plain(|frame| {
            let props = LookupScreenProps {
                state: &state,
                is_focused: true,
            };
            screen.render(frame, frame.area(), props);
        });

        // Header rows 0..8, gap, then the input row band 9..12; button is the last 15 columns
        let click = EventKind::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 52,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        let props = LookupScreenProps {
            state: &state,
            is_focused: true,
        };
        let actions: Vec<_> = screen.handle_event(&click, props).into_iter().collect();
        actions.assert_first(Action::LookupSubmit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut screen = LookupScreen::new();
        let state = AppState::default();
        let props = LookupScreenProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = screen
            .handle_event(&press(KeyCode::Enter, KeyModifiers::NONE), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_loading() {
        let mut render = RenderHarness::new(60, 24);
        let mut screen = LookupScreen::new();

        let state = AppState {
            lookup: DataResource::Loading,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = LookupScreenProps {
                state: &state,
                is_focused: true,
            };
            screen.render(frame, frame.area(), props);
        });

        assert!(output.contains("Loading..."));
        assert!(!output.contains("Code:"));
    }
}
