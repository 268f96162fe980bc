use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::conditions;
use crate::state::WeatherReading;

/// Rows needed to show a reading: border + 3 lines + border
pub const RESULT_PANEL_HEIGHT: u16 = 5;

/// Last successful reading; draws nothing without one
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub reading: Option<&'a WeatherReading>,
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(reading) = props.reading else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(55, 65, 81)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::horizontal([
            Constraint::Fill(1), // Temperature + city
            Constraint::Fill(1), // Code + time
        ])
        .split(inner);

        let muted = Style::default().fg(Color::Gray);

        let left = vec![
            Line::from(Span::styled(
                reading.temperature_label(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                reading.summary_label(),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(conditions::describe(reading.weather_code), muted)),
        ];
        frame.render_widget(Paragraph::new(left), columns[0]);

        let right = vec![
            Line::from(Span::styled(reading.code_label(), muted)).right_aligned(),
            Line::from(Span::styled(reading.observed_label(), muted)).right_aligned(),
            Line::from(reading.condition().emoji()).right_aligned(),
        ];
        frame.render_widget(Paragraph::new(right), columns[1]);
    }
}
