use crate::interactive::constants::CONFIRM_DIALOG_WIDTH;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::{ColorScheme, Styles, centered_rect};
use crate::interactive::ui::events::Message;
use crate::schemas::RentalPreview;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const LABEL_WIDTH: usize = 12;

/// Shows a rental preview for confirmation. Renders nothing without one.
#[derive(Default)]
pub struct ConfirmationDialog {
    preview: Option<RentalPreview>,
    is_confirming: bool,
}

impl ConfirmationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_preview(&mut self, preview: Option<RentalPreview>) {
        self.preview = preview;
    }

    pub fn set_confirming(&mut self, is_confirming: bool) {
        self.is_confirming = is_confirming;
    }

    fn detail(label: &'static str, value: String, style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), Styles::label()),
            Span::styled(value, style),
        ])
    }

    fn lines(
        preview: &RentalPreview,
        is_confirming: bool,
        inner_width: usize,
    ) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::detail("Vehicle", preview.vehicle_name.clone(), Styles::normal()),
            Self::detail(
                "Class",
                preview.class.label(),
                Style::default().fg(ColorScheme::class(preview.class)),
            ),
            Self::detail("Duration", preview.duration_label(), Styles::normal()),
            Self::detail("Distance", preview.distance_label(), Styles::normal()),
            Line::from(""),
        ];

        let breakdown = preview.breakdown().lines();
        let last = breakdown.len().saturating_sub(1);
        for (i, (label, amount)) in breakdown.into_iter().enumerate() {
            let pad = inner_width.saturating_sub(label.chars().count() + amount.chars().count());
            let style = if i == last { Styles::success() } else { Styles::normal() };
            lines.push(Line::from(vec![
                Span::styled(label, style),
                Span::raw(" ".repeat(pad)),
                Span::styled(amount, style),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(if is_confirming {
            Line::from(Span::styled("Confirming rental...", Styles::label()))
        } else {
            Line::from(Span::styled("y/Enter: Confirm | n/Esc: Cancel", Styles::dimmed()))
        });
        lines
    }
}

impl Component for ConfirmationDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(preview) = &self.preview else {
            return;
        };

        let inner_width = CONFIRM_DIALOG_WIDTH.saturating_sub(2) as usize;
        let lines = Self::lines(preview, self.is_confirming, inner_width);
        let dialog_area = centered_rect(CONFIRM_DIALOG_WIDTH, lines.len() as u16 + 2, area);

        f.render_widget(Clear, dialog_area);
        let dialog = Paragraph::new(lines).block(
            Block::default()
                .title(" Confirm Rental ")
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        );
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.preview.is_none() || self.is_confirming {
            return None;
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(Message::ConfirmRental),
            KeyCode::Char('n') | KeyCode::Esc => Some(Message::CancelRental),
            _ => None,
        }
    }
}
