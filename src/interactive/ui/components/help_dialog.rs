use crate::interactive::constants::HELP_DIALOG_MAX_WIDTH;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::{Styles, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, Styles::label()))
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Vehicle Rental System", Styles::title())),
            Line::from(""),
            Self::section("Anywhere:"),
            Line::from("  Tab/Shift+Tab - Switch pane"),
            Line::from("  F5            - Refresh inventory"),
            Line::from("  ?             - Show this help"),
            Line::from("  q, Ctrl+C x2  - Quit"),
            Line::from(""),
            Self::section("Vehicle Type:"),
            Line::from("  1/2/3, ←/→    - Select class A, B or C"),
            Line::from(""),
            Self::section("Inventory:"),
            Line::from("  ↑/↓           - Move selection"),
            Line::from("  /             - Search by name or class"),
            Line::from("  n/c/v         - Sort by name, class or count"),
            Line::from("  r             - Refresh"),
            Line::from("  +             - Add stock"),
            Line::from(""),
            Self::section("Rental Request:"),
            Line::from("  ↑/↓           - Move between fields"),
            Line::from("  ←/→           - Choose vehicle"),
            Line::from("  Enter         - Preview rental"),
            Line::from(""),
            Self::section("Add Stock:"),
            Line::from("  Tab           - Next field"),
            Line::from("  ↑/↓, Enter    - Pick a suggestion"),
            Line::from("  Enter         - Submit"),
            Line::from("  Esc           - Cancel"),
            Line::from(""),
            Self::section("Confirm Rental:"),
            Line::from("  y/Enter       - Confirm"),
            Line::from("  n/Esc         - Cancel"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();
        let dialog_area = centered_rect(HELP_DIALOG_MAX_WIDTH, help_text.len() as u16 + 2, area);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
