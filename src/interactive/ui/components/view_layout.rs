use crate::interactive::domain::models::{Notification, NotificationKind};
use crate::interactive::ui::components::is_exit_prompt;
use crate::schemas::{StockStatus, VehicleClass};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::interactive::constants::{DIALOG_MARGIN, HEADER_HEIGHT, STATUS_BAR_HEIGHT};

/// Header, content and status bar frame around the console.
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    status_text: Option<String>,
    notification: Option<Notification>,
}

impl ViewLayout {
    pub fn new(title: String) -> Self {
        Self {
            title,
            subtitle: None,
            status_text: None,
            notification: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_status_text(mut self, text: String) -> Self {
        self.status_text = Some(text);
        self
    }

    /// A notification replaces the key hints while it is shown.
    pub fn with_notification(mut self, notification: Option<Notification>) -> Self {
        self.notification = notification;
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        self.render_title_bar(f, chunks[0]);
        render_content(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);
    }

    fn render_title_bar(&self, f: &mut Frame, area: Rect) {
        let mut title_lines = vec![Line::from(Span::styled(&self.title, Styles::title()))];
        if let Some(ref subtitle) = self.subtitle {
            title_lines.push(Line::from(Span::styled(subtitle, Styles::subtitle())));
        }

        let title_block = Paragraph::new(title_lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Center);

        f.render_widget(title_block, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_bar = match &self.notification {
            Some(notification) => {
                let style = match notification.kind {
                    NotificationKind::Success => Styles::success(),
                    NotificationKind::Error => Styles::error(),
                };
                Paragraph::new(notification.text()).style(style)
            }
            None => {
                let text = self
                    .status_text
                    .as_deref()
                    .unwrap_or("Tab: Switch pane | ?: Help | q: Quit");
                let style = if is_exit_prompt(Some(text)) {
                    Styles::warning()
                } else {
                    Styles::dimmed()
                };
                Paragraph::new(text).style(style)
            }
        };

        f.render_widget(status_bar.alignment(Alignment::Center), area);
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to keep
/// `DIALOG_MARGIN` free on every side.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(DIALOG_MARGIN));
    let height = height.min(area.height.saturating_sub(DIALOG_MARGIN));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    pub fn class(class: VehicleClass) -> Color {
        match class {
            VehicleClass::A => Color::Green,
            VehicleClass::B => Color::Blue,
            VehicleClass::C => Color::Magenta,
        }
    }

    pub fn stock(status: StockStatus) -> Color {
        match status {
            StockStatus::OutOfStock => Self::ERROR,
            StockStatus::LowStock => Self::WARNING,
            StockStatus::InStock => Self::SUCCESS,
        }
    }
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ColorScheme::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border; highlighted when the pane has focus.
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(ColorScheme::PRIMARY)
        } else {
            Style::default().fg(ColorScheme::TEXT_DIM)
        }
    }

    /// Inline validation message under a field.
    pub fn field_error() -> Style {
        Style::default().fg(ColorScheme::ERROR)
    }
}
