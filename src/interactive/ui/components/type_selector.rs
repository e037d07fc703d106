use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::{ColorScheme, Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::VehicleClass;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Three mutually exclusive class options.
#[derive(Default)]
pub struct TypeSelector {
    selected: VehicleClass,
    focused: bool,
}

impl TypeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected(&mut self, class: VehicleClass) {
        self.selected = class;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn selected(&self) -> VehicleClass {
        self.selected
    }

    fn option_lines(&self, class: VehicleClass) -> Vec<Line<'static>> {
        let is_selected = class == self.selected;
        let marker = if is_selected { "(•) " } else { "( ) " };
        let label_style = if is_selected {
            Style::default()
                .fg(ColorScheme::class(class))
                .add_modifier(Modifier::BOLD)
        } else {
            Styles::normal()
        };
        vec![
            Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(class.label(), label_style),
                Span::styled(format!(" [{}]", class.index() + 1), Styles::dimmed()),
            ]),
            Line::from(Span::styled(class.description(), Styles::dimmed())),
        ]
    }
}

impl Component for TypeSelector {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Vehicle Type ")
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(inner);

        for (class, column) in VehicleClass::ALL.into_iter().zip(columns.iter()) {
            let option = Paragraph::new(self.option_lines(class)).alignment(Alignment::Center);
            f.render_widget(option, *column);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let class = match key.code {
            KeyCode::Char('1') => VehicleClass::A,
            KeyCode::Char('2') => VehicleClass::B,
            KeyCode::Char('3') => VehicleClass::C,
            KeyCode::Left => self.selected.previous(),
            KeyCode::Right => self.selected.next(),
            _ => return None,
        };
        Some(Message::SelectClass(class))
    }
}
