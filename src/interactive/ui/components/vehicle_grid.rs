use crate::interactive::constants::VEHICLE_PLACEHOLDER_COUNT;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::{ColorScheme, Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::{Vehicle, VehicleClass};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CARDS_PER_ROW: usize = 3;
const CARD_HEIGHT: u16 = 2;

/// Read-only cards for the catalog of the selected class.
#[derive(Default)]
pub struct VehicleGrid {
    vehicles: Vec<Vehicle>,
    class: VehicleClass,
    is_loading: bool,
}

impl VehicleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_vehicles(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
    }

    pub fn set_class(&mut self, class: VehicleClass) {
        self.class = class;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn card(vehicle: &Vehicle) -> Vec<Line<'_>> {
        vec![
            Line::from(Span::styled(
                vehicle.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("ID {} ", vehicle.id), Styles::dimmed()),
                Span::styled(
                    vehicle.class.label(),
                    Style::default().fg(ColorScheme::class(vehicle.class)),
                ),
            ]),
        ]
    }

    fn placeholder() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("░░░░░░░░░░░░░░", Styles::dimmed())),
            Line::from(Span::styled("░░░░░░░░", Styles::dimmed())),
        ]
    }

    fn render_cards(f: &mut Frame, area: Rect, cards: Vec<Vec<Line<'_>>>) {
        let rows = cards.len().div_ceil(CARDS_PER_ROW);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
            .split(area);

        let mut cards = cards.into_iter();
        for row_area in row_areas.iter() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
                .split(*row_area);
            for column in columns.iter() {
                let Some(card) = cards.next() else {
                    return;
                };
                f.render_widget(Paragraph::new(card).alignment(Alignment::Center), *column);
            }
        }
    }
}

impl Component for VehicleGrid {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Available Vehicles ({}) ", self.class.label()))
            .borders(Borders::ALL)
            .border_style(Styles::border(false));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.is_loading {
            let cards = (0..VEHICLE_PLACEHOLDER_COUNT).map(|_| Self::placeholder()).collect();
            Self::render_cards(f, inner, cards);
        } else if self.vehicles.is_empty() {
            let empty = Paragraph::new(format!(
                "No vehicles available for {}",
                self.class.label()
            ))
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
            f.render_widget(empty, inner);
        } else {
            let cards = self.vehicles.iter().map(Self::card).collect();
            Self::render_cards(f, inner, cards);
        }
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
