use crate::interactive::domain::validation::{Field, FieldErrors};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::components::view_layout::Styles;
use crate::interactive::ui::events::Message;
use crate::pricing::{format_currency, rental_cost};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RentalField {
    #[default]
    Vehicle,
    Hours,
    Kilometers,
}

impl RentalField {
    fn next(self) -> Self {
        match self {
            RentalField::Vehicle => RentalField::Hours,
            RentalField::Hours => RentalField::Kilometers,
            RentalField::Kilometers => RentalField::Vehicle,
        }
    }

    fn previous(self) -> Self {
        match self {
            RentalField::Vehicle => RentalField::Kilometers,
            RentalField::Hours => RentalField::Vehicle,
            RentalField::Kilometers => RentalField::Hours,
        }
    }
}

#[derive(Default)]
pub struct RentalForm {
    vehicles: Vec<String>,
    selected_vehicle: Option<String>,
    hours_input: TextInput,
    kilometers_input: TextInput,
    active_field: RentalField,
    errors: FieldErrors,
    catalog_loading: bool,
    is_submitting: bool,
    focused: bool,
}

impl RentalForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the vehicles that can be rented: the loaded catalog.
    pub fn set_vehicles(&mut self, vehicles: Vec<String>) {
        self.vehicles = vehicles;
    }

    pub fn set_selected_vehicle(&mut self, vehicle: Option<String>) {
        self.selected_vehicle = vehicle;
    }

    pub fn set_hours(&mut self, hours: &str) {
        if self.hours_input.text() != hours {
            self.hours_input.set_text(hours.to_string());
        }
    }

    pub fn set_kilometers(&mut self, kilometers: &str) {
        if self.kilometers_input.text() != kilometers {
            self.kilometers_input.set_text(kilometers.to_string());
        }
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn set_catalog_loading(&mut self, loading: bool) {
        self.catalog_loading = loading;
    }

    pub fn set_submitting(&mut self, is_submitting: bool) {
        self.is_submitting = is_submitting;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn active_field(&self) -> RentalField {
        self.active_field
    }

    fn enabled(&self) -> bool {
        !self.catalog_loading && !self.vehicles.is_empty()
    }

    /// Cycles through the catalog starting from the current selection.
    fn cycle_vehicle(&self, forward: bool) -> Option<String> {
        if self.vehicles.is_empty() {
            return None;
        }
        let len = self.vehicles.len();
        let current = self
            .selected_vehicle
            .as_ref()
            .and_then(|name| self.vehicles.iter().position(|v| v == name));
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.vehicles.get(index).cloned()
    }

    fn estimate(&self) -> Option<String> {
        let hours = self.hours_input.text().trim().parse::<f64>().ok()?;
        let kilometers = self.kilometers_input.text().trim().parse::<f64>().ok()?;
        (hours.is_finite() && kilometers.is_finite() && hours >= 1.0 && kilometers >= 0.0)
            .then(|| format_currency(rental_cost(hours, kilometers)))
    }

    fn marker(&self, field: RentalField) -> Span<'static> {
        if self.focused && self.active_field == field {
            Span::styled("> ", Styles::label())
        } else {
            Span::raw("  ")
        }
    }

    fn push_error(lines: &mut Vec<Line<'_>>, error: Option<&'static str>) {
        if let Some(error) = error {
            lines.push(Line::from(Span::styled(format!("    {error}"), Styles::field_error())));
        }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        let vehicle = match &self.selected_vehicle {
            Some(name) => Span::styled(format!("◀ {name} ▶"), Styles::normal()),
            None => Span::styled("◀ Select a vehicle ▶", Styles::dimmed()),
        };
        lines.push(Line::from(vec![
            self.marker(RentalField::Vehicle),
            Span::styled("Vehicle:    ", Styles::label()),
            vehicle,
        ]));
        Self::push_error(&mut lines, self.errors.get(Field::Vehicle));

        let editing = self.focused && !self.is_submitting;
        let mut hours = vec![
            self.marker(RentalField::Hours),
            Span::styled("Hours:      ", Styles::label()),
        ];
        hours.extend(
            self.hours_input
                .render_cursor_spans(editing && self.active_field == RentalField::Hours),
        );
        lines.push(Line::from(hours));
        Self::push_error(&mut lines, self.errors.get(Field::Hours));

        let mut kilometers = vec![
            self.marker(RentalField::Kilometers),
            Span::styled("Kilometers: ", Styles::label()),
        ];
        kilometers.extend(
            self.kilometers_input
                .render_cursor_spans(editing && self.active_field == RentalField::Kilometers),
        );
        lines.push(Line::from(kilometers));
        Self::push_error(&mut lines, self.errors.get(Field::Kilometers));

        lines.push(Line::from(""));
        if let Some(estimate) = self.estimate() {
            lines.push(Line::from(vec![
                Span::styled("  Estimated cost: ", Styles::dimmed()),
                Span::styled(estimate, Styles::success()),
            ]));
        }

        let footer = if self.is_submitting {
            Span::styled("  Calculating...", Styles::label())
        } else {
            Span::styled("  Enter: Preview rental", Styles::dimmed())
        };
        lines.push(Line::from(footer));
        lines
    }
}

impl Component for RentalForm {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Rental Request ")
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));

        let body = if self.catalog_loading {
            Paragraph::new("Loading vehicles...")
                .style(Styles::dimmed())
                .alignment(Alignment::Center)
        } else if self.vehicles.is_empty() {
            Paragraph::new("Select a vehicle type above to see available vehicles")
                .style(Styles::dimmed())
                .alignment(Alignment::Center)
        } else {
            Paragraph::new(self.lines())
        };

        f.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if !self.enabled() || self.is_submitting {
            return None;
        }

        match key.code {
            KeyCode::Up => {
                self.active_field = self.active_field.previous();
                None
            }
            KeyCode::Down => {
                self.active_field = self.active_field.next();
                None
            }
            KeyCode::Enter => Some(Message::SubmitRental),
            KeyCode::Left | KeyCode::Right if self.active_field == RentalField::Vehicle => self
                .cycle_vehicle(key.code == KeyCode::Right)
                .map(Message::RentalVehicleSelected),
            _ => match self.active_field {
                RentalField::Vehicle => None,
                RentalField::Hours => self
                    .hours_input
                    .handle_key(key)
                    .then(|| Message::RentalHoursChanged(self.hours_input.text().to_string())),
                RentalField::Kilometers => self.kilometers_input.handle_key(key).then(|| {
                    Message::RentalKilometersChanged(self.kilometers_input.text().to_string())
                }),
            },
        }
    }
}
