use crate::interactive::constants::{MAX_VISIBLE_SUGGESTIONS, STOCK_DIALOG_WIDTH};
use crate::interactive::domain::validation::{Field, FieldErrors};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::components::view_layout::{Styles, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StockField {
    #[default]
    VehicleName,
    Quantity,
}

/// Modal dialog for adding units of a vehicle to the inventory.
#[derive(Default)]
pub struct StockForm {
    name_input: TextInput,
    quantity_input: TextInput,
    active_field: StockField,
    suggestions: Vec<String>,
    show_suggestions: bool,
    suggestion_index: usize,
    errors: FieldErrors,
    is_submitting: bool,
}

impl StockForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_vehicle_name(&mut self, name: &str) {
        if self.name_input.text() != name {
            self.name_input.set_text(name.to_string());
        }
    }

    pub fn set_quantity(&mut self, quantity: &str) {
        if self.quantity_input.text() != quantity {
            self.quantity_input.set_text(quantity.to_string());
        }
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<String>, show: bool) {
        if suggestions != self.suggestions {
            self.suggestion_index = 0;
        }
        self.suggestions = suggestions;
        self.show_suggestions = show && !self.suggestions.is_empty();
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn set_submitting(&mut self, is_submitting: bool) {
        self.is_submitting = is_submitting;
    }

    pub fn active_field(&self) -> StockField {
        self.active_field
    }

    /// Back to the name field, used when the dialog opens.
    pub fn reset_focus(&mut self) {
        self.active_field = StockField::VehicleName;
        self.suggestion_index = 0;
    }

    fn suggesting(&self) -> bool {
        self.active_field == StockField::VehicleName && self.show_suggestions
    }

    fn field_lines<'a>(
        &'a self,
        label: &'a str,
        input: &'a TextInput,
        field: StockField,
        error: Option<&'static str>,
    ) -> Vec<Line<'a>> {
        let focused = self.active_field == field && !self.is_submitting;
        let marker = if focused { "> " } else { "  " };
        let mut spans = vec![Span::styled(marker, Styles::label())];
        spans.extend(input.render_cursor_spans(focused));

        let mut lines = vec![Line::from(Span::styled(label, Styles::label())), Line::from(spans)];
        if let Some(error) = error {
            lines.push(Line::from(Span::styled(format!("  {error}"), Styles::field_error())));
        }
        lines
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let mut lines = self.field_lines(
            "Vehicle Name",
            &self.name_input,
            StockField::VehicleName,
            self.errors.get(Field::VehicleName),
        );

        if self.suggesting() {
            let start = self
                .suggestion_index
                .saturating_sub(MAX_VISIBLE_SUGGESTIONS - 1);
            for (i, suggestion) in self
                .suggestions
                .iter()
                .enumerate()
                .skip(start)
                .take(MAX_VISIBLE_SUGGESTIONS)
            {
                let style = if i == self.suggestion_index {
                    Styles::selected()
                } else {
                    Styles::dimmed()
                };
                lines.push(Line::from(Span::styled(format!("    {suggestion}"), style)));
            }
        }

        lines.push(Line::from(""));
        lines.extend(self.field_lines(
            "Quantity",
            &self.quantity_input,
            StockField::Quantity,
            self.errors.get(Field::Quantity),
        ));
        lines.push(Line::from(""));

        let footer = if self.is_submitting {
            Span::styled("Adding stock...", Styles::label())
        } else {
            Span::styled("Enter: Submit | Tab: Next field | Esc: Cancel", Styles::dimmed())
        };
        lines.push(Line::from(footer));
        lines
    }

    fn text_changed(&self) -> Message {
        match self.active_field {
            StockField::VehicleName => {
                Message::StockNameChanged(self.name_input.text().to_string())
            }
            StockField::Quantity => {
                Message::StockQuantityChanged(self.quantity_input.text().to_string())
            }
        }
    }
}

impl Component for StockForm {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = self.lines();
        let dialog_area = centered_rect(STOCK_DIALOG_WIDTH, lines.len() as u16 + 2, area);

        f.render_widget(Clear, dialog_area);
        let dialog = Paragraph::new(lines).block(
            Block::default()
                .title(" Add Stock ")
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        );
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.is_submitting {
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(Message::CloseStockForm),
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_field = match self.active_field {
                    StockField::VehicleName => StockField::Quantity,
                    StockField::Quantity => StockField::VehicleName,
                };
                None
            }
            KeyCode::Up if self.suggesting() => {
                self.suggestion_index = self.suggestion_index.saturating_sub(1);
                None
            }
            KeyCode::Down if self.suggesting() => {
                if self.suggestion_index + 1 < self.suggestions.len() {
                    self.suggestion_index += 1;
                }
                None
            }
            KeyCode::Enter => match self.suggestions.get(self.suggestion_index) {
                Some(suggestion) if self.suggesting() => {
                    Some(Message::SelectSuggestion(suggestion.clone()))
                }
                _ => Some(Message::SubmitStock),
            },
            _ => {
                let changed = match self.active_field {
                    StockField::VehicleName => self.name_input.handle_key(key),
                    StockField::Quantity => self.quantity_input.handle_key(key),
                };
                changed.then(|| self.text_changed())
            }
        }
    }
}
