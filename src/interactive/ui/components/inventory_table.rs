use crate::interactive::constants::INVENTORY_PLACEHOLDER_COUNT;
use crate::interactive::domain::filter::{InventoryQuery, summary};
use crate::interactive::domain::models::{Focus, SortField};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::components::view_layout::{ColorScheme, Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::InventoryItem;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

/// Searchable, sortable stock table.
///
/// Rows arrive already filtered and sorted; the table only tracks the cursor
/// and the search text being edited.
#[derive(Default)]
pub struct InventoryTable {
    rows: Vec<InventoryItem>,
    total: usize,
    query: InventoryQuery,
    is_loading: bool,
    selected_index: usize,
    focused: bool,
    search_focused: bool,
    search_input: TextInput,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, rows: Vec<InventoryItem>, total: usize) {
        self.rows = rows;
        self.total = total;
        if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }
    }

    /// Syncs the search text only when it differs, so the cursor survives
    /// redraws.
    pub fn set_query(&mut self, query: &InventoryQuery) {
        if self.search_input.text() != query.search_term {
            self.search_input.set_text(query.search_term.clone());
        }
        self.query = query.clone();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.rows.len().saturating_sub(1));
    }

    pub fn set_focus(&mut self, focused: bool, search_focused: bool) {
        self.focused = focused || search_focused;
        self.search_focused = search_focused;
    }

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.rows.get(self.selected_index)
    }

    fn header_label(&self, field: SortField) -> String {
        if self.query.sort_field == field {
            format!("{} {}", field.label(), self.query.sort_direction.arrow())
        } else {
            field.label().to_string()
        }
    }

    fn render_search(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("Search: ", Styles::label())];
        if self.search_input.text().is_empty() && !self.search_focused {
            spans.push(Span::styled("press / to filter by name or type", Styles::dimmed()));
        } else {
            spans.extend(self.search_input.render_cursor_spans(self.search_focused));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_rows(&self, f: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            Cell::from(self.header_label(SortField::Name)),
            Cell::from(self.header_label(SortField::Class)),
            Cell::from(self.header_label(SortField::AvailableCount)),
            Cell::from("Status"),
        ])
        .style(Styles::label().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = if self.is_loading {
            (0..INVENTORY_PLACEHOLDER_COUNT)
                .map(|_| {
                    Row::new(vec!["░░░░░░░░░░░░", "░", "░░", "░░░░░░"]).style(Styles::dimmed())
                })
                .collect()
        } else {
            self.rows
                .iter()
                .map(|item| {
                    let status = item.status();
                    Row::new(vec![
                        Cell::from(item.name.as_str()),
                        Cell::from(Span::styled(
                            item.class.label(),
                            Style::default().fg(ColorScheme::class(item.class)),
                        )),
                        Cell::from(item.available_count.to_string()),
                        Cell::from(Span::styled(
                            status.label(),
                            Style::default().fg(ColorScheme::stock(status)),
                        )),
                    ])
                })
                .collect()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Min(18),
                Constraint::Length(8),
                Constraint::Length(18),
                Constraint::Length(13),
            ],
        )
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("> ");

        let mut state = TableState::default();
        if self.focused && !self.is_loading && !self.rows.is_empty() {
            state.select(Some(self.selected_index));
        }
        f.render_stateful_widget(table, area, &mut state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let text = if self.is_loading {
            "Loading inventory...".to_string()
        } else if self.rows.is_empty() {
            if self.query.search_term.is_empty() {
                "No inventory data available".to_string()
            } else {
                "No vehicles match your search".to_string()
            }
        } else {
            summary(self.rows.len(), self.total)
        };
        f.render_widget(
            Paragraph::new(text)
                .style(Styles::dimmed())
                .alignment(Alignment::Center),
            area,
        );
    }
}

impl Component for InventoryTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Inventory ")
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Search
                Constraint::Min(0),    // Table
                Constraint::Length(1), // Summary
            ])
            .split(inner);

        self.render_search(f, chunks[0]);
        self.render_rows(f, chunks[1]);
        self.render_footer(f, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.search_focused {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Message::SetFocus(Focus::Inventory)),
                _ => self
                    .search_input
                    .handle_key(key)
                    .then(|| Message::InventorySearchChanged(self.search_input.text().to_string())),
            };
        }

        match key.code {
            KeyCode::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                    Some(Message::InventorySelectionChanged(self.selected_index))
                } else {
                    None
                }
            }
            KeyCode::Down => {
                if self.selected_index + 1 < self.rows.len() {
                    self.selected_index += 1;
                    Some(Message::InventorySelectionChanged(self.selected_index))
                } else {
                    None
                }
            }
            KeyCode::Char('/') => Some(Message::SetFocus(Focus::InventorySearch)),
            KeyCode::Char('n') => Some(Message::SortInventory(SortField::Name)),
            KeyCode::Char('c') => Some(Message::SortInventory(SortField::Class)),
            KeyCode::Char('v') => Some(Message::SortInventory(SortField::AvailableCount)),
            KeyCode::Char('r') => Some(Message::RefreshInventory),
            KeyCode::Char('+') => Some(Message::OpenStockForm),
            _ => None,
        }
    }
}
