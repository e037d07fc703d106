pub mod confirmation_dialog;
pub mod help_dialog;
pub mod inventory_table;
pub mod rental_form;
pub mod stock_form;
pub mod text_input;
pub mod type_selector;
pub mod vehicle_grid;
pub mod view_layout;

#[cfg(test)]
mod confirmation_dialog_test;
#[cfg(test)]
mod vehicle_grid_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

/// Check if a status text is the exit prompt
pub fn is_exit_prompt(message: Option<&str>) -> bool {
    message == Some(EXIT_PROMPT)
}
