#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::confirmation_dialog::ConfirmationDialog;
    use crate::interactive::ui::events::Message;
    use crate::schemas::{RentalPreview, VehicleClass};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn render_component(component: &mut ConfirmationDialog) -> Buffer {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                component.render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    fn create_preview() -> RentalPreview {
        RentalPreview {
            vehicle_name: "Economy Car A1".to_string(),
            class: VehicleClass::A,
            total_cost: 55.0,
            hours: 2.0,
            kilometers: 10.0,
        }
    }

    #[test]
    fn test_renders_nothing_without_preview() {
        let mut dialog = ConfirmationDialog::new();
        let buffer = render_component(&mut dialog);

        assert!(!buffer_contains(&buffer, "Confirm Rental"));
        assert!(buffer.content.iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn test_renders_preview_details() {
        let mut dialog = ConfirmationDialog::new();
        dialog.set_preview(Some(create_preview()));

        let buffer = render_component(&mut dialog);
        assert!(buffer_contains(&buffer, "Confirm Rental"));
        assert!(buffer_contains(&buffer, "Economy Car A1"));
        assert!(buffer_contains(&buffer, "Class A"));
        assert!(buffer_contains(&buffer, "2 hours"));
        assert!(buffer_contains(&buffer, "10 km"));
        assert!(buffer_contains(&buffer, "$50.00"));
        assert!(buffer_contains(&buffer, "$5.00"));
        assert!(buffer_contains(&buffer, "$55.00"));
        assert!(buffer_contains(&buffer, "y/Enter: Confirm | n/Esc: Cancel"));
    }

    #[test]
    fn test_confirm_and_cancel_keys() {
        let mut dialog = ConfirmationDialog::new();
        dialog.set_preview(Some(create_preview()));

        assert_eq!(
            dialog.handle_key(create_key_event(KeyCode::Char('y'))),
            Some(Message::ConfirmRental)
        );
        assert_eq!(
            dialog.handle_key(create_key_event(KeyCode::Enter)),
            Some(Message::ConfirmRental)
        );
        assert_eq!(
            dialog.handle_key(create_key_event(KeyCode::Char('n'))),
            Some(Message::CancelRental)
        );
        assert_eq!(
            dialog.handle_key(create_key_event(KeyCode::Esc)),
            Some(Message::CancelRental)
        );
        assert_eq!(dialog.handle_key(create_key_event(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_keys_ignored_while_confirming() {
        let mut dialog = ConfirmationDialog::new();
        dialog.set_preview(Some(create_preview()));
        dialog.set_confirming(true);

        assert_eq!(dialog.handle_key(create_key_event(KeyCode::Char('y'))), None);
        assert_eq!(dialog.handle_key(create_key_event(KeyCode::Esc)), None);

        let buffer = render_component(&mut dialog);
        assert!(buffer_contains(&buffer, "Confirming rental..."));
    }

    #[test]
    fn test_keys_ignored_without_preview() {
        let mut dialog = ConfirmationDialog::new();
        assert_eq!(dialog.handle_key(create_key_event(KeyCode::Char('y'))), None);
    }
}
