#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::vehicle_grid::VehicleGrid;
    use crate::provider::mock::catalog_for;
    use crate::schemas::VehicleClass;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_component(component: &mut VehicleGrid) -> Buffer {
        let backend = TestBackend::new(90, 6);
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

    #[test]
    fn test_renders_catalog_cards() {
        let mut grid = VehicleGrid::new();
        grid.set_class(VehicleClass::B);
        grid.set_vehicles(catalog_for(VehicleClass::B));

        let buffer = render_component(&mut grid);
        assert!(buffer_contains(&buffer, "Available Vehicles (Class B)"));
        assert!(buffer_contains(&buffer, "Economy Car B1"));
        assert!(buffer_contains(&buffer, "Standard Car B2"));
        assert!(buffer_contains(&buffer, "Premium Car B3"));
        assert!(buffer_contains(&buffer, "ID B-1"));
    }

    #[test]
    fn test_loading_shows_placeholders_not_empty_state() {
        let mut grid = VehicleGrid::new();
        grid.set_loading(true);

        let buffer = render_component(&mut grid);
        assert!(buffer_contains(&buffer, "░░░"));
        assert!(!buffer_contains(&buffer, "No vehicles available"));
    }

    #[test]
    fn test_empty_state_names_class() {
        let mut grid = VehicleGrid::new();
        grid.set_class(VehicleClass::C);

        let buffer = render_component(&mut grid);
        assert!(buffer_contains(&buffer, "No vehicles available for Class C"));
    }
}
