use crate::interactive::constants::{TYPE_SELECTOR_HEIGHT, VEHICLE_GRID_HEIGHT};
use crate::interactive::domain::models::{Focus, Mode};
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, confirmation_dialog::ConfirmationDialog, help_dialog::HelpDialog,
    inventory_table::InventoryTable, rental_form::RentalForm,
    stock_form::StockForm, type_selector::TypeSelector, vehicle_grid::VehicleGrid,
    view_layout::ViewLayout,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

const TITLE: &str = "Vehicle Rental System";
const SUBTITLE: &str = "Browse vehicles, manage inventory, and process rentals";

pub struct Renderer {
    type_selector: TypeSelector,
    vehicle_grid: VehicleGrid,
    inventory_table: InventoryTable,
    rental_form: RentalForm,
    stock_form: StockForm,
    confirmation_dialog: ConfirmationDialog,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            type_selector: TypeSelector::new(),
            vehicle_grid: VehicleGrid::new(),
            inventory_table: InventoryTable::new(),
            rental_form: RentalForm::new(),
            stock_form: StockForm::new(),
            confirmation_dialog: ConfirmationDialog::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);

        let layout = ViewLayout::new(TITLE.to_string())
            .with_subtitle(SUBTITLE.to_string())
            .with_status_text(Self::status_text(state))
            .with_notification(state.ui.message.clone());

        let area = f.area();
        layout.render(f, area, |f, content| self.render_browse(f, content));

        let overlay_mode = match state.mode {
            Mode::Help => state.mode_before_help,
            mode => mode,
        };
        match overlay_mode {
            Mode::AddStock => self.stock_form.render(f, area),
            Mode::ConfirmRental => self.confirmation_dialog.render(f, area),
            Mode::Browse | Mode::Help => {}
        }
        if state.mode == Mode::Help {
            self.help_dialog.render(f, area);
        }
    }

    fn render_browse(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TYPE_SELECTOR_HEIGHT),
                Constraint::Length(VEHICLE_GRID_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[2]);

        self.type_selector.render(f, rows[0]);
        self.vehicle_grid.render(f, rows[1]);
        self.inventory_table.render(f, panes[0]);
        self.rental_form.render(f, panes[1]);
    }

    /// Copies the state each component draws from.
    fn sync(&mut self, state: &AppState) {
        let browsing = state.mode == Mode::Browse;

        self.type_selector.set_selected(state.selected_class);
        self.type_selector
            .set_focused(browsing && state.focus == Focus::TypeSelector);

        self.vehicle_grid.set_class(state.selected_class);
        self.vehicle_grid.set_loading(state.catalog.is_loading);
        self.vehicle_grid.set_vehicles(state.catalog.vehicles.clone());

        let rows = state.visible_inventory().into_iter().cloned().collect();
        self.inventory_table
            .set_rows(rows, state.inventory.items.len());
        self.inventory_table.set_query(&state.inventory.query);
        self.inventory_table.set_loading(state.inventory.is_loading);
        self.inventory_table
            .set_selected_index(state.inventory.selected_index);
        self.inventory_table.set_focus(
            browsing && state.focus == Focus::Inventory,
            browsing && state.focus == Focus::InventorySearch,
        );

        self.rental_form.set_vehicles(
            state
                .catalog
                .vehicles
                .iter()
                .map(|v| v.name.clone())
                .collect(),
        );
        self.rental_form
            .set_selected_vehicle(state.rental_form.vehicle.clone());
        self.rental_form.set_hours(&state.rental_form.hours);
        self.rental_form.set_kilometers(&state.rental_form.kilometers);
        self.rental_form.set_errors(state.rental_form.errors.clone());
        self.rental_form.set_catalog_loading(state.catalog.is_loading);
        self.rental_form
            .set_submitting(state.rental_form.is_submitting);
        self.rental_form
            .set_focused(browsing && state.focus == Focus::RentalForm);

        let stock_open = state.mode == Mode::AddStock
            || (state.mode == Mode::Help && state.mode_before_help == Mode::AddStock);
        if !stock_open {
            self.stock_form.reset_focus();
        }
        self.stock_form
            .set_vehicle_name(&state.stock_form.vehicle_name);
        self.stock_form.set_quantity(&state.stock_form.quantity);
        self.stock_form.set_suggestions(
            state.stock_form.suggestions.clone(),
            state.stock_form.show_suggestions,
        );
        self.stock_form.set_errors(state.stock_form.errors.clone());
        self.stock_form
            .set_submitting(state.stock_form.is_submitting);

        self.confirmation_dialog
            .set_preview(state.rental.preview.clone());
        self.confirmation_dialog
            .set_confirming(state.rental.is_confirming);
    }

    fn status_text(state: &AppState) -> String {
        if let Some(status) = state.ui.status.as_deref() {
            return status.to_string();
        }
        let hints = match (state.mode, state.focus) {
            (Mode::AddStock, _) => "Tab: Next field | Enter: Submit | Esc: Cancel",
            (Mode::ConfirmRental, _) => "y/Enter: Confirm | n/Esc: Cancel",
            (Mode::Help, _) => "Press any key to close help",
            (Mode::Browse, Focus::TypeSelector) => {
                "1/2/3 or ←/→: Select class | Tab: Next pane | ?: Help | q: Quit"
            }
            (Mode::Browse, Focus::Inventory) => {
                "↑/↓: Select | /: Search | n/c/v: Sort | r: Refresh | +: Add stock | Tab: Next pane"
            }
            (Mode::Browse, Focus::InventorySearch) => "Type to filter | Enter/Esc: Done",
            (Mode::Browse, Focus::RentalForm) => {
                "↑/↓: Field | ←/→: Vehicle | Enter: Preview | Tab: Next pane"
            }
        };
        hints.to_string()
    }

    pub fn get_type_selector_mut(&mut self) -> &mut TypeSelector {
        &mut self.type_selector
    }

    pub fn get_inventory_table_mut(&mut self) -> &mut InventoryTable {
        &mut self.inventory_table
    }

    pub fn get_rental_form_mut(&mut self) -> &mut RentalForm {
        &mut self.rental_form
    }

    pub fn get_stock_form_mut(&mut self) -> &mut StockForm {
        &mut self.stock_form
    }

    pub fn get_confirmation_dialog_mut(&mut self) -> &mut ConfirmationDialog {
        &mut self.confirmation_dialog
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
