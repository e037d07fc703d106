use tracing::debug;

use crate::interactive::constants::*;
use crate::interactive::domain::filter::{self, InventoryQuery};
use crate::interactive::domain::models::{
    Focus, Mode, Notification, ProviderRequest, ProviderResponse,
};
use crate::interactive::domain::validation::{Field, FieldErrors, RentalDraft, StockDraft};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::provider::ProviderError;
use crate::schemas::{InventoryItem, RentalPreview, Vehicle, VehicleClass};

pub struct AppState {
    pub mode: Mode,
    pub mode_before_help: Mode,
    pub focus: Focus,
    pub selected_class: VehicleClass,
    pub catalog: CatalogState,
    pub inventory: InventoryState,
    pub stock_form: StockFormState,
    pub rental_form: RentalFormState,
    pub rental: RentalState,
    pub ui: UiState,
}

pub struct CatalogState {
    pub vehicles: Vec<Vehicle>,
    pub is_loading: bool,
    pub current_request_id: u64,
    /// Class the current list was fetched for; `None` until a fetch succeeds.
    pub loaded_class: Option<VehicleClass>,
}

pub struct InventoryState {
    pub items: Vec<InventoryItem>,
    pub is_loading: bool,
    pub current_request_id: u64,
    pub query: InventoryQuery,
    pub selected_index: usize,
}

pub struct StockFormState {
    pub vehicle_name: String,
    pub quantity: String,
    pub errors: FieldErrors,
    pub suggestions: Vec<String>,
    pub show_suggestions: bool,
    pub is_submitting: bool,
}

impl Default for StockFormState {
    fn default() -> Self {
        Self {
            vehicle_name: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            errors: FieldErrors::default(),
            suggestions: Vec::new(),
            show_suggestions: false,
            is_submitting: false,
        }
    }
}

pub struct RentalFormState {
    pub vehicle: Option<String>,
    pub hours: String,
    pub kilometers: String,
    pub errors: FieldErrors,
    pub is_submitting: bool,
}

impl Default for RentalFormState {
    fn default() -> Self {
        Self {
            vehicle: None,
            hours: DEFAULT_HOURS.to_string(),
            kilometers: DEFAULT_KILOMETERS.to_string(),
            errors: FieldErrors::default(),
            is_submitting: false,
        }
    }
}

#[derive(Default)]
pub struct RentalState {
    pub preview: Option<RentalPreview>,
    pub is_confirming: bool,
}

pub struct UiState {
    pub message: Option<Notification>,
    /// Transient hint that replaces the key help, e.g. the exit prompt.
    pub status: Option<String>,
    pub message_clear_delay_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(VehicleClass::default())
    }
}

impl AppState {
    pub fn new(initial_class: VehicleClass) -> Self {
        Self {
            mode: Mode::Browse,
            mode_before_help: Mode::Browse,
            focus: Focus::TypeSelector,
            selected_class: initial_class,
            catalog: CatalogState {
                vehicles: Vec::new(),
                is_loading: false,
                current_request_id: 0,
                loaded_class: None,
            },
            inventory: InventoryState {
                items: Vec::new(),
                is_loading: false,
                current_request_id: 0,
                query: InventoryQuery::default(),
                selected_index: 0,
            },
            stock_form: StockFormState::default(),
            rental_form: RentalFormState::default(),
            rental: RentalState::default(),
            ui: UiState {
                message: None,
                status: None,
                message_clear_delay_ms: MESSAGE_CLEAR_DELAY_MS,
            },
        }
    }

    pub fn with_message_clear_delay(mut self, delay_ms: u64) -> Self {
        self.ui.message_clear_delay_ms = delay_ms;
        self
    }

    /// Requests issued when the console starts.
    pub fn startup(&mut self) -> Command {
        Command::Batch(vec![
            self.select_class(self.selected_class),
            self.refresh_inventory(),
        ])
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::SelectClass(class) => self.select_class(class),
            Message::RefreshInventory => self.refresh_inventory(),
            Message::InventorySearchChanged(term) => {
                self.inventory.query.search_term = term;
                self.inventory.selected_index = 0;
                Command::None
            }
            Message::SortInventory(field) => {
                self.inventory.query.toggle_sort(field);
                Command::None
            }
            Message::InventorySelectionChanged(index) => {
                if index < self.visible_inventory().len() {
                    self.inventory.selected_index = index;
                }
                Command::None
            }
            Message::FocusNext => {
                self.focus = self.focus.next();
                Command::None
            }
            Message::FocusPrevious => {
                self.focus = self.focus.previous();
                Command::None
            }
            Message::SetFocus(focus) => {
                self.focus = focus;
                Command::None
            }
            Message::OpenStockForm => {
                // A pending quote opens the confirmation when it lands.
                if self.rental_form.is_submitting {
                    return Command::None;
                }
                if self.stock_form.vehicle_name.is_empty() {
                    let selected = self.selected_inventory_item().map(|item| item.name.clone());
                    if let Some(name) = selected {
                        self.stock_form.vehicle_name = name;
                    }
                }
                self.mode = Mode::AddStock;
                Command::None
            }
            Message::CloseStockForm => {
                if !self.stock_form.is_submitting {
                    self.stock_form = StockFormState::default();
                    self.mode = Mode::Browse;
                }
                Command::None
            }
            Message::StockNameChanged(name) => {
                self.stock_form.errors.clear(Field::VehicleName);
                self.stock_form.suggestions = filter::suggestions(&self.catalog.vehicles, &name)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                self.stock_form.show_suggestions = !self.stock_form.suggestions.is_empty();
                self.stock_form.vehicle_name = name;
                Command::None
            }
            Message::StockQuantityChanged(quantity) => {
                self.stock_form.errors.clear(Field::Quantity);
                self.stock_form.quantity = quantity;
                Command::None
            }
            Message::SelectSuggestion(name) => {
                self.stock_form.errors.clear(Field::VehicleName);
                self.stock_form.vehicle_name = name;
                self.stock_form.show_suggestions = false;
                Command::None
            }
            Message::SubmitStock => {
                let vehicle_name = self.stock_form.vehicle_name.clone();
                let quantity = self.stock_form.quantity.clone();
                self.add_stock(&vehicle_name, &quantity)
            }
            Message::RentalVehicleSelected(name) => {
                self.rental_form.errors.clear(Field::Vehicle);
                self.rental_form.vehicle = Some(name);
                Command::None
            }
            Message::RentalHoursChanged(hours) => {
                self.rental_form.errors.clear(Field::Hours);
                self.rental_form.hours = hours;
                Command::None
            }
            Message::RentalKilometersChanged(kilometers) => {
                self.rental_form.errors.clear(Field::Kilometers);
                self.rental_form.kilometers = kilometers;
                Command::None
            }
            Message::SubmitRental => {
                let vehicle = self.rental_form.vehicle.clone();
                let hours = self.rental_form.hours.clone();
                let kilometers = self.rental_form.kilometers.clone();
                self.preview_rental(vehicle.as_deref(), &hours, &kilometers)
            }
            Message::ConfirmRental => self.confirm_rental(),
            Message::CancelRental => self.cancel_rental(),
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.mode_before_help = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.mode_before_help;
                }
                Command::None
            }
            Message::Provider(response) => self.apply_response(response),
            Message::ClearMessage => {
                self.ui.message = None;
                self.ui.status = None;
                Command::None
            }
        }
    }

    /// Switches the catalog to `class`. Re-selecting the active class is a
    /// no-op while its fetch is pending or after it has loaded.
    pub fn select_class(&mut self, class: VehicleClass) -> Command {
        if class == self.selected_class
            && (self.catalog.is_loading || self.catalog.loaded_class == Some(class))
        {
            debug!(%class, "class already selected, no fetch issued");
            return Command::None;
        }

        self.selected_class = class;
        self.catalog.vehicles.clear();
        self.catalog.loaded_class = None;
        self.catalog.is_loading = true;
        self.catalog.current_request_id += 1;
        Command::Request(ProviderRequest::ListVehicles {
            id: self.catalog.current_request_id,
            class,
        })
    }

    pub fn refresh_inventory(&mut self) -> Command {
        self.inventory.is_loading = true;
        self.inventory.current_request_id += 1;
        Command::Request(ProviderRequest::ListInventory {
            id: self.inventory.current_request_id,
        })
    }

    pub fn add_stock(&mut self, vehicle_name: &str, quantity: &str) -> Command {
        if self.stock_form.is_submitting {
            return Command::None;
        }
        match (StockDraft {
            vehicle_name,
            quantity,
        })
        .validate()
        {
            Ok(submission) => {
                self.stock_form.errors = FieldErrors::default();
                self.stock_form.show_suggestions = false;
                self.stock_form.is_submitting = true;
                Command::Request(ProviderRequest::AddStock {
                    vehicle_name: submission.vehicle_name,
                    quantity: submission.quantity,
                })
            }
            Err(errors) => {
                self.stock_form.errors = errors;
                Command::None
            }
        }
    }

    /// Validates against the loaded catalog and requests a quote.
    pub fn preview_rental(
        &mut self,
        vehicle: Option<&str>,
        hours: &str,
        kilometers: &str,
    ) -> Command {
        if self.rental_form.is_submitting || !self.rental_form_enabled() {
            return Command::None;
        }
        let draft = RentalDraft {
            vehicle,
            hours,
            kilometers,
            catalog: &self.catalog.vehicles,
        };
        match draft.validate() {
            Ok(submission) => {
                self.rental_form.errors = FieldErrors::default();
                self.rental_form.is_submitting = true;
                Command::Request(ProviderRequest::QuoteRental {
                    vehicle_name: submission.vehicle_name,
                    hours: submission.hours,
                    kilometers: submission.kilometers,
                })
            }
            Err(errors) => {
                self.rental_form.errors = errors;
                Command::None
            }
        }
    }

    pub fn confirm_rental(&mut self) -> Command {
        if self.rental.is_confirming {
            return Command::None;
        }
        let Some(preview) = self.rental.preview.clone() else {
            return Command::None;
        };
        self.rental.is_confirming = true;
        Command::Request(ProviderRequest::ConfirmRental { preview })
    }

    pub fn cancel_rental(&mut self) -> Command {
        if !self.rental.is_confirming {
            self.rental.preview = None;
            if self.mode == Mode::ConfirmRental {
                self.mode = Mode::Browse;
            }
        }
        Command::None
    }

    fn apply_response(&mut self, response: ProviderResponse) -> Command {
        match response {
            ProviderResponse::VehiclesLoaded { id, class, result } => {
                if id != self.catalog.current_request_id {
                    debug!(
                        id,
                        %class,
                        latest = self.catalog.current_request_id,
                        "discarding stale catalog response"
                    );
                    return Command::None;
                }
                self.catalog.is_loading = false;
                match result {
                    Ok(vehicles) => {
                        self.catalog.vehicles = vehicles;
                        self.catalog.loaded_class = Some(class);
                        let still_listed = self
                            .rental_form
                            .vehicle
                            .as_ref()
                            .is_some_and(|name| {
                                self.catalog.vehicles.iter().any(|v| &v.name == name)
                            });
                        if !still_listed {
                            self.rental_form.vehicle = None;
                        }
                        Command::None
                    }
                    Err(err) => self.notify_failure("Failed to fetch vehicles", &err),
                }
            }
            ProviderResponse::InventoryLoaded { id, result } => {
                if id != self.inventory.current_request_id {
                    debug!(
                        id,
                        latest = self.inventory.current_request_id,
                        "discarding stale inventory response"
                    );
                    return Command::None;
                }
                self.inventory.is_loading = false;
                match result {
                    Ok(items) => {
                        self.inventory.items = items;
                        let visible = self.visible_inventory().len();
                        if self.inventory.selected_index >= visible {
                            self.inventory.selected_index = visible.saturating_sub(1);
                        }
                        Command::None
                    }
                    Err(err) => self.notify_failure("Failed to fetch inventory", &err),
                }
            }
            ProviderResponse::StockAdded {
                vehicle_name,
                quantity,
                result,
            } => {
                self.stock_form.is_submitting = false;
                match result {
                    Ok(()) => {
                        self.stock_form = StockFormState::default();
                        if self.mode == Mode::AddStock {
                            self.mode = Mode::Browse;
                        }
                        let notify = self.notify(Notification::success(
                            "Success",
                            format!("Added {quantity} units of {vehicle_name} to inventory"),
                        ));
                        Command::Batch(vec![notify, self.refresh_inventory()])
                    }
                    Err(err) => self.notify_failure("Failed to add stock", &err),
                }
            }
            ProviderResponse::RentalQuoted { result } => {
                self.rental_form.is_submitting = false;
                match result {
                    Ok(preview) => {
                        self.rental.preview = Some(preview);
                        if self.mode == Mode::Help {
                            self.mode_before_help = Mode::ConfirmRental;
                        } else {
                            self.mode = Mode::ConfirmRental;
                        }
                        Command::None
                    }
                    Err(err) => self.notify_failure("Failed to get rental preview", &err),
                }
            }
            ProviderResponse::RentalConfirmed { preview, result } => {
                self.rental.is_confirming = false;
                match result {
                    Ok(()) => {
                        self.rental.preview = None;
                        self.rental_form = RentalFormState::default();
                        if self.mode == Mode::ConfirmRental {
                            self.mode = Mode::Browse;
                        }
                        let notify = self.notify(Notification::success(
                            "Rental Confirmed",
                            format!("Successfully rented {}", preview.vehicle_name),
                        ));
                        Command::Batch(vec![notify, self.refresh_inventory()])
                    }
                    Err(err) => self.notify_failure("Failed to confirm rental", &err),
                }
            }
        }
    }

    fn notify(&mut self, notification: Notification) -> Command {
        self.ui.message = Some(notification);
        Command::ScheduleClearMessage(self.ui.message_clear_delay_ms)
    }

    fn notify_failure(&mut self, description: &str, err: &ProviderError) -> Command {
        self.notify(Notification::error("Error", format!("{description}: {err}")))
    }

    /// Inventory rows after search and sort.
    pub fn visible_inventory(&self) -> Vec<&InventoryItem> {
        self.inventory.query.apply(&self.inventory.items)
    }

    pub fn selected_inventory_item(&self) -> Option<&InventoryItem> {
        self.visible_inventory()
            .get(self.inventory.selected_index)
            .copied()
    }

    /// The rental form needs a loaded, non-empty catalog.
    pub fn rental_form_enabled(&self) -> bool {
        !self.catalog.is_loading && !self.catalog.vehicles.is_empty()
    }
}
