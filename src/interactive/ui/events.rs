use crate::interactive::domain::models::{Focus, ProviderResponse, SortField};
use crate::schemas::VehicleClass;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Class selection
    SelectClass(VehicleClass),

    // Inventory events
    RefreshInventory,
    InventorySearchChanged(String),
    SortInventory(SortField),
    InventorySelectionChanged(usize),

    // Focus
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // Stock intake
    OpenStockForm,
    CloseStockForm,
    StockNameChanged(String),
    StockQuantityChanged(String),
    SelectSuggestion(String),
    SubmitStock,

    // Rental request
    RentalVehicleSelected(String),
    RentalHoursChanged(String),
    RentalKilometersChanged(String),
    SubmitRental,
    ConfirmRental,
    CancelRental,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // Async events
    Provider(ProviderResponse),

    // UI events
    ClearMessage,
}
