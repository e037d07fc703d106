use crate::provider::ProviderError;
use crate::schemas::{InventoryItem, RentalPreview, Vehicle, VehicleClass};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Browse,
    AddStock,
    ConfirmRental,
    Help,
}

/// Pane receiving keys in browse mode
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    TypeSelector,
    Inventory,
    InventorySearch,
    RentalForm,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::TypeSelector => Focus::Inventory,
            Focus::Inventory | Focus::InventorySearch => Focus::RentalForm,
            Focus::RentalForm => Focus::TypeSelector,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::TypeSelector => Focus::RentalForm,
            Focus::Inventory | Focus::InventorySearch => Focus::TypeSelector,
            Focus::RentalForm => Focus::Inventory,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortField {
    Name,
    Class,
    AvailableCount,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Vehicle Name",
            SortField::Class => "Type",
            SortField::AvailableCount => "Available Count",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient global message, cleared after a delay.
#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

// Provider request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderRequest {
    ListVehicles { id: u64, class: VehicleClass },
    ListInventory { id: u64 },
    AddStock { vehicle_name: String, quantity: u32 },
    QuoteRental { vehicle_name: String, hours: f64, kilometers: f64 },
    ConfirmRental { preview: RentalPreview },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProviderResponse {
    VehiclesLoaded {
        id: u64,
        class: VehicleClass,
        result: Result<Vec<Vehicle>, ProviderError>,
    },
    InventoryLoaded {
        id: u64,
        result: Result<Vec<InventoryItem>, ProviderError>,
    },
    StockAdded {
        vehicle_name: String,
        quantity: u32,
        result: Result<(), ProviderError>,
    },
    RentalQuoted {
        result: Result<RentalPreview, ProviderError>,
    },
    RentalConfirmed {
        preview: RentalPreview,
        result: Result<(), ProviderError>,
    },
}
