pub mod config;
pub mod interactive;
pub mod logging;
pub mod pricing;
pub mod provider;
pub mod schemas;

pub use config::Settings;
pub use interactive::RentalConsole;
pub use pricing::{CostBreakdown, format_currency, rental_cost};
pub use provider::{ProviderError, ProviderOperation, RentalProvider};
pub use schemas::{InventoryItem, RentalPreview, StockStatus, Vehicle, VehicleClass};
