pub mod inventory;
pub mod rental;
pub mod vehicle;

pub use inventory::{InventoryItem, StockStatus};
pub use rental::RentalPreview;
pub use vehicle::{Vehicle, VehicleClass};
