//! Data provider abstraction
//!
//! Everything the console shows comes through [`RentalProvider`]. The shipped
//! implementation is [`mock::MockProvider`], which answers from canned data
//! after an artificial delay; a real backend only needs to implement the five
//! operations below.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schemas::{InventoryItem, RentalPreview, Vehicle, VehicleClass};

pub mod mock;

pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Names of the provider operations, used for logging and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderOperation {
    ListVehicles,
    ListInventory,
    AddStock,
    QuoteRental,
    ConfirmRental,
}

impl ProviderOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderOperation::ListVehicles => "list-vehicles",
            ProviderOperation::ListInventory => "list-inventory",
            ProviderOperation::AddStock => "add-stock",
            ProviderOperation::QuoteRental => "quote-rental",
            ProviderOperation::ConfirmRental => "confirm-rental",
        }
    }
}

/// Backend contract for the rental console.
#[async_trait]
pub trait RentalProvider: Send + Sync {
    /// Vehicles of one class. Every returned vehicle belongs to `class`.
    async fn list_vehicles(&self, class: VehicleClass) -> Result<Vec<Vehicle>>;

    /// Current stock levels.
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>>;

    /// Increases the available count of `vehicle_name` by `quantity`.
    async fn add_stock(&self, vehicle_name: &str, quantity: u32) -> Result<()>;

    /// Prices a rental without committing it.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::UnknownVehicle` when the name is not in the
    /// catalog.
    async fn quote_rental(
        &self,
        vehicle_name: &str,
        hours: f64,
        kilometers: f64,
    ) -> Result<RentalPreview>;

    /// Commits a previously quoted rental.
    async fn confirm_rental(&self, preview: &RentalPreview) -> Result<()>;
}
