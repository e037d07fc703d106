use super::vehicle::VehicleClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    #[serde(rename = "type")]
    pub class: VehicleClass,
    pub available_count: u32,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, class: VehicleClass, available_count: u32) -> Self {
        Self {
            name: name.into(),
            class,
            available_count,
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::from_count(self.available_count)
    }
}

/// Availability bucket derived from an item's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Highest count still reported as low stock.
    pub const LOW_STOCK_THRESHOLD: u32 = 5;

    pub fn from_count(count: u32) -> Self {
        match count {
            0 => StockStatus::OutOfStock,
            c if c <= Self::LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}
