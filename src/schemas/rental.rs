use super::vehicle::VehicleClass;
use crate::pricing::CostBreakdown;
use serde::{Deserialize, Serialize};

/// A computed, not-yet-committed rental quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalPreview {
    pub vehicle_name: String,
    pub class: VehicleClass,
    pub total_cost: f64,
    pub hours: f64,
    pub kilometers: f64,
}

impl RentalPreview {
    pub fn breakdown(&self) -> CostBreakdown {
        CostBreakdown::new(self.hours, self.kilometers)
    }

    pub fn duration_label(&self) -> String {
        if self.hours == 1.0 {
            "1 hour".to_string()
        } else {
            format!("{} hours", self.hours)
        }
    }

    pub fn distance_label(&self) -> String {
        format!("{} km", self.kilometers)
    }
}
