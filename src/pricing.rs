//! Rental cost calculation.
//!
//! Costs are kept at full `f64` precision; only the display helpers round to
//! two decimal places.

use serde::Serialize;

/// Charge per rented hour.
pub const HOURLY_RATE: f64 = 25.0;

/// Charge per driven kilometer.
pub const DISTANCE_RATE: f64 = 0.5;

/// Total cost of a rental: `hours * HOURLY_RATE + kilometers * DISTANCE_RATE`.
pub fn rental_cost(hours: f64, kilometers: f64) -> f64 {
    hours * HOURLY_RATE + kilometers * DISTANCE_RATE
}

/// Formats an amount as dollars with two decimals, e.g. `$55.00`.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub hours: f64,
    pub kilometers: f64,
    pub base: f64,
    pub distance_fee: f64,
    pub total: f64,
}

impl CostBreakdown {
    pub fn new(hours: f64, kilometers: f64) -> Self {
        let base = hours * HOURLY_RATE;
        let distance_fee = kilometers * DISTANCE_RATE;
        Self {
            hours,
            kilometers,
            base,
            distance_fee,
            total: base + distance_fee,
        }
    }

    /// Lines of the breakdown as shown in the confirmation dialog and by
    /// `rentdesk quote`.
    pub fn lines(&self) -> Vec<(String, String)> {
        vec![
            (
                format!("Base rate ({} h × {})", self.hours, format_currency(HOURLY_RATE)),
                format_currency(self.base),
            ),
            (
                format!(
                    "Distance ({} km × {})",
                    self.kilometers,
                    format_currency(DISTANCE_RATE)
                ),
                format_currency(self.distance_fee),
            ),
            ("Total".to_string(), format_currency(self.total)),
        ]
    }
}
