//! Persistent settings for the console
//!
//! Settings are read from a JSON file. Every field has a default, so a
//! partial file (or no file at all) is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::interactive::constants::{EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS};
use crate::provider::ProviderOperation;
use crate::schemas::VehicleClass;

/// Environment variable pointing at an explicit settings file
pub const CONFIG_ENV_VAR: &str = "RENTDESK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Class selected when the console starts
    pub default_class: VehicleClass,
    /// How long a notification stays visible
    pub message_clear_delay_ms: u64,
    /// Terminal event polling interval
    pub event_poll_interval_ms: u64,
    /// Artificial delays of the mock provider
    pub latency: LatencySettings,
    /// Where to write logs while the console owns the terminal
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_class: VehicleClass::A,
            message_clear_delay_ms: MESSAGE_CLEAR_DELAY_MS,
            event_poll_interval_ms: EVENT_POLL_INTERVAL_MS,
            latency: LatencySettings::default(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LatencySettings {
    pub list_vehicles_ms: u64,
    pub list_inventory_ms: u64,
    pub add_stock_ms: u64,
    pub quote_rental_ms: u64,
    pub confirm_rental_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            list_vehicles_ms: 500,
            list_inventory_ms: 300,
            add_stock_ms: 500,
            quote_rental_ms: 800,
            confirm_rental_ms: 600,
        }
    }
}

impl LatencySettings {
    pub fn zero() -> Self {
        Self {
            list_vehicles_ms: 0,
            list_inventory_ms: 0,
            add_stock_ms: 0,
            quote_rental_ms: 0,
            confirm_rental_ms: 0,
        }
    }

    pub fn for_operation(&self, operation: ProviderOperation) -> Duration {
        let ms = match operation {
            ProviderOperation::ListVehicles => self.list_vehicles_ms,
            ProviderOperation::ListInventory => self.list_inventory_ms,
            ProviderOperation::AddStock => self.add_stock_ms,
            ProviderOperation::QuoteRental => self.quote_rental_ms,
            ProviderOperation::ConfirmRental => self.confirm_rental_ms,
        };
        Duration::from_millis(ms)
    }

    /// Multiplies every delay by `factor`; negative or NaN factors give zero.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| {
            let scaled = ms as f64 * factor;
            if scaled.is_finite() && scaled > 0.0 {
                scaled.round() as u64
            } else {
                0
            }
        };
        Self {
            list_vehicles_ms: scale(self.list_vehicles_ms),
            list_inventory_ms: scale(self.list_inventory_ms),
            add_stock_ms: scale(self.add_stock_ms),
            quote_rental_ms: scale(self.quote_rental_ms),
            confirm_rental_ms: scale(self.confirm_rental_ms),
        }
    }
}

impl Settings {
    /// Loads settings from `explicit`, `$RENTDESK_CONFIG`, or the default
    /// location, in that order. Only a missing file at the default location
    /// falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from_path(Path::new(&path));
        }
        match default_settings_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }
}

/// `<config dir>/rentdesk/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rentdesk").join("settings.json"))
}
