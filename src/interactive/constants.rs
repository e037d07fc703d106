//! Constants for the interactive console
//!
//! Timing, layout and threshold values live here so the components and the
//! state machine agree on them.

// Timing constants
/// Notification auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Loading placeholders
/// Placeholder cards shown while the catalog loads
pub const VEHICLE_PLACEHOLDER_COUNT: usize = 6;

/// Placeholder rows shown while the inventory loads
pub const INVENTORY_PLACEHOLDER_COUNT: usize = 5;

// UI Layout constants
/// Height of the header
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the class selector row
pub const TYPE_SELECTOR_HEIGHT: u16 = 4;

/// Height of the vehicle browser
pub const VEHICLE_GRID_HEIGHT: u16 = 6;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the stock intake dialog
pub const STOCK_DIALOG_WIDTH: u16 = 60;

/// Width of the rental confirmation dialog
pub const CONFIRM_DIALOG_WIDTH: u16 = 56;

/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 72;

/// Minimum margin around dialogs
pub const DIALOG_MARGIN: u16 = 4;

/// Suggestions visible at once under the stock name field
pub const MAX_VISIBLE_SUGGESTIONS: usize = 4;

// Form defaults
/// Initial value of the hours field
pub const DEFAULT_HOURS: &str = "1";

/// Initial value of the kilometers field
pub const DEFAULT_KILOMETERS: &str = "0";

/// Initial value of the quantity field
pub const DEFAULT_QUANTITY: &str = "1";
