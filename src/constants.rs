//! Application constants for the menu CSV parser
//!
//! Default values for the export layout the menu files come from,
//! plus names used by the configuration and CLI layers.

// =============================================================================
// Export Layout
// =============================================================================

/// Leading title/date rows in the menu export that never carry data
pub const DEFAULT_PREAMBLE_ROWS: usize = 5;

/// Weight is exported in kilograms with a comma decimal separator ("1,250")
pub const DEFAULT_WEIGHT_SEPARATOR: char = ',';

/// Kilograms to grams
pub const DEFAULT_WEIGHT_SCALE: f64 = 1000.0;

/// Price is exported with a hyphen decimal separator ("12-50")
pub const DEFAULT_PRICE_SEPARATOR: char = '-';

pub const DEFAULT_PRICE_SCALE: f64 = 1.0;

/// Number of columns read from each data row: name, weight, price
pub const MENU_COLUMN_COUNT: usize = 3;

// =============================================================================
// Input Limits
// =============================================================================

/// Upper bound on file size accepted by the CLI (10 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

// =============================================================================
// Configuration
// =============================================================================

/// Application directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "menu-csv";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the preamble row count
pub const ENV_PREAMBLE_ROWS: &str = "MENU_CSV_PREAMBLE_ROWS";

/// Environment variable overriding the input size cap
pub const ENV_MAX_INPUT_BYTES: &str = "MENU_CSV_MAX_INPUT_BYTES";

/// Log target used for the default tracing filter
pub const LOG_TARGET: &str = "menu_csv";

/// Level used when neither the config file nor `-v`/`-q` sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in the `[logging]` section
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
