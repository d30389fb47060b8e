//! Infrastructure layer constants
//!
//! Setting names read by components live in `creg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "creg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "creg";

/// Environment variable prefix for configuration (`CREG__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "CREG";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Locale configured for I18N components unless overridden
pub const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CREG_LOG";

/// Default log file prefix when the configured path has no file stem
pub const LOG_FILE_PREFIX: &str = "creg";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

// ============================================================================
// CONFIG WATCHER CONSTANTS
// ============================================================================

/// Delay before reading a changed configuration file
pub const CONFIG_RELOAD_DEBOUNCE_MS: u64 = 100;

/// Capacity of the configuration event channel
pub const CONFIG_WATCH_CHANNEL_CAPACITY: usize = 16;
