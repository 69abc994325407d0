//! Exploration constants and runtime configuration defaults

// Explorer defaults
/// Default step budget for a single exploration
pub const DEFAULT_MAX_STEPS: usize = 100;
/// Default similarity floor a neighbor must reach to be considered
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.0;
/// Default for ending a walk when it arrives back at the start tile
pub const DEFAULT_STOP_ON_RETURN: bool = false;

// Similarity is quantized to hundredths and floored
/// Number of similarity steps between 0.00 and 1.00
pub const SIMILARITY_SCALE: u8 = 100;

/// Default number of repeated applications used for determinism checks
pub const DEFAULT_DETERMINISM_TRIALS: usize = 10;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tessera=warn";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "tessera=debug";
