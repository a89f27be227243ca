//! Application-level configuration constants.

use log::Level;

// Logging
pub const LOG_LEVEL: Level = Level::Info;

// Animation defaults
pub const DEFAULT_BASE_SECONDS: f64 = 3.0;
pub const DEFAULT_SPEED: f64 = 1.0;
pub const DEFAULT_SPEED_TEXT: &str = "1";

// Speed field limits (advisory; out-of-range input is still applied)
pub const SPEED_STEP: f64 = 0.1;
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 10.0;

// CSS classes toggled by the page
pub const FLIPPED_CLASS: &str = "is-flipped";
pub const PULSE_CLASS: &str = "pulse";
pub const LOADER_ACTIVE_CLASS: &str = "is-active";

// UI text
pub const DURATION_BADGE_PREFIX: &str = "duration: ";
pub const START_LOADER_LABEL: &str = "Start Loader";
pub const STOP_LOADER_LABEL: &str = "Stop Loader";
