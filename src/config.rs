//! Application-level configuration constants.

// Scheduling
pub const TICK_MS: u32 = 1_000;
pub const ALERT_DISPLAY_MS: u32 = 5_000;

// Presentation
pub const APP_TITLE: &str = "Wall Timer";
/// Remaining seconds at or below which the seconds digits are highlighted.
pub const FINAL_SECONDS_HIGHLIGHT: u32 = 10;
