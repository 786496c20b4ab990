use log::Level;

/// Pixels added to the scroll offset before matching a section, so the
/// navigation highlight switches a little before the section reaches the top.
pub const LOOKAHEAD_PX: f64 = 100.0;

/// Delay between first paint and the disclaimer modal on a first visit.
pub const DISCLAIMER_DELAY_MS: u32 = 1500;

/// localStorage key recording that the disclaimer was dismissed.
pub const DISCLAIMER_STORAGE_KEY: &str = "hasSeenDisclaimer";

pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 400.0;

// Used when the header element can't be measured.
pub const FALLBACK_HEADER_HEIGHT_PX: f64 = 80.0;

const FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwdIps6AiebQGwGkeJ-3zkEeajAollYgxsAlnjTllifGrZ9_P22HxZ91JMs9ZLSZ0XslA/exec";

pub fn get_form_endpoint() -> &'static str {
    FORM_ENDPOINT
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub lookahead_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { lookahead_px: LOOKAHEAD_PX }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateConfig {
    pub delay_ms: u32,
    pub storage_key: &'static str,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            delay_ms: DISCLAIMER_DELAY_MS,
            storage_key: DISCLAIMER_STORAGE_KEY,
        }
    }
}
