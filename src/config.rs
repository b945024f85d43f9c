use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose scroll/track logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fixed navbar height, subtracted when jumping to a section.
pub const NAV_HEIGHT: f64 = 80.0;
/// Scroll offset after which the navbar turns opaque.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

pub const HERO_VIDEO: &str = "/assets/hero-video.mp4";
pub const LOGO: &str = "/assets/adaptiv-logo.svg";

pub const PRELOADER_COUNT_MS: u32 = 1800;
pub const PRELOADER_HOLD_MS: u32 = 300;
pub const PRELOADER_FADE_MS: u32 = 600;

pub const SMOOTH_SCROLL_DURATION: f64 = 0.8;
pub const SMOOTH_SCROLL_WHEEL_MULTIPLIER: f64 = 1.0;

/// Lag of scrubbed tracks behind the raw scroll position, in seconds.
pub const SCRUB_LAG: f64 = 1.0;

pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
