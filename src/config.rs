use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Whether the page renders the light/dark toggle in its header.
/// Builds without the `theme-toggle` feature always render the light palette.
pub fn theme_toggle_enabled() -> bool {
    cfg!(feature = "theme-toggle")
}
