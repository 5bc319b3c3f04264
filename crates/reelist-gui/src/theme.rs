//! Theme: semantic color tokens plus the style catalog.
//!
//! Two built-in schemes (dark and light); the configured mode picks one,
//! with `System` following the OS setting.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

use reelist_core::config::ThemeMode;

/// Resolve the configured appearance mode to a concrete color scheme.
pub fn resolve(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        ThemeMode::Dark => ColorScheme::dark(),
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ColorScheme::light(),
            _ => ColorScheme::dark(),
        },
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Reelist",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.tertiary,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}
