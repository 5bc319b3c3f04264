//! Semantic color tokens.
//!
//! A trimmed tonal-surface hierarchy: surfaces low to high elevation, a
//! text hierarchy, one purple accent, a gold tertiary for ratings, and an
//! error red.

use iced::Color;

#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,

    // Tertiary (rating gold)
    pub tertiary: Color,

    // Error
    pub error: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            surface: Color::from_rgb8(0x12, 0x11, 0x13),
            surface_container_low: Color::from_rgb8(0x1A, 0x19, 0x1C),
            surface_container: Color::from_rgb8(0x20, 0x1F, 0x23),
            surface_container_high: Color::from_rgb8(0x2A, 0x29, 0x30),
            surface_bright: Color::from_rgb8(0x38, 0x36, 0x3D),

            on_surface: Color::from_rgb8(0xE6, 0xE1, 0xE6),
            on_surface_variant: Color::from_rgb8(0xC9, 0xC4, 0xCD),
            outline: Color::from_rgb8(0x93, 0x8F, 0x99),
            outline_variant: Color::from_rgb8(0x49, 0x45, 0x4E),

            primary: Color::from_rgb8(0x97, 0x75, 0xFA),
            primary_hover: Color::from_rgb8(0xA7, 0x8B, 0xFC),
            primary_dim: Color::from_rgb8(0x79, 0x50, 0xF2),
            on_primary: Color::from_rgb8(0x1E, 0x16, 0x30),

            tertiary: Color::from_rgb8(0xFF, 0xD4, 0x3B),

            error: Color::from_rgb8(0xE5, 0x48, 0x4D),
        }
    }

    pub fn light() -> Self {
        Self {
            surface: Color::from_rgb8(0xF7, 0xF5, 0xFA),
            surface_container_low: Color::from_rgb8(0xF1, 0xEC, 0xF6),
            surface_container: Color::from_rgb8(0xEB, 0xE6, 0xF0),
            surface_container_high: Color::from_rgb8(0xE3, 0xDE, 0xE9),
            surface_bright: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            on_surface: Color::from_rgb8(0x1C, 0x1B, 0x1F),
            on_surface_variant: Color::from_rgb8(0x49, 0x45, 0x4F),
            outline: Color::from_rgb8(0x79, 0x74, 0x7E),
            outline_variant: Color::from_rgb8(0xCA, 0xC4, 0xD0),

            primary: Color::from_rgb8(0x67, 0x41, 0xD9),
            primary_hover: Color::from_rgb8(0x79, 0x50, 0xF2),
            primary_dim: Color::from_rgb8(0x5F, 0x3D, 0xC4),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            tertiary: Color::from_rgb8(0xB0, 0x76, 0x00),

            error: Color::from_rgb8(0xD0, 0x34, 0x3A),
        }
    }
}
