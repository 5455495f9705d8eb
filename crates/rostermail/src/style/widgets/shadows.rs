//! Shadow presets and rounded corner radii.

use iced::{Shadow, Vector};

use super::palette;

/// Rounded corner radii, following the service's web styling.
pub mod radius {
    pub const NONE: f32 = 0.0; // Square panels
    pub const LARGE: f32 = 8.0; // Inputs and buttons ("rounded-lg")
    pub const XLARGE: f32 = 12.0; // Cards ("rounded-xl")
    pub const PILL: f32 = 9999.0; // Badges and avatars ("rounded-full")
}

pub fn none() -> Shadow {
    Shadow::default()
}

/// Card shadow ("shadow-sm").
pub const fn subtle() -> Shadow {
    Shadow {
        color: palette::SHADOW,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    }
}
