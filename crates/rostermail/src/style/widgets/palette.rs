//! Color palette with light and dark theme support.
//!
//! The light palette mirrors the service's web styling (Tailwind's gray,
//! blue, green, and red scales); the dark palette is a muted counterpart.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand colors
    pub primary: Color,
    pub primary_hover: Color,
    pub success: Color,
    pub success_hover: Color,
    pub danger: Color,
    pub danger_hover_bg: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_sunken: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // State colors
    pub selected: Color,
    pub selected_text: Color,
    pub hover: Color,
    pub unread_tint: Color,
    pub badge_bg: Color,
    pub badge_text: Color,

    // Banner colors
    pub success_bg: Color,
    pub success_border: Color,
    pub success_text: Color,
    pub danger_bg: Color,
    pub danger_border: Color,
    pub danger_text: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            // Brand - blue-600 with blue-700 hover, green-600/700, red-600
            primary: Color::from_rgb(0.146, 0.388, 0.922),
            primary_hover: Color::from_rgb(0.114, 0.306, 0.847),
            success: Color::from_rgb(0.086, 0.639, 0.290),
            success_hover: Color::from_rgb(0.082, 0.502, 0.239),
            danger: Color::from_rgb(0.863, 0.149, 0.149),
            danger_hover_bg: Color::from_rgb(0.996, 0.949, 0.949),

            // Surfaces - gray-50 page on white panels
            background: Color::from_rgb(0.976, 0.980, 0.984),
            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.976, 0.980, 0.984),

            // Text - gray-900 / gray-600 / gray-400
            text_primary: Color::from_rgb(0.067, 0.094, 0.153),
            text_secondary: Color::from_rgb(0.294, 0.333, 0.388),
            text_muted: Color::from_rgb(0.612, 0.639, 0.686),
            text_on_primary: Color::WHITE,

            // States - blue-50 selection, gray-100 hover, blue-100/800 badge
            selected: Color::from_rgb(0.937, 0.965, 1.0),
            selected_text: Color::from_rgb(0.114, 0.306, 0.847),
            hover: Color::from_rgb(0.953, 0.957, 0.965),
            unread_tint: Color::from_rgb(0.937, 0.965, 1.0),
            badge_bg: Color::from_rgb(0.859, 0.918, 0.996),
            badge_text: Color::from_rgb(0.118, 0.251, 0.686),

            // Banners - green-50/200/700 and red-50/200/700
            success_bg: Color::from_rgb(0.941, 0.992, 0.957),
            success_border: Color::from_rgb(0.733, 0.969, 0.816),
            success_text: Color::from_rgb(0.082, 0.502, 0.239),
            danger_bg: Color::from_rgb(0.996, 0.949, 0.949),
            danger_border: Color::from_rgb(0.996, 0.792, 0.792),
            danger_text: Color::from_rgb(0.725, 0.110, 0.110),

            // Borders - gray-200 / gray-300
            border_subtle: Color::from_rgb(0.898, 0.906, 0.922),
            border_medium: Color::from_rgb(0.820, 0.835, 0.859),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            // Brand - lifted for contrast on dark surfaces
            primary: Color::from_rgb(0.380, 0.580, 0.980),
            primary_hover: Color::from_rgb(0.480, 0.650, 1.0),
            success: Color::from_rgb(0.200, 0.720, 0.400),
            success_hover: Color::from_rgb(0.280, 0.800, 0.480),
            danger: Color::from_rgb(0.950, 0.380, 0.380),
            danger_hover_bg: Color::from_rgb(0.220, 0.120, 0.120),

            // Surfaces
            background: Color::from_rgb(0.080, 0.090, 0.110),
            surface: Color::from_rgb(0.120, 0.130, 0.155),
            surface_sunken: Color::from_rgb(0.100, 0.110, 0.130),

            // Text
            text_primary: Color::from_rgb(0.920, 0.930, 0.950),
            text_secondary: Color::from_rgb(0.650, 0.680, 0.720),
            text_muted: Color::from_rgb(0.480, 0.510, 0.560),
            text_on_primary: Color::WHITE,

            // States
            selected: Color::from_rgb(0.120, 0.170, 0.280),
            selected_text: Color::from_rgb(0.560, 0.700, 1.0),
            hover: Color::from_rgb(0.160, 0.170, 0.200),
            unread_tint: Color::from_rgb(0.110, 0.150, 0.230),
            badge_bg: Color::from_rgb(0.140, 0.220, 0.380),
            badge_text: Color::from_rgb(0.700, 0.800, 1.0),

            // Banners
            success_bg: Color::from_rgb(0.100, 0.180, 0.130),
            success_border: Color::from_rgb(0.140, 0.320, 0.210),
            success_text: Color::from_rgb(0.560, 0.880, 0.660),
            danger_bg: Color::from_rgb(0.220, 0.120, 0.120),
            danger_border: Color::from_rgb(0.380, 0.170, 0.170),
            danger_text: Color::from_rgb(0.980, 0.650, 0.650),

            // Borders
            border_subtle: Color::from_rgb(0.200, 0.210, 0.240),
            border_medium: Color::from_rgb(0.290, 0.305, 0.340),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

/// Card shadow color ("shadow-sm").
pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.05);
