//! Persisted application settings.

use rostermail_api::DEFAULT_BASE_URL;

use crate::style::widgets::palette::ThemeMode;

/// Application settings that persist across sessions.
///
/// Fields missing from an existing settings file keep their defaults, so
/// hand-edited partial files stay loadable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the backend REST service.
    pub api_base_url: String,
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            theme_mode: ThemeMode::Light,
        }
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn round_trips_through_json() {
        let settings = AppSettings {
            api_base_url: "https://roster.sfda.gov.sa".to_string(),
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.api_base_url, "https://roster.sfda.gov.sa");
        assert_eq!(back.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let back: AppSettings = serde_json::from_str(r#"{"theme_mode": "dark"}"#).unwrap();
        assert_eq!(back.api_base_url, "http://localhost:8000");
        assert_eq!(back.theme_mode, ThemeMode::Dark);

        let back: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let back: AppSettings =
            serde_json::from_str(r#"{"theme_mode": "solarized"}"#).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }
}
