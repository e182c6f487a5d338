use serde::{Deserialize, Serialize};

/// UI chrome preferences persisted as RON. Document content and style live in
/// the draft records, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Width of the control panel column, in logical pixels.
    pub panel_width: f32,
    /// Padding around the preview surface.
    pub preview_padding: f32,
    /// Size of panel chrome text (labels, buttons, field contents).
    pub font_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window: WindowConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1280,
            height: 800,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            panel_width: 340.0,
            preview_padding: 40.0,
            font_size: 14.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.ui.panel_width, 340.0);
        assert_eq!(config.ui.font_size, 14.0);
    }

    #[test]
    fn partial_ron_uses_defaults_for_missing_fields() {
        let config: AppConfig = ron::from_str("(ui: (panel_width: 400.0))").unwrap();
        assert_eq!(config.ui.panel_width, 400.0);
        assert_eq!(config.ui.preview_padding, 40.0);
        assert_eq!(config.window.height, 800);
    }

    #[test]
    fn config_round_trips_through_ron() {
        let config = AppConfig {
            ui: UiConfig {
                panel_width: 300.0,
                ..UiConfig::default()
            },
            ..AppConfig::default()
        };
        let pretty = ron::ser::PrettyConfig::default();
        let serialized = ron::ser::to_string_pretty(&config, pretty).unwrap();
        let back: AppConfig = ron::from_str(&serialized).unwrap();
        assert_eq!(back.ui.panel_width, 300.0);
    }
}
