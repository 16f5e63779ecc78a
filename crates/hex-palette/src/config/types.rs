//! Configuration types for Hex Palette

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub palette: PaletteSettings,
}

/// Window settings
#[derive(Debug, Deserialize, Clone)]
pub struct WindowSettings {
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_auto")]
    pub border: String,
    #[serde(default = "default_auto")]
    pub title_bar: String,
    #[serde(default = "default_auto")]
    pub accent_line: String,
}

/// Generation and display settings
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteSettings {
    /// Swatches per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Delay before regenerating once the input reaches the threshold
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Input length at which regeneration starts being debounced
    #[serde(default = "default_debounce_threshold")]
    pub debounce_threshold: usize,
    /// Height of the hue spectrum strip in points
    #[serde(default = "default_spectrum_height")]
    pub spectrum_height: f32,
}

fn default_opacity() -> f32 {
    0.95
}

fn default_auto() -> String {
    "auto".to_string()
}

fn default_page_size() -> usize {
    150
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_debounce_threshold() -> usize {
    4
}

fn default_spectrum_height() -> f32 {
    48.0
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            opacity: default_opacity(),
            border: default_auto(),
            title_bar: default_auto(),
            accent_line: default_auto(),
        }
    }
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            debounce_threshold: default_debounce_threshold(),
            spectrum_height: default_spectrum_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.palette.page_size, 150);
        assert_eq!(config.palette.debounce_ms, 500);
        assert_eq!(config.palette.debounce_threshold, 4);
        assert_eq!(config.window.border, "auto");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [palette]
            page_size = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.palette.page_size, 60);
        assert_eq!(config.palette.debounce_ms, 500);
    }

    #[test]
    fn test_window_overrides() {
        let config: Config = toml::from_str(
            r#"
            [window]
            opacity = 1.0
            title_bar = "show"
            "#,
        )
        .unwrap();
        assert_eq!(config.window.opacity, 1.0);
        assert_eq!(config.window.title_bar, "show");
        assert_eq!(config.window.accent_line, "auto");
    }
}
