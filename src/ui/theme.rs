use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

/// A theme file carries both palettes; [`Theme::load`] picks one according to
/// the dark mode setting.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    dark: ThemeColors,
    light: ThemeColors,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub fg_dim: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub word_correct: String,
    pub word_incorrect: String,
    pub word_incorrect_bg: String,
    pub word_current_bg: String,
    pub word_current_fg: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str, dark_mode: bool) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("spellr")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(file) = toml::from_str::<ThemeFile>(&content) {
                    return Some(Self::from_file(file, dark_mode));
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(file) = toml::from_str::<ThemeFile>(content) {
                    return Some(Self::from_file(file, dark_mode));
                }
            }
        }

        None
    }

    fn from_file(file: ThemeFile, dark_mode: bool) -> Self {
        Self {
            name: file.name,
            colors: if dark_mode { file.dark } else { file.light },
        }
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("command-purple", true).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#111827".to_string(),
            fg: "#f9fafb".to_string(),
            fg_dim: "#9ca3af".to_string(),
            accent: "#7c3aed".to_string(),
            accent_dim: "#4c1d95".to_string(),
            border: "#374151".to_string(),
            border_focused: "#7c3aed".to_string(),
            header_bg: "#1f2937".to_string(),
            header_fg: "#f9fafb".to_string(),
            word_correct: "#34d399".to_string(),
            word_incorrect: "#f87171".to_string(),
            word_incorrect_bg: "#3f1d2b".to_string(),
            word_current_bg: "#7c3aed".to_string(),
            word_current_fg: "#f9fafb".to_string(),
            error: "#f87171".to_string(),
            warning: "#fbbf24".to_string(),
            success: "#34d399".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn fg_dim(&self) -> Color { Self::parse_color(&self.fg_dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn word_correct(&self) -> Color { Self::parse_color(&self.word_correct) }
    pub fn word_incorrect(&self) -> Color { Self::parse_color(&self.word_incorrect) }
    pub fn word_incorrect_bg(&self) -> Color { Self::parse_color(&self.word_incorrect_bg) }
    pub fn word_current_bg(&self) -> Color { Self::parse_color(&self.word_current_bg) }
    pub fn word_current_fg(&self) -> Color { Self::parse_color(&self.word_current_fg) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse_in_both_modes() {
        for name in Theme::available_themes() {
            assert!(Theme::load(&name, true).is_some(), "dark {name}");
            assert!(Theme::load(&name, false).is_some(), "light {name}");
        }
    }

    #[test]
    fn dark_and_light_palettes_differ() {
        let dark = Theme::load("command-purple", true).unwrap();
        let light = Theme::load("command-purple", false).unwrap();
        assert_ne!(dark.colors.bg, light.colors.bg);
    }

    #[test]
    fn parse_color_valid_hex() {
        assert_eq!(ThemeColors::parse_color("#7c3aed"), Color::Rgb(124, 58, 237));
    }

    #[test]
    fn parse_color_invalid_falls_back_to_white() {
        assert_eq!(ThemeColors::parse_color("nope"), Color::White);
        assert_eq!(ThemeColors::parse_color("#12"), Color::White);
    }
}
