use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    #[serde(default = "default_check_punctuation")]
    pub check_punctuation: bool,
    #[serde(default = "default_read_next_word")]
    pub read_next_word: bool,
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
    #[serde(default)]
    pub speech_voice: Option<String>,
    #[serde(default = "default_translate_language")]
    pub translate_language: String,
}

fn default_dark_mode() -> bool {
    true
}
fn default_theme() -> String {
    "command-purple".to_string()
}
fn default_case_sensitive() -> bool {
    false
}
fn default_check_punctuation() -> bool {
    false
}
fn default_read_next_word() -> bool {
    false
}
fn default_speech_command() -> String {
    crate::speech::default_speech_program().to_string()
}
fn default_translate_language() -> String {
    "es".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            theme: default_theme(),
            case_sensitive: default_case_sensitive(),
            check_punctuation: default_check_punctuation(),
            read_next_word: default_read_next_word(),
            speech_command: default_speech_command(),
            speech_voice: None,
            translate_language: default_translate_language(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spellr")
            .join("config.toml")
    }

    /// Validate `theme` against the bundled/user theme names, resetting to the
    /// default if the configured name no longer resolves.
    pub fn normalize_theme(&mut self, valid_names: &[String]) {
        if !valid_names.iter().any(|n| n == &self.theme) {
            self.theme = default_theme();
        }
    }

    /// Validate `translate_language`: expects a bare two-letter code. Anything
    /// else (old locale-style values like "es-MX") is cut down or reset.
    pub fn normalize_translate_language(&mut self) {
        let lang = self
            .translate_language
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        if lang.len() == 2 && lang.chars().all(|c| c.is_ascii_lowercase()) {
            self.translate_language = lang;
        } else {
            self.translate_language = default_translate_language();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        // Simulates loading an old config file with no fields at all
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.dark_mode, true);
        assert_eq!(config.theme, "command-purple");
        assert_eq!(config.case_sensitive, false);
        assert_eq!(config.check_punctuation, false);
        assert_eq!(config.read_next_word, false);
        assert_eq!(config.translate_language, "es");
        assert!(config.speech_voice.is_none());
        assert!(!config.speech_command.is_empty());
    }

    #[test]
    fn test_config_serde_defaults_from_partial_fields() {
        // Simulates a config file written before newer fields existed
        let toml_str = r#"
dark_mode = false
theme = "ocean-blue"
case_sensitive = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dark_mode, false);
        assert_eq!(config.theme, "ocean-blue");
        assert_eq!(config.case_sensitive, true);
        // Missing fields pick up defaults
        assert_eq!(config.check_punctuation, false);
        assert_eq!(config.read_next_word, false);
        assert_eq!(config.translate_language, "es");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.speech_voice = Some("Samantha".to_string());
        config.read_next_word = true;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.read_next_word, deserialized.read_next_word);
        assert_eq!(config.speech_voice, deserialized.speech_voice);
        assert_eq!(config.translate_language, deserialized.translate_language);
    }

    #[test]
    fn test_normalize_theme_valid_name_unchanged() {
        let mut config = Config::default();
        config.theme = "forest-green".to_string();
        let names = vec!["command-purple".to_string(), "forest-green".to_string()];
        config.normalize_theme(&names);
        assert_eq!(config.theme, "forest-green");
    }

    #[test]
    fn test_normalize_theme_unknown_name_resets() {
        let mut config = Config::default();
        config.theme = "solarized".to_string();
        let names = vec!["command-purple".to_string(), "forest-green".to_string()];
        config.normalize_theme(&names);
        assert_eq!(config.theme, "command-purple");
    }

    #[test]
    fn test_normalize_translate_language_strips_region() {
        let mut config = Config::default();
        config.translate_language = "es-MX".to_string();
        config.normalize_translate_language();
        assert_eq!(config.translate_language, "es");
    }

    #[test]
    fn test_normalize_translate_language_garbage_resets() {
        let mut config = Config::default();
        config.translate_language = "spanish!".to_string();
        config.normalize_translate_language();
        assert_eq!(config.translate_language, "es");
    }
}
