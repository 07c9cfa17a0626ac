use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::json_store::default_data_dir;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL serving `stories.json` and `grammar.json`. Empty means offline.
    #[serde(default = "default_content_url")]
    pub content_url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_quiz_questions")]
    pub quiz_questions: usize,
    #[serde(default = "default_quiz_feedback_ms")]
    pub quiz_feedback_ms: u64,
    #[serde(default = "default_light_theme")]
    pub light_theme: String,
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
}

fn default_content_url() -> String {
    "http://localhost:8000/".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    5
}
fn default_quiz_questions() -> usize {
    5
}
fn default_quiz_feedback_ms() -> u64 {
    1500
}
fn default_light_theme() -> String {
    "paper".to_string()
}
fn default_dark_theme() -> String {
    "midnight".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_url: default_content_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            quiz_questions: default_quiz_questions(),
            quiz_feedback_ms: default_quiz_feedback_ms(),
            light_theme: default_light_theme(),
            dark_theme: default_dark_theme(),
            log_level: default_log_level(),
            data_dir: default_data_dir_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
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

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("urdu-reader")
            .join("config.toml")
    }

    /// Clamp numeric settings into usable ranges.
    pub fn validate(&mut self) {
        self.fetch_timeout_secs = self.fetch_timeout_secs.clamp(1, 60);
        self.quiz_questions = self.quiz_questions.clamp(1, 20);
        self.quiz_feedback_ms = self.quiz_feedback_ms.min(10_000);
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir_string();
        }
    }

    pub fn content_base_url(&self) -> Option<String> {
        let url = self.content_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        }
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn theme_name(&self, dark_mode: bool) -> &str {
        if dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.quiz_questions, 5);
        assert_eq!(config.quiz_feedback_ms, 1500);
        assert_eq!(config.content_url, "http://localhost:8000/");
        assert!(config.data_dir.contains("urdu-reader"));
    }

    #[test]
    fn test_config_partial_file() {
        let toml_str = r#"
content_url = ""
dark_theme = "ink"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.content_base_url().is_none());
        assert_eq!(config.theme_name(true), "ink");
        assert_eq!(config.theme_name(false), "paper");
        assert_eq!(config.fetch_timeout_secs, 5);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.content_url, deserialized.content_url);
        assert_eq!(config.quiz_questions, deserialized.quiz_questions);
        assert_eq!(config.data_dir, deserialized.data_dir);
    }

    #[test]
    fn test_validate_clamps_values() {
        let mut config = Config::default();
        config.fetch_timeout_secs = 0;
        config.quiz_questions = 999;
        config.quiz_feedback_ms = 60_000;
        config.data_dir = "  ".to_string();
        config.validate();
        assert_eq!(config.fetch_timeout_secs, 1);
        assert_eq!(config.quiz_questions, 20);
        assert_eq!(config.quiz_feedback_ms, 10_000);
        assert!(!config.data_dir.trim().is_empty());
    }
}
