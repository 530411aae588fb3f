use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::catalog::LearningMode;
use crate::engine::scoring::DEFAULT_MASTERY_THRESHOLD;

const MAX_QUESTION_COUNT: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_mastery_threshold")]
    pub mastery_threshold: u32,
    #[serde(default = "default_mode")]
    pub default_mode: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_question_count() -> usize {
    10
}
fn default_mastery_threshold() -> u32 {
    DEFAULT_MASTERY_THRESHOLD
}
fn default_mode() -> String {
    "hiragana".to_string()
}
fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kanaquiz")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            mastery_threshold: default_mastery_threshold(),
            default_mode: default_mode(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kanaquiz")
            .join("config.toml")
    }

    /// Clamp numeric settings into range and reset an unknown mode.
    /// Call after deserialization to handle hand-edited files.
    pub fn validate(&mut self) {
        self.question_count = self.question_count.clamp(1, MAX_QUESTION_COUNT);
        self.mastery_threshold = self.mastery_threshold.clamp(1, 100);
        if self.default_mode.parse::<LearningMode>().is_err() {
            self.default_mode = default_mode();
        }
    }

    pub fn mode(&self) -> LearningMode {
        self.default_mode.parse().unwrap_or(LearningMode::Hiragana)
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.question_count, 10);
        assert_eq!(config.mastery_threshold, 80);
        assert_eq!(config.default_mode, "hiragana");
        assert!(config.data_dir.contains("kanaquiz"));
    }

    #[test]
    fn test_config_serde_partial_file() {
        let toml_str = r#"
question_count = 25
default_mode = "mixed"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.question_count, 25);
        assert_eq!(config.mode(), LearningMode::Mixed);
        assert_eq!(config.mastery_threshold, 80);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.question_count, deserialized.question_count);
        assert_eq!(config.data_dir, deserialized.data_dir);
        assert_eq!(config.default_mode, deserialized.default_mode);
    }

    #[test]
    fn test_save_then_load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap().question_count, 10);

        let config = Config {
            question_count: 30,
            default_mode: "kanji".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.question_count, 30);
        assert_eq!(loaded.mode(), LearningMode::Kanji);
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "question_count = \"many\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_validate_clamps_values() {
        let mut config = Config {
            question_count: 0,
            mastery_threshold: 250,
            ..Config::default()
        };
        config.validate();
        assert_eq!(config.question_count, 1);
        assert_eq!(config.mastery_threshold, 100);

        config.question_count = 999;
        config.validate();
        assert_eq!(config.question_count, 100);
    }

    #[test]
    fn test_validate_resets_unknown_mode() {
        let mut config = Config {
            default_mode: "cyrillic".to_string(),
            ..Config::default()
        };
        config.validate();
        assert_eq!(config.default_mode, "hiragana");

        config.default_mode = "Kanji".to_string();
        config.validate();
        assert_eq!(config.mode(), LearningMode::Kanji);
    }
}
