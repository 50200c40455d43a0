use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use generation::{CefrLevel, GeminiConfig, Language};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub defaults: DefaultsConfig,
    pub speech: SpeechConfig,
    /// Seeds answer-option shuffling.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database_url: String,
    pub image_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub ui_language: Language,
    pub learning_language: Language,
    pub level: CefrLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    Command,
    Typed,
    None,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub recognizer: RecognizerKind,
    /// Program printing a transcript on stdout, `{lang}` is replaced by the BCP-47 tag.
    pub recognize_command: Option<String>,
    /// Program speaking `{text}` in `{lang}`.
    pub synthesize_command: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: generation::DEFAULT_BASE_URL.to_owned(),
            text_model: generation::DEFAULT_TEXT_MODEL.to_owned(),
            image_model: generation::DEFAULT_IMAGE_MODEL.to_owned(),
            timeout_secs: generation::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://lingo.db".to_owned(),
            image_dir: PathBuf::from("lingo-images"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            file: None,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            ui_language: Language::En,
            learning_language: Language::De,
            level: CefrLevel::A1,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            recognizer: RecognizerKind::Command,
            recognize_command: None,
            synthesize_command: None,
        }
    }
}

impl Config {
    /// Reads `path` when it exists, otherwise starts from defaults, then applies
    /// environment overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("parsing config file {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());
        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")) {
            self.api.api_key = Some(key);
        }
        if let Some(url) = non_empty("LINGO_DATABASE_URL") {
            self.storage.database_url = url;
        }
        if let Some(level) = non_empty("LINGO_LOG") {
            self.logging.level = level;
        }
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api.api_key.clone(),
            base_url: self.api.base_url.clone(),
            text_model: self.api.text_model.clone(),
            image_model: self.api.image_model.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.api.text_model, "gemini-2.5-flash");
        assert_eq!(config.storage.database_url, "sqlite://lingo.db");
        assert_eq!(config.defaults.learning_language, Language::De);
        assert_eq!(config.speech.recognizer, RecognizerKind::Command);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn sections_are_partially_overridable() {
        let config = Config::from_toml(
            r#"
            seed = 9

            [defaults]
            learning_language = "ja"
            level = "B2"

            [speech]
            recognizer = "typed"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.defaults.learning_language, Language::Ja);
        assert_eq!(config.defaults.ui_language, Language::En);
        assert_eq!(config.defaults.level, CefrLevel::B2);
        assert_eq!(config.speech.recognizer, RecognizerKind::Typed);
    }

    #[test]
    fn environment_wins_over_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("API_KEY", "fallback"),
            ("GEMINI_API_KEY", "primary"),
            ("LINGO_LOG", "debug"),
            ("LINGO_DATABASE_URL", " "),
        ]);
        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(config.api.api_key.as_deref(), Some("primary"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.storage.database_url, "sqlite://lingo.db");
    }

    #[test]
    fn gemini_config_carries_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 5;
        assert_eq!(config.gemini().timeout, Duration::from_secs(5));
    }
}
