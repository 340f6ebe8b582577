use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::logger::{LogLevel, LoggerConfig};
use crate::models::StepCount;

pub const DEFAULT_TRANSLATOR_URL: &str = "https://translator.stronga791alice.workers.dev/";
pub const DEFAULT_IMAGE_URL: &str = "https://app.stronga791alice.workers.dev";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub url: String,
    pub source_lang: String,
    pub target_lang: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub translator: TranslatorConfig,
    pub image: ImageConfig,
    pub default_steps: StepCount,
    pub output_dir: PathBuf,
    pub logger: LoggerConfig,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            url: DEFAULT_TRANSLATOR_URL.to_string(),
            source_lang: "ru".to_string(),
            target_lang: "en".to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_lang = source.into();
        self.target_lang = target.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            url: DEFAULT_IMAGE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            translator: TranslatorConfig::default(),
            image: ImageConfig::default(),
            default_steps: StepCount::default(),
            output_dir: PathBuf::from("."),
            logger: LoggerConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Missing or
    /// unparseable values keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StudioConfig::default();
        let millis = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
        };

        if let Some(url) = lookup("PROMPTGEN_TRANSLATOR_URL") {
            config.translator.url = url;
        }
        if let Some(timeout) = millis("PROMPTGEN_TRANSLATE_TIMEOUT_MS") {
            config.translator.timeout = timeout;
        }
        if let Some(lang) = lookup("PROMPTGEN_SOURCE_LANG") {
            config.translator.source_lang = lang;
        }
        if let Some(lang) = lookup("PROMPTGEN_TARGET_LANG") {
            config.translator.target_lang = lang;
        }
        if let Some(url) = lookup("PROMPTGEN_IMAGE_URL") {
            config.image.url = url;
        }
        if let Some(timeout) = millis("PROMPTGEN_GENERATE_TIMEOUT_MS") {
            config.image.timeout = timeout;
        }
        if let Some(steps) = lookup("PROMPTGEN_DEFAULT_STEPS").and_then(|v| StepCount::parse(&v)) {
            config.default_steps = steps;
        }
        if let Some(dir) = lookup("PROMPTGEN_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("PROMPTGEN_LOG_LEVEL").and_then(|v| LogLevel::parse(&v)) {
            config.logger = config.logger.with_level(level);
        }
        if let Some(json) = lookup("PROMPTGEN_LOG_JSON") {
            config.logger = config.logger.with_json_output(json.trim() == "true");
        }
        if let Some(path) = lookup("PROMPTGEN_LOG_FILE") {
            config.logger = config.logger.with_file_output(&path);
        }

        config
    }

    pub fn with_translator(mut self, translator: TranslatorConfig) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_image(mut self, image: ImageConfig) -> Self {
        self.image = image;
        self
    }

    pub fn with_default_steps(mut self, steps: StepCount) -> Self {
        self.default_steps = steps;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_logger(mut self, logger: LoggerConfig) -> Self {
        self.logger = logger;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StudioConfig::new();
        assert_eq!(config.translator.url, DEFAULT_TRANSLATOR_URL);
        assert_eq!(config.translator.source_lang, "ru");
        assert_eq!(config.translator.target_lang, "en");
        assert_eq!(config.translator.timeout, Duration::from_millis(5000));
        assert_eq!(config.image.timeout, Duration::from_millis(5000));
        assert_eq!(config.default_steps.get(), 6);
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = StudioConfig::from_vars(vars(&[
            ("PROMPTGEN_TRANSLATOR_URL", "http://localhost:9000/"),
            ("PROMPTGEN_IMAGE_URL", "http://localhost:9001/"),
            ("PROMPTGEN_TRANSLATE_TIMEOUT_MS", "250"),
            ("PROMPTGEN_GENERATE_TIMEOUT_MS", "30000"),
            ("PROMPTGEN_DEFAULT_STEPS", "9"),
            ("PROMPTGEN_OUTPUT_DIR", "/tmp/out"),
            ("PROMPTGEN_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.translator.url, "http://localhost:9000/");
        assert_eq!(config.image.url, "http://localhost:9001/");
        assert_eq!(config.translator.timeout, Duration::from_millis(250));
        assert_eq!(config.image.timeout, Duration::from_secs(30));
        assert_eq!(config.default_steps.get(), 9);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.logger.min_level, LogLevel::Debug);
    }

    #[test]
    fn test_logger_settings_from_vars() {
        let config = StudioConfig::from_vars(vars(&[
            ("PROMPTGEN_LOG_LEVEL", "warn"),
            ("PROMPTGEN_LOG_JSON", "true"),
            ("PROMPTGEN_LOG_FILE", "/tmp/promptgen.log"),
        ]));
        assert_eq!(config.logger.min_level, LogLevel::Warn);
        assert!(config.logger.output_json);
        assert!(config.logger.log_to_file);
        assert_eq!(config.logger.log_file_path, "/tmp/promptgen.log");

        let config = StudioConfig::from_vars(vars(&[("PROMPTGEN_LOG_JSON", "no")]));
        assert!(!config.logger.output_json);
        assert_eq!(config.logger.min_level, LogLevel::Info);
    }

    #[test]
    fn test_from_vars_ignores_garbage() {
        let config = StudioConfig::from_vars(vars(&[
            ("PROMPTGEN_TRANSLATE_TIMEOUT_MS", "soon"),
            ("PROMPTGEN_DEFAULT_STEPS", "lots"),
        ]));
        assert_eq!(config.translator.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(config.default_steps.get(), 6);
    }

    #[test]
    fn test_default_steps_from_env_are_clamped() {
        let config = StudioConfig::from_vars(vars(&[("PROMPTGEN_DEFAULT_STEPS", "40")]));
        assert_eq!(config.default_steps.get(), 10);
    }
}
