//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `anidash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use anidash_adapter_dashboard_leptos::{ThemeMode, UnknownThemeMode};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to render and where.
    pub render: RenderConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Statistics JSON snapshot. Without one the dashboard renders in its loading state.
    pub input: Option<PathBuf>,
    /// Destination of the HTML document.
    pub output: PathBuf,
    /// `light` or `dark`.
    pub theme: String,
    /// Document title.
    pub title: String,
    /// Also write the stylesheet next to the document.
    pub write_stylesheet: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `anidash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("anidash.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ANIDASH_INPUT") {
            self.render.input = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
        if let Some(val) = lookup("ANIDASH_OUTPUT") {
            self.render.output = PathBuf::from(val);
        }
        if let Some(val) = lookup("ANIDASH_THEME") {
            self.render.theme = val;
        }
        if let Some(val) = lookup("ANIDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.render.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output path must not be empty".to_string(),
            ));
        }
        self.render.theme_mode()?;
        Ok(())
    }
}

impl RenderConfig {
    /// The configured palette.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Theme`] when `theme` is neither `light` nor `dark`.
    pub fn theme_mode(&self) -> Result<ThemeMode, ConfigError> {
        Ok(self.theme.parse()?)
    }

    /// Where the stylesheet goes: beside the document.
    #[must_use]
    pub fn stylesheet_path(&self) -> PathBuf {
        self.output.with_file_name(STYLESHEET_FILE)
    }
}

/// File name of the stylesheet linked from the document.
pub const STYLESHEET_FILE: &str = "anidash.css";

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: Some(PathBuf::from("stats.json")),
            output: PathBuf::from("dashboard.html"),
            theme: ThemeMode::default().to_string(),
            title: "Anime Dashboard".to_string(),
            write_stylesheet: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "anidash_render=info,anidash_adapter_dashboard_leptos=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Unknown theme name.
    #[error("invalid theme")]
    Theme(#[from] UnknownThemeMode),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.render.input, Some(PathBuf::from("stats.json")));
        assert_eq!(config.render.output, PathBuf::from("dashboard.html"));
        assert_eq!(config.render.theme, "light");
        assert_eq!(config.render.title, "Anime Dashboard");
        assert!(config.render.write_stylesheet);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.output, PathBuf::from("dashboard.html"));
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [render]
            input = 'snapshots/me.json'
            output = 'public/index.html'
            theme = 'dark'
            title = 'My lists'
            write_stylesheet = false

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.render.input,
            Some(PathBuf::from("snapshots/me.json"))
        );
        assert_eq!(config.render.output, PathBuf::from("public/index.html"));
        assert_eq!(config.render.theme_mode().unwrap(), ThemeMode::Dark);
        assert_eq!(config.render.title, "My lists");
        assert!(!config.render.write_stylesheet);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [render]
            theme = 'dark'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.theme, "dark");
        assert_eq!(config.render.title, "Anime Dashboard");
        assert!(config.logging.filter.contains("anidash_render=info"));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.render.output, PathBuf::from("dashboard.html"));
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("ANIDASH_INPUT", "other.json"),
            ("ANIDASH_OUTPUT", "out/index.html"),
            ("ANIDASH_THEME", "dark"),
            ("ANIDASH_LOG", "warn"),
        ]));
        assert_eq!(config.render.input, Some(PathBuf::from("other.json")));
        assert_eq!(config.render.output, PathBuf::from("out/index.html"));
        assert_eq!(config.render.theme, "dark");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_clear_input_with_empty_override() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[("ANIDASH_INPUT", "")]));
        assert!(config.render.input.is_none());
    }

    #[test]
    fn should_prefer_rust_log_over_anidash_log() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[("ANIDASH_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_file_values_without_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[]));
        assert_eq!(config.render.output, PathBuf::from("dashboard.html"));
    }

    #[test]
    fn should_reject_empty_output() {
        let mut config = Config::default();
        config.render.output = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_unknown_theme() {
        let mut config = Config::default();
        config.render.theme = "sepia".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Theme(_))));
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_place_stylesheet_beside_output() {
        let mut config = Config::default();
        config.render.output = PathBuf::from("public/index.html");
        assert_eq!(
            config.render.stylesheet_path(),
            PathBuf::from("public/anidash.css")
        );
    }
}
