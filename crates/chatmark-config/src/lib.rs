//! Configuration management for chatmark.
//!
//! Parses `chatmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! The emoji base URLs support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chatmark_renderer::{
    DEFAULT_CUSTOM_EMOJI_BASE, DEFAULT_UNICODE_EMOJI_BASE, EmojiUrls, RenderContext, Theme,
    TimestampFormatter,
};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "chatmark.toml";

/// Largest accepted UTC offset, in minutes (exclusive).
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the default render context.
    pub context: Option<RenderContext>,
    /// Override the timestamp UTC offset.
    pub utc_offset_minutes: Option<i32>,
    /// Override whether code blocks are highlighted.
    pub highlight: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering defaults.
    pub render: RenderConfig,
    /// Emoji image locations.
    pub emoji: EmojiConfig,
    /// Timestamp formatting.
    pub timestamp: TimestampConfig,
    /// Code block highlighting.
    pub highlight: HighlightConfig,
    /// Theme colour overrides, keyed by role name (e.g. `textMuted`).
    pub theme: BTreeMap<String, String>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Context used when none is given on the command line.
    pub context: RenderContext,
}

/// Emoji image locations.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    /// Base URL for custom emoji images.
    pub custom_base_url: String,
    /// Base URL for unicode emoji SVGs.
    pub unicode_base_url: String,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            custom_base_url: DEFAULT_CUSTOM_EMOJI_BASE.to_owned(),
            unicode_base_url: DEFAULT_UNICODE_EMOJI_BASE.to_owned(),
        }
    }
}

/// Timestamp formatting.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// Offset from UTC in minutes, east positive.
    pub utc_offset_minutes: i32,
}

/// Code block highlighting.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Whether code blocks are syntax highlighted.
    pub enabled: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`emoji.custom_base_url`").
        field: String,
        /// Error message.
        message: String,
    },
}

/// Require a base URL to use http(s) and end with `/`.
fn require_base_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    if !url.ends_with('/') {
        return Err(ConfigError::Validation(format!("{field} must end with /")));
    }
    Ok(())
}

/// Accept `#rgb` and `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// Expand environment variables in a single field.
fn expand_field(value: &mut String, field: &str) -> Result<(), ConfigError> {
    let expanded = shellexpand::env(value.as_str()).map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: e.to_string(),
    })?;
    *value = expanded.into_owned();
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `chatmark.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(context) = settings.context {
            self.render.context = context;
        }
        if let Some(offset) = settings.utc_offset_minutes {
            self.timestamp.utc_offset_minutes = offset;
        }
        if let Some(highlight) = settings.highlight {
            self.highlight.enabled = highlight;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Expand environment variables in the emoji base URLs.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand_field(&mut self.emoji.custom_base_url, "emoji.custom_base_url")?;
        expand_field(&mut self.emoji.unicode_base_url, "emoji.unicode_base_url")?;
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_base_url(&self.emoji.custom_base_url, "emoji.custom_base_url")?;
        require_base_url(&self.emoji.unicode_base_url, "emoji.unicode_base_url")?;

        let offset = self.timestamp.utc_offset_minutes;
        if offset <= -MAX_OFFSET_MINUTES || offset >= MAX_OFFSET_MINUTES {
            return Err(ConfigError::Validation(format!(
                "timestamp.utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {offset}"
            )));
        }

        let mut theme = Theme::default();
        for (key, value) in &self.theme {
            if theme.get_mut(key).is_none() {
                return Err(ConfigError::Validation(format!("unknown theme key: theme.{key}")));
            }
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "theme.{key} must be a #rgb or #rrggbb colour, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Emoji URL settings for the renderer.
    #[must_use]
    pub fn emoji_urls(&self) -> EmojiUrls {
        EmojiUrls::new(&self.emoji.custom_base_url, &self.emoji.unicode_base_url)
    }

    /// Timestamp formatter for the renderer.
    ///
    /// Falls back to UTC if the offset is out of range; [`validate`](Self::validate)
    /// rejects such offsets.
    #[must_use]
    pub fn timestamp_formatter(&self) -> TimestampFormatter {
        TimestampFormatter::from_offset_minutes(self.timestamp.utc_offset_minutes)
            .unwrap_or_default()
    }

    /// The dark theme with configured overrides applied.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::dark();
        for (key, value) in &self.theme {
            if let Some(slot) = theme.get_mut(key) {
                slot.clone_from(value);
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.context, RenderContext::Content);
        assert_eq!(config.emoji.custom_base_url, DEFAULT_CUSTOM_EMOJI_BASE);
        assert_eq!(config.emoji.unicode_base_url, DEFAULT_UNICODE_EMOJI_BASE);
        assert_eq!(config.timestamp.utc_offset_minutes, 0);
        assert!(config.highlight.enabled);
        assert!(config.theme.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.context, RenderContext::Content);
        assert!(config.highlight.enabled);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r##"
[render]
context = "reply"

[emoji]
custom_base_url = "https://emoji.example.com/custom/"
unicode_base_url = "https://emoji.example.com/svg/"

[timestamp]
utc_offset_minutes = -300

[highlight]
enabled = false

[theme]
textMuted = "#abc"
link = "#112233"
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.context, RenderContext::Reply);
        assert_eq!(
            config.emoji.custom_base_url,
            "https://emoji.example.com/custom/"
        );
        assert_eq!(config.timestamp.utc_offset_minutes, -300);
        assert!(!config.highlight.enabled);
        assert!(config.validate().is_ok());

        let theme = config.theme();
        assert_eq!(theme.text_muted, "#abc");
        assert_eq!(theme.link, "#112233");
        assert_eq!(theme.background, Theme::dark().background);
    }

    #[test]
    fn test_parse_invalid_context() {
        let result: Result<Config, _> = toml::from_str("[render]\ncontext = \"footer\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default();
        config.emoji.custom_base_url = "ftp://cdn.example.com/".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("emoji.custom_base_url"));
    }

    #[test]
    fn test_validate_base_url_trailing_slash() {
        let mut config = Config::default();
        config.emoji.unicode_base_url = "https://cdn.example.com/svg".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must end with /"));
    }

    #[test]
    fn test_validate_offset_range() {
        let mut config = Config::default();
        config.timestamp.utc_offset_minutes = 24 * 60;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        config.timestamp.utc_offset_minutes = -(23 * 60 + 59);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_theme_overrides() {
        let mut config = Config::default();
        config.theme.insert("nope".to_owned(), "#fff".to_owned());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unknown theme key"));

        let mut config = Config::default();
        config.theme.insert("text".to_owned(), "red".to_owned());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme.text"));
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#00A8fc"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let result = Config::load(Some(Path::new("/nonexistent/chatmark.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("[timestamp]\nutc_offset_minutes = 60\n");
        let config = Config::load(Some(file.path()), None).unwrap();
        assert_eq!(config.timestamp.utc_offset_minutes, 60);
        assert_eq!(config.config_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let file = write_config("[render]\ncontext = \"header\"\n");
        let settings = CliSettings {
            context: Some(RenderContext::Reply),
            utc_offset_minutes: Some(120),
            highlight: Some(false),
        };
        let config = Config::load(Some(file.path()), Some(&settings)).unwrap();
        assert_eq!(config.render.context, RenderContext::Reply);
        assert_eq!(config.timestamp.utc_offset_minutes, 120);
        assert!(!config.highlight.enabled);
    }

    #[test]
    fn test_load_rejects_invalid_cli_offset() {
        let file = write_config("");
        let settings = CliSettings {
            utc_offset_minutes: Some(10_000),
            ..CliSettings::default()
        };
        let result = Config::load(Some(file.path()), Some(&settings));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("[render\n");
        let result = Config::load(Some(file.path()), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_var_default_expansion() {
        let file = write_config(
            "[emoji]\ncustom_base_url = \"${CHATMARK_TEST_UNSET_EMOJI_BASE:-https://fallback.example.com/}\"\n",
        );
        let config = Config::load(Some(file.path()), None).unwrap();
        assert_eq!(config.emoji.custom_base_url, "https://fallback.example.com/");
    }

    #[test]
    fn test_env_var_missing() {
        let file = write_config(
            "[emoji]\nunicode_base_url = \"${CHATMARK_TEST_UNSET_UNICODE_BASE}\"\n",
        );
        let result = Config::load(Some(file.path()), None);
        assert!(matches!(
            result,
            Err(ConfigError::EnvVar { ref field, .. }) if field == "emoji.unicode_base_url"
        ));
    }

    #[test]
    fn test_renderer_settings() {
        let mut config = Config::default();
        config.timestamp.utc_offset_minutes = 60;
        assert_eq!(
            config.timestamp_formatter(),
            TimestampFormatter::from_offset_minutes(60).unwrap()
        );
        assert_eq!(config.emoji_urls(), EmojiUrls::default());
    }
}
