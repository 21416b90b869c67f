//! Configuration module for the HUD chat bridge.

use serde::Deserialize;
use std::path::Path;

use crate::{HudChatError, Result};

/// Log levels accepted in `[logging] level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];

/// Chat HUD configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HudConfig {
    /// Frames after entering the HUD during which enter does not open chat.
    #[serde(default = "default_activation_delay_frames")]
    pub activation_delay_frames: u32,
    /// Register the bridge entry points on startup.
    #[serde(default = "default_register_bridge")]
    pub register_bridge: bool,
    /// Frame interval of the demo host loop in milliseconds.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

fn default_activation_delay_frames() -> u32 {
    2
}

fn default_register_bridge() -> bool {
    true
}

fn default_frame_interval_ms() -> u64 {
    16
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            activation_delay_frames: default_activation_delay_frames(),
            register_bridge: default_register_bridge(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. An empty path logs to the console only.
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("logs/hudchat.log".to_string())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    /// The log file path, or `None` when file logging is off.
    pub fn log_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|path| !path.trim().is_empty())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Chat HUD configuration.
    #[serde(default)]
    pub hud: HudConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HudChatError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HudChatError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HUDCHAT_LOG_LEVEL`: Override the log level
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("HUDCHAT_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The frame interval is zero
    /// - The log level is not recognized
    pub fn validate(&self) -> Result<()> {
        if self.hud.frame_interval_ms == 0 {
            return Err(HudChatError::Validation(
                "hud.frame_interval_ms must be greater than zero".to_string(),
            ));
        }
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(HudChatError::Validation(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.hud.activation_delay_frames, 2);
        assert!(config.hud.register_bridge);
        assert_eq!(config.hud.frame_interval_ms, 16);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.log_file(), Some("logs/hudchat.log"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[hud]
activation_delay_frames = 5
register_bridge = false
frame_interval_ms = 33

[logging]
level = "debug"
file = "custom/chat.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.hud.activation_delay_frames, 5);
        assert!(!config.hud.register_bridge);
        assert_eq!(config.hud.frame_interval_ms, 33);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file.as_deref(), Some("custom/chat.log"));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[hud]
register_bridge = false
"#;

        let config = Config::parse(toml).unwrap();

        // Specified values
        assert!(!config.hud.register_bridge);

        // Default values
        assert_eq!(config.hud.activation_delay_frames, 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.hud.frame_interval_ms, 16);
        assert_eq!(config.logging.log_file(), Some("logs/hudchat.log"));
    }

    #[test]
    fn test_empty_log_file_is_console_only() {
        let config = Config::parse("[logging]\nfile = \"\"\n").unwrap();
        assert_eq!(config.logging.file.as_deref(), Some(""));
        assert_eq!(config.logging.log_file(), None);

        let logging = LoggingConfig {
            file: None,
            ..LoggingConfig::default()
        };
        assert_eq!(logging.log_file(), None);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(HudChatError::Config(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(HudChatError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[hud]\nactivation_delay_frames = 7").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.hud.activation_delay_frames, 7);
    }

    #[test]
    fn test_apply_env_overrides_log_level() {
        // Save original value if exists
        let original = std::env::var("HUDCHAT_LOG_LEVEL").ok();

        std::env::set_var("HUDCHAT_LOG_LEVEL", "trace");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.logging.level, "trace");

        // Empty values do not override
        std::env::set_var("HUDCHAT_LOG_LEVEL", "");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.logging.level, "info");

        // Restore original
        if let Some(val) = original {
            std::env::set_var("HUDCHAT_LOG_LEVEL", val);
        } else {
            std::env::remove_var("HUDCHAT_LOG_LEVEL");
        }
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_frame_interval() {
        let mut config = Config::default();
        config.hud.frame_interval_ms = 0;

        let result = config.validate();
        if let Err(HudChatError::Validation(msg)) = result {
            assert!(msg.contains("frame_interval_ms"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = Config::default();
        config.logging.level = "WARNING".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(HudChatError::Validation(_))));
    }
}
