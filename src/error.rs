//! Error types for the HUD chat bridge.

use thiserror::Error;

/// Common error type for host-facing bridge operations.
///
/// The chat operations themselves never fail; these errors come from the
/// surfaces around them (configuration, logging setup, dynamic entry point
/// calls, state interchange).
#[derive(Error, Debug)]
pub enum HudChatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for configuration or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A named entry point was called while not registered.
    #[error("entry point not registered: {0}")]
    EntryPointNotRegistered(String),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, HudChatError>;

/// Reason an outgoing chat message was not queued.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueError {
    /// The text was empty after trimming.
    #[error("chat message is empty")]
    Empty,

    /// The send queue already holds its maximum number of messages.
    #[error("chat send queue is full ({0} messages)")]
    QueueFull(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = HudChatError::Config("missing [hud] table".to_string());
        assert_eq!(err.to_string(), "configuration error: missing [hud] table");
    }

    #[test]
    fn test_validation_error_display() {
        let err = HudChatError::Validation("frame interval must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: frame interval must be positive"
        );
    }

    #[test]
    fn test_entry_point_error_display() {
        let err = HudChatError::EntryPointNotRegistered("__NW_HUD_RESET_CHAT__".to_string());
        assert_eq!(
            err.to_string(),
            "entry point not registered: __NW_HUD_RESET_CHAT__"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HudChatError = io_err.into();
        assert!(matches!(err, HudChatError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: HudChatError = json_err.into();
        assert!(matches!(err, HudChatError::Json(_)));
    }

    #[test]
    fn test_enqueue_error_display() {
        assert_eq!(EnqueueError::Empty.to_string(), "chat message is empty");
        assert_eq!(
            EnqueueError::QueueFull(128).to_string(),
            "chat send queue is full (128 messages)"
        );
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(HudChatError::Config("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
