//! Error types for device counter operations.

use thiserror::Error;

/// Result type alias for counter operations.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Error types for EEPROM access over SNMP.
#[derive(Error, Debug)]
pub enum CounterError {
    /// Session-level failure: socket error, timeout or agent error status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response was not an octet string or could not be decoded as ASCII
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Register read response did not match the expected two-line frame
    #[error("Frame mismatch: got \"{raw}\"")]
    FrameMismatch {
        /// Response text as received, escaped for display
        raw: String,
    },

    /// Register write response differed from the acknowledgement literal
    #[error("Write not acknowledged{context}: got \"{response}\"")]
    WriteNotAcknowledged {
        /// Which write failed, e.g. " for c1-lo := 12 (0x0018)"; empty if unknown
        context: String,
        /// Response text as received, escaped for display
        response: String,
    },

    /// Object identifier text could not be parsed
    #[error("Invalid OID: {0}")]
    InvalidOid(String),

    /// Reading could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CounterError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                CounterError::Transport("request timed out".to_string())
            }
            _ => CounterError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn timeouts_become_transport_errors() {
        let err: CounterError = io::Error::new(io::ErrorKind::WouldBlock, "resource busy").into();
        assert!(matches!(err, CounterError::Transport(ref m) if m == "request timed out"));
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CounterError = json_err.into();
        assert!(matches!(err, CounterError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
    }

    #[test]
    fn write_message_names_register() {
        let err = CounterError::WriteNotAcknowledged {
            context: " for housekeeping-a := 0 (0x001C)".to_string(),
            response: "||:42:NG;".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Write not acknowledged for housekeeping-a := 0 (0x001C): got \"||:42:NG;\""
        );
    }
}
