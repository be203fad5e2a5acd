//! Custom error types for sprite extraction

use std::fmt;
use std::io;

/// Errors raised while locating or writing sprites
#[derive(Debug)]
pub enum SpriteError {
    /// I/O error
    IoError(io::Error),
    /// Input path does not resolve to a readable file
    InputNotFound(String),
    /// Input file is not a supported or valid image
    DecodeError(String),
    /// A cropped sprite could not be encoded or saved
    EncodeError(String),
    /// Invalid parameter value (CLI flag, name pattern, ...)
    InvalidParameter(String),
    /// Unreadable or malformed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::IoError(e) => write!(f, "I/O error: {}", e),
            SpriteError::InputNotFound(path) => write!(f, "Input image not found: {}", path),
            SpriteError::DecodeError(msg) => write!(f, "Failed to decode image: {}", msg),
            SpriteError::EncodeError(msg) => write!(f, "Failed to save image: {}", msg),
            SpriteError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SpriteError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SpriteError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpriteError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SpriteError {
    fn from(error: io::Error) -> Self {
        SpriteError::IoError(error)
    }
}

impl From<String> for SpriteError {
    fn from(msg: String) -> Self {
        SpriteError::GenericError(msg)
    }
}

/// Result type for sprite operations
pub type SpriteResult<T> = Result<T, SpriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SpriteError::InputNotFound("sheet.png".to_string());
        assert_eq!(err.to_string(), "Input image not found: sheet.png");

        let err = SpriteError::InvalidParameter("padding".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: padding");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: SpriteError = io_err.into();
        assert!(matches!(err, SpriteError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
