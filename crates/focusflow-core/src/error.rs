//! Error types for the focusflow library.
//!
//! Domain operations (task CRUD, timer control, phase transitions) never fail:
//! invalid input is clamped or ignored. Errors only arise at the edges where
//! the core touches the outside world, such as reading a settings file or
//! parsing a value typed by the user.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for the fallible edges of the library.
#[derive(Error, Debug)]
pub enum FocusError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FocusError {
        FocusError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl FocusError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for Result to attach a configuration context to foreign
/// errors.
pub trait ResultExt<T> {
    /// Add context to any error type, converting to FocusError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| FocusError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for focusflow operations
pub type Result<T> = std::result::Result<T, FocusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = FocusError::invalid_input("priority").with_reason("unknown value 'urgent'");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'priority': unknown value 'urgent'"
        );
    }

    #[test]
    fn test_with_context_wraps_message() {
        let parsed: std::result::Result<u32, _> = "abc".parse::<u32>();
        let err = parsed.with_context("reading total sessions").unwrap_err();
        assert!(matches!(err, FocusError::Configuration { .. }));
        assert!(err.to_string().starts_with("Configuration error: reading total sessions"));
    }
}
