//! Error types for the luminol engine

use std::fmt;

/// Result type alias for luminol operations
pub type Result<T> = std::result::Result<T, LuminolError>;

/// Custom error type for luminol operations
#[derive(Debug)]
pub enum LuminolError {
    /// Invalid CLI arguments
    InvalidArguments(String),
    /// Configuration error with structured context
    Config {
        /// Application section the error belongs to, if any
        app: Option<String>,
        /// Key path inside the config file, e.g. `waybar.colors`
        key: Option<String>,
        /// Human-readable description
        message: String,
        /// Actionable fix hint shown below the message
        suggestion: Option<String>,
    },
    /// Image decode or sampling failure
    ImageError(String),
    /// File I/O error
    IoError(std::io::Error),
    /// General error
    General(String),
}

impl LuminolError {
    /// Convenience constructor for config errors without structured context
    pub fn config(message: impl Into<String>) -> Self {
        LuminolError::Config {
            app: None,
            key: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Config error scoped to an application section
    pub fn config_for(
        app: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        LuminolError::Config {
            app: Some(app.into()),
            key: Some(key.into()),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Process exit code for this error per the documented taxonomy
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            LuminolError::InvalidArguments(_) => 2,
            LuminolError::Config { .. } => 3,
            LuminolError::ImageError(_) => 4,
            LuminolError::IoError(_) | LuminolError::General(_) => 5,
        }
    }
}

impl fmt::Display for LuminolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuminolError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            LuminolError::Config {
                app,
                key,
                message,
                suggestion,
            } => {
                write!(f, "Configuration error")?;
                if let Some(app) = app {
                    write!(f, " [{}]", app)?;
                }
                if let Some(key) = key {
                    write!(f, " ({})", key)?;
                }
                write!(f, ": {}", message)?;
                if let Some(suggestion) = suggestion {
                    write!(f, "\n  hint: {}", suggestion)?;
                }
                Ok(())
            }
            LuminolError::ImageError(msg) => write!(f, "Image error: {}", msg),
            LuminolError::IoError(err) => write!(f, "I/O error: {}", err),
            LuminolError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for LuminolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LuminolError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LuminolError {
    fn from(err: std::io::Error) -> Self {
        LuminolError::IoError(err)
    }
}

impl From<image::ImageError> for LuminolError {
    fn from(err: image::ImageError) -> Self {
        LuminolError::ImageError(format!("Image processing error: {}", err))
    }
}

impl From<toml::de::Error> for LuminolError {
    fn from(err: toml::de::Error) -> Self {
        LuminolError::config(format!("TOML parse error: {}", err))
    }
}

// For backward compatibility with anyhow
impl From<anyhow::Error> for LuminolError {
    fn from(err: anyhow::Error) -> Self {
        LuminolError::General(err.to_string())
    }
}
