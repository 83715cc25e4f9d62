//! Error types for environment variable access
//!
//! All fallible accessors return `Result<T, Error>`.
//! Every variant carries the variable name so failures can be
//! traced back to the configuration entry that caused them.

use thiserror::Error;

/// Boxed conversion failure, kept as the `source()` of [`Error::Malformed`].
pub type ConversionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Environment access error types
#[derive(Debug, Error)]
pub enum Error {
    /// Variable absent and no default was supplied
    #[error("environment variable `{0}` is not set")]
    Missing(String),

    /// Present value rejected by the active conversion
    #[error("got invalid value ({value}) from environment variable `{name}`")]
    Malformed {
        name: String,
        value: String,
        #[source]
        source: ConversionError,
    },

    /// Present value outside the accepted boolean literals
    #[error(
        "got invalid value ({value}) from environment, \
         was expecting one of these: true, 1, false, 0"
    )]
    InvalidBool { name: String, value: String },

    /// Present value outside the caller-supplied choice set
    #[error(
        "got invalid value ({value}) from environment, \
         was expecting one of these: {}",
        .choices.join(", ")
    )]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },
}

impl Error {
    /// Name of the environment variable the error refers to
    pub fn variable(&self) -> &str {
        match self {
            Error::Missing(name) => name,
            Error::Malformed { name, .. } => name,
            Error::InvalidBool { name, .. } => name,
            Error::InvalidChoice { name, .. } => name,
        }
    }

    /// Whether the error is a plain "variable not set"
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::Missing(_))
    }

    pub(crate) fn missing(name: &str) -> Self {
        Error::Missing(name.to_owned())
    }

    pub(crate) fn malformed(
        name: &str,
        value: impl Into<String>,
        source: impl Into<ConversionError>,
    ) -> Self {
        Error::Malformed {
            name: name.to_owned(),
            value: value.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for environment accessors
pub type Result<T> = std::result::Result<T, Error>;
