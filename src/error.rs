//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ProviderError: Failures while resolving a download URL
//! - ConfigError: Issues with CLI configuration and input files

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by fetch failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// URL provider errors
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Programmatic classification of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Fetch,
    NoMatch,
    InvalidInput,
    MissingInput,
}

/// Errors raised while resolving a download URL
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The download index could not be retrieved
    #[error("unexpected error retrieving download index {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The index was retrieved but nothing matched the link pattern
    #[error("unable to find any download links matching '{pattern}' in {url}")]
    NoMatch { url: String, pattern: String },

    /// An input variable holds a value the provider does not accept
    #[error("invalid value '{value}' for input '{name}': {message}")]
    InvalidInput {
        name: String,
        value: String,
        message: String,
    },

    /// A required input variable was not supplied
    #[error("missing required input variable '{name}'")]
    MissingInput { name: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A `-k` argument was not in `KEY=VALUE` form
    #[error("invalid input variable '{value}': expected KEY=VALUE")]
    InvalidKeyValue { value: String },

    /// Failed to read an input file
    #[error("failed to read input file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not a flat TOML table of strings
    #[error("failed to parse input file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Failed to construct the HTTP client
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },
}

impl ProviderError {
    /// Creates a new Fetch error
    pub fn fetch(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ProviderError::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Creates a new NoMatch error
    pub fn no_match(url: impl Into<String>, pattern: impl Into<String>) -> Self {
        ProviderError::NoMatch {
            url: url.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a new InvalidInput error
    pub fn invalid_input(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ProviderError::InvalidInput {
            name: name.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingInput error
    pub fn missing_input(name: impl Into<String>) -> Self {
        ProviderError::MissingInput { name: name.into() }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProviderError::Fetch { .. } => ErrorKind::Fetch,
            ProviderError::NoMatch { .. } => ErrorKind::NoMatch,
            ProviderError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ProviderError::MissingInput { .. } => ErrorKind::MissingInput,
        }
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
