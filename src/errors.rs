// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for plan building operations

use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur while building an infrastructure plan
#[derive(Debug, Error)]
pub enum BuildError {
    /// No default template exists for a provider/kind pair
    #[error("No default template for kind '{kind}' on provider '{provider}'")]
    DefaultNotFound { provider: String, kind: String },

    /// No template matches the requested selector
    #[error("No '{selector}' template for kind '{kind}' on provider '{provider}'")]
    SelectorNotFound {
        provider: String,
        kind: String,
        selector: String,
    },

    /// A document was decoded as the wrong resource kind
    #[error("Expected document of kind '{expected}', found '{found}'")]
    KindMismatch { expected: String, found: String },

    /// A template or user document does not fit the typed specification
    #[error("Invalid '{kind}' document: {reason}")]
    InvalidTemplate { kind: String, reason: String },

    /// A subnet bucket's security group is not where the bucket recorded it
    #[error("Security group '{name}' not found at plan position {position}")]
    SecurityGroupMissing { name: String, position: usize },

    /// No builder exists for the cluster's provider
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Cluster model could not be read
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading templates or input
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for plan building operations
pub type BuildResult<T> = Result<T, BuildError>;

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for BuildError {
    fn from(err: serde_yaml::Error) -> Self {
        BuildError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err.to_string())
    }
}
