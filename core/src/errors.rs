//! Error types for the filemenu core crate.
//!
//! Menu evaluation itself never fails: unknown or missing capability data
//! degrades to "feature disabled". The only propagating failures are the
//! account lookup performed when a filter is built and loading the
//! feature-toggle configuration.

use thiserror::Error;

/// Errors raised by an [`AccountDirectory`](crate::services::AccountDirectory)
/// while resolving the active user's server-side id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The account exists but carries no user id.
    #[error("User id unavailable for account: {0}")]
    UserIdUnavailable(String),

    /// The account store could not be queried.
    #[error("Account lookup failed: {0}")]
    Lookup(String),
}

/// Errors related to loading [`FeatureToggles`](crate::config::FeatureToggles).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
