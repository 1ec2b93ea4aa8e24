//! Unified error handling for pacetrack.
//!
//! Degenerate telemetry (empty tracks, zero distance, rejected samples) is
//! never an error: analyzers return zero/empty results instead. Errors are
//! reserved for contract violations, undecodable documents, bad configuration
//! and failures of injected collaborators.

use thiserror::Error;

use crate::session::SessionState;

/// Unified error type for pacetrack operations.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A finalize-only accessor was called before the session stopped
    #[error("session is {state:?}, finalized data is only available once stopped")]
    SessionNotFinalized { state: SessionState },

    /// A stored document is missing a required field or holds an invalid value
    #[error("failed to decode {entity}: {message}")]
    Decode { entity: String, message: String },

    /// Malformed JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {message}")]
    Config { message: String },

    /// An injected data source failed
    #[error("data source error: {message}")]
    DataSource { message: String },

    /// The live session task ended unexpectedly
    #[error("session runtime error: {message}")]
    Runtime { message: String },
}

impl TelemetryError {
    pub(crate) fn decode(entity: &str, message: impl Into<String>) -> Self {
        TelemetryError::Decode {
            entity: entity.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        TelemetryError::Config {
            message: message.into(),
        }
    }

    pub fn data_source(message: impl Into<String>) -> Self {
        TelemetryError::DataSource {
            message: message.into(),
        }
    }
}

/// Result type alias for pacetrack operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Extension trait for converting Option to TelemetryError.
pub trait OptionExt<T> {
    /// Convert Option to Result with a missing-field decode error.
    fn ok_or_missing(self, entity: &str, field: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_missing(self, entity: &str, field: &str) -> Result<T> {
        self.ok_or_else(|| TelemetryError::decode(entity, format!("missing field `{}`", field)))
    }
}
