use thiserror::Error;

use crate::version::error::RemoteError;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported schema version: {0:?}")]
    UnsupportedSchemaVersion(String),
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("access type {access_type:?} of source {source_name:?} is not supported")]
    UnsupportedAccessType {
        source_name: String,
        access_type: String,
    },

    #[error("failed to convert github access of source {source_name:?}")]
    Decode {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to get latest tag for {repo_url}")]
    Resolve {
        repo_url: String,
        #[source]
        source: RemoteError,
    },

    #[error("cancelled while resolving {repo_url}")]
    Cancelled { repo_url: String },
}

impl UpdateError {
    /// True when the update stopped because of the cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, UpdateError::Cancelled { .. })
    }
}
