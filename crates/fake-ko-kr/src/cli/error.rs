//! Error types for the command-line front end.

use thiserror::Error;

use crate::error::ProviderError;

/// Errors surfaced while executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A provider rejected its arguments.
    #[error("generation failed: {source}")]
    Provider {
        /// Underlying provider error.
        #[from]
        #[source]
        source: ProviderError,
    },
    /// Generated output could not be written.
    #[error("failed to write output: {message}")]
    Write {
        /// I/O error message.
        message: String,
    },
    /// A generated value could not be encoded as JSON.
    #[error("failed to encode JSON: {message}")]
    Json {
        /// Encoder error message.
        message: String,
    },
}

impl CliError {
    pub(super) fn write(err: &std::io::Error) -> Self {
        Self::Write {
            message: err.to_string(),
        }
    }

    pub(super) fn json(err: &serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
