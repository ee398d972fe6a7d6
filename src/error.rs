//! Error types for the position snapshot job.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts a snapshot run. Conditions that the job
//! tolerates (a missing tax or meal allowance row) are not errors and never
//! reach this type.

use thiserror::Error;

/// The main error type for the position snapshot job.
///
/// Every variant is fatal: the run stops at the first one and nothing that
/// was accumulated so far is persisted.
///
/// # Example
///
/// ```
/// use position_snapshot::error::SnapshotError;
///
/// let error = SnapshotError::ConfigMissing {
///     key: "MONGODB_URI".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required setting not provided: MONGODB_URI");
/// ```
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A required configuration value was not provided.
    #[error("Required setting not provided: {key}")]
    ConfigMissing {
        /// The environment key that was missing.
        key: String,
    },

    /// A configuration value was present but could not be interpreted.
    #[error("Invalid value for setting '{key}': {message}")]
    ConfigInvalid {
        /// The environment key holding the bad value.
        key: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// The roster endpoint could not be reached or answered with a failure status.
    #[error("Roster transport error: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The roster response body could not be decoded.
    #[error("Failed to decode roster response: {message}")]
    Decode {
        /// A description of the decode failure.
        message: String,
    },

    /// The roster endpoint answered with GraphQL errors.
    #[error("Roster query rejected: {message}")]
    GraphQl {
        /// The concatenated GraphQL error messages.
        message: String,
    },

    /// No remuneration implementation row matched the derived filter.
    #[error("No remuneration implementation rate matches filter {filter}")]
    RemunerationRateNotFound {
        /// The rendered filter that produced no match.
        filter: String,
    },

    /// A document store operation failed.
    #[error("Store operation '{operation}' failed: {message}")]
    Store {
        /// The operation that failed (e.g. "insert_many").
        operation: String,
        /// The driver's description of the failure.
        message: String,
    },
}

impl SnapshotError {
    /// Builds a [`SnapshotError::Store`] from an operation name and any displayable cause.
    pub fn store(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::Store {
            operation: operation.to_string(),
            message: cause.to_string(),
        }
    }
}

/// A type alias for Results that return SnapshotError.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_missing_displays_key() {
        let error = SnapshotError::ConfigMissing {
            key: "SIMPEG_GRAPHQL_URL".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Required setting not provided: SIMPEG_GRAPHQL_URL"
        );
    }

    #[test]
    fn test_config_invalid_displays_key_and_message() {
        let error = SnapshotError::ConfigInvalid {
            key: "HTTP_TIMEOUT_SECS".to_string(),
            message: "expected a whole number, got 'soon'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for setting 'HTTP_TIMEOUT_SECS': expected a whole number, got 'soon'"
        );
    }

    #[test]
    fn test_remuneration_not_found_displays_filter() {
        let error = SnapshotError::RemunerationRateNotFound {
            filter: "{statusPegawaiId: 1, jenisJabatan: \"Cados\"}".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No remuneration implementation rate matches filter {statusPegawaiId: 1, jenisJabatan: \"Cados\"}"
        );
    }

    #[test]
    fn test_store_helper_captures_operation_and_cause() {
        let error = SnapshotError::store("delete_many", "connection reset");
        assert_eq!(
            error.to_string(),
            "Store operation 'delete_many' failed: connection reset"
        );
    }

    #[test]
    fn test_transport_and_decode_messages() {
        let transport = SnapshotError::Transport {
            message: "HTTP 502 Bad Gateway".to_string(),
        };
        assert_eq!(
            transport.to_string(),
            "Roster transport error: HTTP 502 Bad Gateway"
        );

        let decode = SnapshotError::Decode {
            message: "missing field `data`".to_string(),
        };
        assert_eq!(
            decode.to_string(),
            "Failed to decode roster response: missing field `data`"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SnapshotError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_graphql_error() -> SnapshotResult<()> {
            Err(SnapshotError::GraphQl {
                message: "unauthorized".to_string(),
            })
        }

        fn propagates_error() -> SnapshotResult<()> {
            returns_graphql_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
