//! Store error types.

use thiserror::Error;

/// Errors surfaced by a schedule/expense store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing service could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backing service returned data the engine cannot read.
    #[error("Malformed store response: {0}")]
    Malformed(String),
}
