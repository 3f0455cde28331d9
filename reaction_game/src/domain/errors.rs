// Domain-level errors for game workflows.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("invalid delay range: min {min_ms}ms must be below max {max_ms}ms")]
    InvalidDelayRange { min_ms: u64, max_ms: u64 },
}
