//! Domain error types.
//!
//! Identity failures are returned as values so callers can branch on them
//! instead of parsing log output.

use thiserror::Error;

/// Errors surfaced by identity operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    /// The supplied old password did not match the current one. The stored
    /// password is unchanged.
    #[error("old password does not match")]
    PasswordMismatch,
}
