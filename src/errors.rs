//! Error types for the contributor-identity crate.
//!
//! Construction is the crate's only fallible point, so a single `thiserror`
//! enum covers it. Accessors, equality, hashing, and `Display` are total.

use thiserror::Error;

/// Errors from contributor identity construction.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A required field failed validation.
    #[error("invalid argument '{field}': {detail}")]
    InvalidArgument {
        field: String,
        detail: String,
    },
}
