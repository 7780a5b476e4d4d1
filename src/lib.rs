//! Contributor identity types for contribution analysis.
//!
//! The central type is [`Contributor`]: an immutable identity value made of a
//! required display name and an optional email address, compared by value.
//! Enclosing systems treat it as an opaque key when bucketing contributions
//! per person.

pub mod contributor;
pub mod errors;

// Re-exports for convenience.
pub use contributor::Contributor;
pub use errors::IdentityError;
