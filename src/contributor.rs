//! The contributor identity value type.
//!
//! A [`Contributor`] is a required display name plus an optional email
//! address, compared by value. Equality covers both fields: two contributors
//! with the same name but mismatched email presence are never equal, and
//! names and emails are compared exactly (no case or whitespace
//! normalization).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::IdentityError;

/// An immutable contributor identity.
///
/// Fields are private so the non-blank-name invariant established at
/// construction holds for the lifetime of the value. Derived `PartialEq`,
/// `Eq`, and `Hash` agree with each other, so the type works directly as a
/// map or set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawContributor")]
pub struct Contributor {
    name: String,
    email: Option<String>,
}

impl Contributor {
    /// Create a contributor with no email.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityError> {
        Self::from_parts(name.into(), None)
    }

    /// Create a contributor with an email.
    pub fn with_email(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        Self::from_parts(name.into(), Some(email.into()))
    }

    /// General construction entry point; `None` email means "no email".
    ///
    /// This is the sole validation site: an empty or whitespace-only name is
    /// rejected with [`IdentityError::InvalidArgument`].
    pub fn from_parts(name: String, email: Option<String>) -> Result<Self, IdentityError> {
        if name.trim().is_empty() {
            warn!(field = "name", "rejected blank contributor name");
            return Err(IdentityError::InvalidArgument {
                field: "name".into(),
                detail: "must not be empty or whitespace-only".into(),
            });
        }
        Ok(Self { name, email })
    }

    /// The display name. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email address, if one was supplied.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl std::fmt::Display for Contributor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Contributor[{}, {}]",
            self.name,
            self.email.as_deref().unwrap_or("-")
        )
    }
}

/// Unvalidated mirror of [`Contributor`] that routes deserialization through
/// [`Contributor::from_parts`], so a blank name is rejected there too.
#[derive(Deserialize)]
struct RawContributor {
    name: String,
    #[serde(default)]
    email: Option<String>,
}

impl TryFrom<RawContributor> for Contributor {
    type Error = IdentityError;

    fn try_from(raw: RawContributor) -> Result<Self, Self::Error> {
        Contributor::from_parts(raw.name, raw.email)
    }
}
