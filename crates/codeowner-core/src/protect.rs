//! Ownership of the generated CODEOWNERS file itself.

use crate::mapping::{Mapping, MappingPath};
use crate::owner::{OwnerSet, is_valid_owner};
use thiserror::Error;

/// An error in a self-protection owner list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtectError {
    /// No owner was given.
    #[error("empty protect string: at least one owner is required")]
    Empty,

    /// A token does not start with `@`.
    #[error("invalid owner {owner:?}: must start with @")]
    MissingAt {
        /// The offending token.
        owner: String,
    },

    /// A token contains characters not allowed in a handle.
    #[error("invalid owner {owner:?}: contains invalid characters")]
    InvalidCharacters {
        /// The offending token.
        owner: String,
    },
}

impl ProtectError {
    /// Returns the offending token, if any.
    pub fn owner(&self) -> Option<&str> {
        match self {
            ProtectError::Empty => None,
            ProtectError::MissingAt { owner } => Some(owner),
            ProtectError::InvalidCharacters { owner } => Some(owner),
        }
    }
}

/// Parses a whitespace-separated list of owners for the CODEOWNERS file.
///
/// Every token must be a valid handle; the first bad token is reported.
/// Owners keep their given order, repeats are dropped.
///
/// # Example
///
/// ```rust
/// use codeowner_core::protect::parse_protect;
///
/// let mapping = parse_protect("@admin @platform-team").unwrap();
/// assert_eq!(mapping.to_string(), "CODEOWNERS @admin @platform-team");
///
/// assert!(parse_protect("admin").is_err());
/// ```
pub fn parse_protect(input: &str) -> Result<Mapping, ProtectError> {
    let mut owners = OwnerSet::new();
    for token in input.split_whitespace() {
        if !token.starts_with('@') {
            return Err(ProtectError::MissingAt {
                owner: token.to_string(),
            });
        }
        if !is_valid_owner(token) {
            return Err(ProtectError::InvalidCharacters {
                owner: token.to_string(),
            });
        }
        owners.insert(token);
    }
    Mapping::new(MappingPath::Codeowners, owners).ok_or(ProtectError::Empty)
}
