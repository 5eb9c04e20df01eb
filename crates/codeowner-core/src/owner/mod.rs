//! Owner handles.
//!
//! An owner handle is an `@`-prefixed token naming a user (`@octocat`) or an
//! organization team (`@org/team`). Handles are recognised by a small nom
//! lexer and accumulated per file in insertion order without duplicates.
//!
//! # Example
//!
//! ```rust
//! use codeowner_core::owner::{is_valid_owner, OwnerSet};
//!
//! assert!(is_valid_owner("@myorg/backend-team"));
//! assert!(!is_valid_owner("@"));
//!
//! let mut owners = OwnerSet::new();
//! owners.insert("@b");
//! owners.insert("@a");
//! owners.insert("@b");
//! assert_eq!(owners.into_vec(), vec!["@b", "@a"]);
//! ```

mod lexer;
mod set;

pub use lexer::is_valid_owner;
pub use set::OwnerSet;
