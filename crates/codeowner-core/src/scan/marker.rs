//! Parsing of per-directory marker files.
//!
//! A marker file (`.codeowner` by default) lists the owners of its directory
//! and everything below it. Its whole content is split on whitespace; every
//! valid handle is kept, no prefix is needed.

use crate::owner::{OwnerSet, is_valid_owner};

/// Parses the owners listed in a marker file.
pub fn parse_marker(content: &str) -> OwnerSet {
    content
        .split_whitespace()
        .filter(|token| is_valid_owner(token))
        .collect()
}

/// Returns the directory owning a marker, given the marker's root-relative
/// path. The scan root is the empty string.
pub fn marker_directory(relative: &str) -> &str {
    relative.rsplit_once('/').map_or("", |(dir, _)| dir)
}
