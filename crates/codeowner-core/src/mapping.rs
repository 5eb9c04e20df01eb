//! Path-to-owner mappings.
//!
//! A [`Mapping`] associates a root-anchored path (or the generated file itself)
//! with a non-empty, duplicate-free list of owner handles.

use crate::owner::OwnerSet;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

/// The path rendered for the generated file's own ownership line.
pub const CODEOWNERS_PATH: &str = "CODEOWNERS";

/// The path side of a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MappingPath {
    /// A root-anchored, slash-separated path such as `/src/main.rs`, a
    /// directory subtree such as `/src/cmd/`, or the root `/`.
    Path(String),
    /// The generated CODEOWNERS file itself.
    Codeowners,
}

impl MappingPath {
    /// Builds a root-anchored path for a file, given its path relative to the
    /// scan root with forward slashes.
    pub fn file(relative: &str) -> Self {
        Self::Path(format!("/{}", relative.trim_start_matches('/')))
    }

    /// Builds a root-anchored subtree path for a directory relative to the
    /// scan root. An empty relative path denotes the root itself (`/`).
    pub fn directory(relative: &str) -> Self {
        let relative = relative.trim_matches('/');
        if relative.is_empty() {
            Self::Path("/".to_string())
        } else {
            Self::Path(format!("/{}/", relative))
        }
    }

    /// Returns true for the generated file's own path.
    pub fn is_codeowners(&self) -> bool {
        matches!(self, Self::Codeowners)
    }

    /// Returns the path text as it appears in the rendered file.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Codeowners => CODEOWNERS_PATH,
        }
    }
}

impl Display for MappingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MappingPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A path and the owners responsible for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    /// The owned path.
    pub path: MappingPath,
    owners: Vec<String>,
}

impl Mapping {
    /// Creates a mapping from an accumulated owner set.
    ///
    /// Returns `None` when the set is empty, so a mapping always has at least
    /// one owner.
    pub fn new(path: MappingPath, owners: OwnerSet) -> Option<Self> {
        if owners.is_empty() {
            return None;
        }
        Some(Self {
            path,
            owners: owners.into_vec(),
        })
    }

    /// Creates a mapping from a list of owners, dropping repeats.
    pub fn from_owners<'a, I>(path: MappingPath, owners: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(path, owners.into_iter().collect())
    }

    /// Returns the owners in the order they were first found.
    pub fn owners(&self) -> &[String] {
        &self.owners
    }
}

impl Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.owners.join(" "))
    }
}
