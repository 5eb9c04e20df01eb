//! Rendering mappings as a CODEOWNERS file.
//!
//! Output order is fixed by the paths alone, so the same mappings always
//! render to the same bytes regardless of scan order:
//!
//! 1. The CODEOWNERS self-protection line, if any, followed by a blank line.
//! 2. Root-level entries (`/README.md`, `/`).
//! 3. Entries under hidden top-level directories (`/.github/...`).
//! 4. Everything else.
//!
//! Within a section, entries are grouped by their first one or two directory
//! segments, groups are separated by one blank line, and entries are sorted
//! by path inside each group.

use crate::mapping::Mapping;
use log::warn;
use std::fmt::Write;

/// Coarse output buckets, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Paths directly under the root, and the root itself.
    Root,
    /// Paths under a top-level directory whose name starts with `.`.
    Hidden,
    /// Everything else.
    Other,
}

impl Section {
    /// Returns the section of a root-anchored path.
    pub fn of(path: &str) -> Self {
        match strip_root(path).split_once('/') {
            None => Section::Root,
            Some((first, _)) if first.starts_with('.') => Section::Hidden,
            Some(_) => Section::Other,
        }
    }
}

/// Removes the leading `/` root anchor.
fn strip_root(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Returns the grouping key of a root-anchored path.
///
/// Empty for root-level entries, the directory for entries one level deep,
/// and the first two directories for anything deeper. Directory mappings
/// (`/src/cmd/`) group with the files they contain.
pub fn group_key(path: &str) -> &str {
    let path = strip_root(path);
    let Some((dir, _)) = path.rsplit_once('/') else {
        return "";
    };
    match dir.match_indices('/').nth(1) {
        Some((second_slash, _)) => &dir[..second_slash],
        None => dir,
    }
}

/// The composite sort key of a mapping: section, group, then path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey<'a> {
    /// The output section.
    pub section: Section,
    /// The grouping key.
    pub group: &'a str,
    /// The full path.
    pub path: &'a str,
}

impl<'a> SortKey<'a> {
    /// Computes the key for a root-anchored path.
    pub fn of(path: &'a str) -> Self {
        Self {
            section: Section::of(path),
            group: group_key(path),
            path,
        }
    }
}

/// Returns mappings in output order.
///
/// The first mapping for the CODEOWNERS file itself comes first; any further
/// ones are dropped. All other mappings follow, sorted by [`SortKey`].
pub fn ordered(mappings: &[Mapping]) -> Vec<&Mapping> {
    let mut protect: Option<&Mapping> = None;
    let mut entries: Vec<&Mapping> = Vec::with_capacity(mappings.len());
    for mapping in mappings {
        if !mapping.path.is_codeowners() {
            entries.push(mapping);
        } else if protect.is_none() {
            protect = Some(mapping);
        } else {
            warn!("Ignoring extra CODEOWNERS mapping: {}", mapping);
        }
    }

    entries.sort_by(|a, b| SortKey::of(a.path.as_str()).cmp(&SortKey::of(b.path.as_str())));

    let mut out = Vec::with_capacity(entries.len() + 1);
    out.extend(protect);
    out.extend(entries);
    out
}

/// Renders mappings as CODEOWNERS text.
///
/// Input order does not matter. At most one mapping for the CODEOWNERS file
/// itself is used; extra ones are discarded.
///
/// # Example
///
/// ```rust
/// use codeowner_core::mapping::{Mapping, MappingPath};
/// use codeowner_core::render::render;
///
/// let mappings = vec![
///     Mapping::from_owners(MappingPath::file("src/lib/utils.go"), ["@platform"]).unwrap(),
///     Mapping::from_owners(MappingPath::file("README.md"), ["@docs"]).unwrap(),
/// ];
///
/// assert_eq!(render(&mappings), "/README.md @docs\n\n/src/lib/utils.go @platform\n");
/// ```
pub fn render(mappings: &[Mapping]) -> String {
    let ordered = ordered(mappings);
    let mut out = String::new();

    let entries = match ordered.split_first() {
        Some((first, rest)) if first.path.is_codeowners() => {
            push_line(&mut out, first);
            if !rest.is_empty() {
                out.push('\n');
            }
            rest
        }
        _ => ordered.as_slice(),
    };

    let mut previous_group: Option<&str> = None;
    for mapping in entries {
        let group = group_key(mapping.path.as_str());
        if previous_group.is_some_and(|previous| previous != group) {
            out.push('\n');
        }
        previous_group = Some(group);
        push_line(&mut out, mapping);
    }
    out
}

fn push_line(out: &mut String, mapping: &Mapping) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", mapping);
}
