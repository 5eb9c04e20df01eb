//! Scanning a file tree for ownership.
//!
//! Every regular file in the tree goes through the eligibility guard (size
//! limit, binary sniff). Marker files yield a directory mapping; every other
//! file is searched for annotations and yields a file mapping when at least
//! one owner is found.
//!
//! # Example
//!
//! ```rust
//! use codeowner_core::scan::{MemoryTree, ScanConfig, scan_tree};
//!
//! let tree = MemoryTree::new()
//!     .with_file("src/main.rs", "// CodeOwner: @backend\nfn main() {}\n")
//!     .with_file("docs/.codeowner", "@docs-team\n");
//!
//! let mut mappings = scan_tree(&tree, &ScanConfig::default()).unwrap();
//! mappings.sort_by(|a, b| a.path.as_str().cmp(b.path.as_str()));
//!
//! assert_eq!(mappings[0].to_string(), "/docs/ @docs-team");
//! assert_eq!(mappings[1].to_string(), "/src/main.rs @backend");
//! ```

mod annotation;
mod error;
mod guard;
mod marker;
mod tree;

pub use annotation::{extract_owners, scan_owners};
pub use error::ScanError;
pub use guard::{BINARY_SNIFF_LEN, MAX_FILE_SIZE, Skip, is_binary, is_oversized};
pub use marker::{marker_directory, parse_marker};
pub use tree::{ExclusionPolicy, FileTree, FsTree, GIT_DIR, MemoryTree, TreeEntry};

use crate::mapping::{Mapping, MappingPath};
use log::{debug, info, trace};
use std::path::Path;

/// The default annotation prefix.
pub const DEFAULT_PREFIX: &str = "CodeOwner:";

/// The default name of directory marker files.
pub const DEFAULT_MARKER_FILE: &str = ".codeowner";

/// Settings for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// The annotation prefix searched for on each line.
    pub prefix: String,
    /// The file name that marks directory ownership.
    pub marker_file: String,
    /// Files larger than this (in bytes) are skipped.
    pub max_file_size: u64,
    /// Number of leading bytes inspected for binary content.
    pub sniff_len: usize,
    /// Directories skipped during the walk.
    pub exclusions: ExclusionPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            max_file_size: MAX_FILE_SIZE,
            sniff_len: BINARY_SNIFF_LEN,
            exclusions: ExclusionPolicy::default(),
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the marker file name.
    pub fn with_marker_file(mut self, name: impl Into<String>) -> Self {
        self.marker_file = name.into();
        self
    }

    /// Sets the size limit.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the binary sniff length.
    pub fn with_sniff_len(mut self, bytes: usize) -> Self {
        self.sniff_len = bytes;
        self
    }

    /// Sets the exclusion policy.
    pub fn with_exclusions(mut self, policy: ExclusionPolicy) -> Self {
        self.exclusions = policy;
        self
    }
}

/// Scans a directory on disk. See [`scan_tree`].
pub fn scan_dir(root: &Path, config: &ScanConfig) -> Result<Vec<Mapping>, ScanError> {
    let tree = FsTree::new(root).with_policy(config.exclusions.clone());
    scan_tree(&tree, config)
}

/// Scans every file of `tree` and returns the mappings found, in no
/// particular order.
///
/// Oversized and binary files are skipped silently. The first walk or read
/// failure aborts the scan.
pub fn scan_tree<T: FileTree + ?Sized>(
    tree: &T,
    config: &ScanConfig,
) -> Result<Vec<Mapping>, ScanError> {
    let entries = tree.entries()?;
    debug!(
        "Scanning {} files (prefix={:?}, marker={:?})",
        entries.len(),
        config.prefix,
        config.marker_file
    );

    let mut mappings = Vec::new();
    let mut skipped = 0usize;
    for entry in &entries {
        match scan_entry(tree, entry, config)? {
            Ok(Some(mapping)) => {
                trace!("{}", mapping);
                mappings.push(mapping);
            }
            Ok(None) => {}
            Err(reason) => {
                debug!("Skipping {} ({:?})", entry.relative, reason);
                skipped += 1;
            }
        }
    }

    info!(
        "Scanned {} files: {} mappings, {} skipped",
        entries.len(),
        mappings.len(),
        skipped
    );
    Ok(mappings)
}

/// Scans a single entry. The inner `Err` reports why an ineligible file was
/// skipped.
fn scan_entry<T: FileTree + ?Sized>(
    tree: &T,
    entry: &TreeEntry,
    config: &ScanConfig,
) -> Result<Result<Option<Mapping>, Skip>, ScanError> {
    if is_oversized(entry.size, config.max_file_size) {
        return Ok(Err(Skip::Oversized));
    }

    // Read once; the sniff and the scan share the same buffer.
    let content = tree.read(entry)?;
    if is_binary(&content, config.sniff_len) {
        return Ok(Err(Skip::Binary));
    }
    let text = String::from_utf8_lossy(&content);

    let mapping = if entry.file_name() == config.marker_file {
        let dir = marker_directory(&entry.relative);
        Mapping::new(MappingPath::directory(dir), parse_marker(&text))
    } else {
        Mapping::new(
            MappingPath::file(&entry.relative),
            scan_owners(&text, &config.prefix),
        )
    };
    Ok(Ok(mapping))
}
