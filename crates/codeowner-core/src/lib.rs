//! CODEOWNERS Generator Core
//!
//! A library for building GitHub CODEOWNERS files from ownership annotations
//! found in source files.
//!
//! # Features
//!
//! - **Annotations**: `CodeOwner: @team` lines in any comment style
//! - **Directory markers**: `.codeowner` files owning a whole subtree
//! - **Safe traversal**: symlinks and `.git` are skipped, large and binary
//!   files are ignored
//! - **Deterministic output**: sorted, grouped, byte-stable rendering
//!
//! # Quick Start
//!
//! ```rust
//! use codeowner_core::{MemoryTree, ScanConfig, parse_protect, render, scan_tree};
//!
//! let tree = MemoryTree::new()
//!     .with_file("README.md", "<!-- CodeOwner: @docs -->\n")
//!     .with_file("src/cmd/main.go", "// CodeOwner: @backend\n")
//!     .with_file("src/lib/utils.go", "// CodeOwner: @platform\n");
//!
//! let mut mappings = scan_tree(&tree, &ScanConfig::default()).unwrap();
//! mappings.push(parse_protect("@admin").unwrap());
//!
//! assert_eq!(
//!     render(&mappings),
//!     "CODEOWNERS @admin\n\
//!      \n\
//!      /README.md @docs\n\
//!      \n\
//!      /src/cmd/main.go @backend\n\
//!      \n\
//!      /src/lib/utils.go @platform\n"
//! );
//! ```
//!
//! # Modules
//!
//! - [`owner`]: Owner handle lexing and ordered accumulation
//! - [`mapping`]: Path-to-owner mappings
//! - [`scan`]: Tree walking, eligibility checks and extraction
//! - [`protect`]: Ownership of the CODEOWNERS file itself
//! - [`render`]: Sorting, grouping and serialization

#[cfg(feature = "generate")]
pub mod generate;
pub mod mapping;
pub mod owner;
pub mod protect;
pub mod render;
pub mod scan;

// Re-export commonly used types at the crate root
pub use mapping::{CODEOWNERS_PATH, Mapping, MappingPath};
pub use protect::{ProtectError, parse_protect};
pub use render::render;
pub use scan::{
    DEFAULT_MARKER_FILE, DEFAULT_PREFIX, FileTree, FsTree, MemoryTree, ScanConfig, ScanError,
    scan_dir, scan_tree,
};
