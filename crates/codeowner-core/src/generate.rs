//! Synthetic annotated trees for benchmarking and testing.
//!
//! Generation is deterministic for a given seed. Trees mix annotated source
//! files, plain files, binary blobs and directory markers so that every scan
//! path is exercised.

use crate::mapping::{Mapping, MappingPath};
use crate::scan::{DEFAULT_MARKER_FILE, DEFAULT_PREFIX, MemoryTree};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fs;
use std::io;
use std::path::Path;

/// Configuration for generating trees.
#[derive(Debug, Clone)]
pub struct TreeGeneratorConfig {
    /// Number of regular files to generate.
    pub num_files: usize,
    /// Maximum owners per annotated file.
    pub max_owners_per_file: usize,
    /// Percentage of files that carry an annotation.
    pub annotated_percent: u32,
    /// Percentage of files that are binary.
    pub binary_percent: u32,
    /// Percentage of directories that get a marker file.
    pub marker_percent: u32,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for TreeGeneratorConfig {
    fn default() -> Self {
        Self {
            num_files: 500,
            max_owners_per_file: 3,
            annotated_percent: 60,
            binary_percent: 5,
            marker_percent: 30,
            seed: 42,
        }
    }
}

impl TreeGeneratorConfig {
    /// Creates a config with the given number of files.
    pub fn new(num_files: usize) -> Self {
        Self {
            num_files,
            ..Default::default()
        }
    }

    /// Small fixture (~50 files).
    pub fn small() -> Self {
        Self::new(50)
    }

    /// Medium fixture (~500 files).
    pub fn medium() -> Self {
        Self::new(500)
    }

    /// Large fixture (~5000 files).
    pub fn large() -> Self {
        Self::new(5_000)
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum owners per file.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_file = max.max(1); // At least 1 owner
        self
    }

    /// Set the percentage of directories that get a marker file.
    pub fn with_marker_percent(mut self, percent: u32) -> Self {
        self.marker_percent = percent.min(100);
        self
    }

    /// Set the percentage of binary files.
    pub fn with_binary_percent(mut self, percent: u32) -> Self {
        self.binary_percent = percent.min(100);
        self
    }
}

/// Vocabulary for generating realistic trees.
mod vocabulary {
    pub const TOP_DIRS: &[&str] = &[
        "src", "lib", "cmd", "docs", "tests", "scripts", ".github", ".config",
    ];
    pub const SUB_DIRS: &[&str] = &["api", "core", "util", "internal", "web"];
    /// Extension and line comment leader.
    pub const LANGUAGES: &[(&str, &str)] = &[
        ("rs", "//"),
        ("go", "//"),
        ("ts", "//"),
        ("py", "#"),
        ("sh", "#"),
        ("yaml", "#"),
        ("sql", "--"),
    ];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer"];
    pub const ORGS: &[&str] = &["acme", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra"];
}

/// Percentage of files placed at the root.
const ROOT_PERCENT: u32 = 5;

/// What a generated file is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Text with an annotation; yields a file mapping.
    Annotated,
    /// Text without an annotation.
    Plain,
    /// Binary content carrying an annotation that must be ignored.
    Binary,
    /// A directory marker; yields a directory mapping.
    Marker,
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the tree root, with forward slashes.
    pub path: String,
    /// File content.
    pub content: Vec<u8>,
    /// What the file should produce when scanned.
    pub kind: FileKind,
}

/// Generates a random owner handle.
fn generate_owner(rng: &mut StdRng) -> String {
    use vocabulary::*;

    if rng.random_bool(0.6) {
        format!("@{}", USERNAMES[rng.random_range(0..USERNAMES.len())])
    } else {
        format!(
            "@{}/{}",
            ORGS[rng.random_range(0..ORGS.len())],
            TEAMS[rng.random_range(0..TEAMS.len())]
        )
    }
}

fn generate_owners(rng: &mut StdRng, max: usize) -> Vec<String> {
    let count = rng.random_range(1..=max.max(1));
    (0..count).map(|_| generate_owner(rng)).collect()
}

fn generate_dir(rng: &mut StdRng) -> String {
    use vocabulary::*;

    if rng.random_ratio(ROOT_PERCENT, 100) {
        return String::new();
    }
    let top = TOP_DIRS[rng.random_range(0..TOP_DIRS.len())];
    if rng.random_bool(0.5) {
        let sub = SUB_DIRS[rng.random_range(0..SUB_DIRS.len())];
        format!("{}/{}", top, sub)
    } else {
        top.to_string()
    }
}

/// Generates a random tree based on configuration.
pub fn generate_tree(config: &TreeGeneratorConfig) -> Vec<GeneratedFile> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut files = Vec::with_capacity(config.num_files + TOP_DIRS.len() * SUB_DIRS.len());

    for i in 0..config.num_files {
        let dir = generate_dir(&mut rng);
        let (ext, comment) = LANGUAGES[rng.random_range(0..LANGUAGES.len())];
        let name = format!("file_{}.{}", i, ext);
        let path = if dir.is_empty() {
            name
        } else {
            format!("{}/{}", dir, name)
        };

        let owners = generate_owners(&mut rng, config.max_owners_per_file).join(" ");
        let annotation = format!("{} {} {}\n", comment, DEFAULT_PREFIX, owners);
        let body = format!("{} generated file {}\nvalue = {}\n", comment, i, i * 7);

        let (content, kind) = if rng.random_ratio(config.binary_percent, 100) {
            let mut bytes = vec![0x7f, b'E', b'L', b'F', 0x00];
            bytes.extend_from_slice(annotation.as_bytes());
            (bytes, FileKind::Binary)
        } else if rng.random_ratio(config.annotated_percent, 100) {
            (format!("{}{}", annotation, body).into_bytes(), FileKind::Annotated)
        } else {
            (body.into_bytes(), FileKind::Plain)
        };
        files.push(GeneratedFile {
            path,
            content,
            kind,
        });
    }

    for top in TOP_DIRS {
        for dir in std::iter::once(top.to_string())
            .chain(SUB_DIRS.iter().map(|sub| format!("{}/{}", top, sub)))
        {
            if rng.random_ratio(config.marker_percent, 100) {
                let owners = generate_owners(&mut rng, config.max_owners_per_file).join("\n");
                files.push(GeneratedFile {
                    path: format!("{}/{}", dir, DEFAULT_MARKER_FILE),
                    content: format!("{}\n", owners).into_bytes(),
                    kind: FileKind::Marker,
                });
            }
        }
    }

    files
}

/// Generates mappings directly, skipping the scan.
pub fn generate_mappings(config: &TreeGeneratorConfig) -> Vec<Mapping> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut mappings = Vec::with_capacity(config.num_files);

    for i in 0..config.num_files {
        let dir = generate_dir(&mut rng);
        let owners = generate_owners(&mut rng, config.max_owners_per_file);
        let path = if rng.random_ratio(config.marker_percent, 100) && !dir.is_empty() {
            MappingPath::directory(&format!("{}/d{}", dir, i))
        } else if dir.is_empty() {
            MappingPath::file(&format!("file_{}.rs", i))
        } else {
            MappingPath::file(&format!("{}/file_{}.rs", dir, i))
        };
        if let Some(mapping) = Mapping::from_owners(path, owners.iter().map(String::as_str)) {
            mappings.push(mapping);
        }
    }

    mappings
}

/// Builds an in-memory tree from generated files.
pub fn memory_tree(files: &[GeneratedFile]) -> MemoryTree {
    let mut tree = MemoryTree::new();
    for file in files {
        tree.insert_file(&file.path, file.content.clone());
    }
    tree
}

/// Writes generated files below `root`, creating directories as needed.
pub fn write_tree(root: &Path, files: &[GeneratedFile]) -> io::Result<()> {
    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
    }
    Ok(())
}
