//! File tree enumeration.
//!
//! Scanning goes through the [`FileTree`] trait so the walker can be swapped:
//! [`FsTree`] walks the real filesystem with `walkdir`, and [`MemoryTree`]
//! serves an in-memory tree for tests.
//!
//! Both apply the same exclusions: directories named in the
//! [`ExclusionPolicy`] are skipped whole, and symbolic links (to files or
//! directories) are never followed nor listed.

use super::error::ScanError;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory skipped by default: git metadata.
pub const GIT_DIR: &str = ".git";

/// A regular file found in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the tree root, with forward slashes and no leading `/`.
    ///
    /// Non-UTF-8 names are decoded lossily; use [`TreeEntry::path`] to open
    /// the file.
    pub relative: String,
    /// Native path relative to the tree root, exactly as listed.
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
}

impl TreeEntry {
    /// Creates a new entry whose native path is `relative` itself.
    pub fn new(relative: impl Into<String>, size: u64) -> Self {
        let relative = relative.into();
        Self {
            path: PathBuf::from(&relative),
            relative,
            size,
        }
    }

    /// Sets the native path used to read the file.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the final path segment.
    pub fn file_name(&self) -> &str {
        self.relative
            .rsplit_once('/')
            .map_or(self.relative.as_str(), |(_, name)| name)
    }
}

/// Which directories a walk skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    skip_dirs: Vec<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            skip_dirs: vec![GIT_DIR.to_string()],
        }
    }
}

impl ExclusionPolicy {
    /// Creates the default policy (skips `.git`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy that skips no directory.
    pub fn none() -> Self {
        Self {
            skip_dirs: Vec::new(),
        }
    }

    /// Adds a directory name to skip.
    pub fn with_skip_dir(mut self, name: impl Into<String>) -> Self {
        self.skip_dirs.push(name.into());
        self
    }

    /// Returns true if a directory with this name is skipped.
    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }

    /// Returns true if any directory segment of a relative file path is skipped.
    fn skips_path(&self, relative: &str) -> bool {
        relative
            .rsplit_once('/')
            .is_some_and(|(dirs, _)| dirs.split('/').any(|d| self.skips_dir(d)))
    }
}

/// A source of files to scan.
pub trait FileTree {
    /// Lists every regular file in the tree, excluding symlinks and skipped
    /// directories. Order is unspecified.
    fn entries(&self) -> Result<Vec<TreeEntry>, ScanError>;

    /// Reads the full content of a listed file.
    fn read(&self, entry: &TreeEntry) -> Result<Vec<u8>, ScanError>;
}

/// A tree on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
    policy: ExclusionPolicy,
}

impl FsTree {
    /// Creates a tree rooted at `root` with the default policy.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: ExclusionPolicy::default(),
        }
    }

    /// Sets the exclusion policy.
    pub fn with_policy(mut self, policy: ExclusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Joins the normal components of a relative path with forward slashes.
fn to_slash(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl FileTree for FsTree {
    fn entries(&self) -> Result<Vec<TreeEntry>, ScanError> {
        debug!("Listing files in {:?} (skip dirs: {:?})", self.root, self.policy.skip_dirs);

        let policy = &self.policy;
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                // Prune skipped directories so they are never descended into,
                // but always allow the root itself.
                if e.depth() == 0 || !e.file_type().is_dir() {
                    return true;
                }
                e.file_name()
                    .to_str()
                    .is_none_or(|name| !policy.skips_dir(name))
            });

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                ScanError::walk(path, e)
            })?;

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                trace!("Skipping symlink {:?}", entry.path());
                continue;
            }
            if entry.depth() == 0 || !file_type.is_file() {
                continue;
            }

            let metadata = entry
                .metadata()
                .map_err(|e| ScanError::walk(entry.path(), e))?;
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path());
            entries.push(TreeEntry::new(to_slash(relative), metadata.len()).with_path(relative));
        }

        debug!("Found {} files", entries.len());
        trace!("Files: {:?}", entries);
        Ok(entries)
    }

    fn read(&self, entry: &TreeEntry) -> Result<Vec<u8>, ScanError> {
        let path = self.root.join(&entry.path);
        fs::read(&path).map_err(|e| ScanError::io(path, e))
    }
}

#[derive(Debug, Clone)]
enum MemoryNode {
    File(Vec<u8>),
    Symlink,
}

/// An in-memory tree, keyed by root-relative slash paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    nodes: BTreeMap<String, MemoryNode>,
    policy: ExclusionPolicy,
}

impl MemoryTree {
    /// Creates an empty tree with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusion policy.
    pub fn with_policy(mut self, policy: ExclusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a regular file.
    pub fn with_file(mut self, relative: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert_file(relative, content);
        self
    }

    /// Adds a symbolic link. Anything at or below this path is excluded.
    pub fn with_symlink(mut self, relative: &str) -> Self {
        self.nodes
            .insert(relative.trim_matches('/').to_string(), MemoryNode::Symlink);
        self
    }

    /// Adds or replaces a regular file.
    pub fn insert_file(&mut self, relative: &str, content: impl Into<Vec<u8>>) {
        self.nodes.insert(
            relative.trim_matches('/').to_string(),
            MemoryNode::File(content.into()),
        );
    }

    fn under_symlink(&self, relative: &str) -> bool {
        self.nodes.iter().any(|(path, node)| {
            matches!(node, MemoryNode::Symlink)
                && relative
                    .strip_prefix(path.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

impl FileTree for MemoryTree {
    fn entries(&self) -> Result<Vec<TreeEntry>, ScanError> {
        let entries: Vec<TreeEntry> = self
            .nodes
            .iter()
            .filter_map(|(path, node)| match node {
                MemoryNode::File(content) => Some((path, content.len() as u64)),
                MemoryNode::Symlink => None,
            })
            .filter(|(path, _)| !self.policy.skips_path(path) && !self.under_symlink(path))
            .map(|(path, size)| TreeEntry::new(path.clone(), size))
            .collect();
        trace!("Memory tree entries: {:?}", entries);
        Ok(entries)
    }

    fn read(&self, entry: &TreeEntry) -> Result<Vec<u8>, ScanError> {
        match self.nodes.get(&entry.relative) {
            Some(MemoryNode::File(content)) => Ok(content.clone()),
            _ => Err(ScanError::io(
                &entry.relative,
                io::Error::new(io::ErrorKind::NotFound, "no such file in memory tree"),
            )),
        }
    }
}
