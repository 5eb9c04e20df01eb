//! Benchmark fixtures - generated at runtime from the tree generator.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.
//!
//! Directory scans run against a temporary directory holding the medium
//! tree written to disk.

use codeowner_core::Mapping;
use codeowner_core::generate::{
    GeneratedFile, TreeGeneratorConfig, generate_mappings, generate_tree, write_tree,
};
use std::path::PathBuf;
use std::sync::LazyLock;
use tempfile::TempDir;

type Trees = Vec<(&'static str, Vec<GeneratedFile>)>;
type MappingSets = Vec<(&'static str, Vec<Mapping>)>;

/// Generated trees for in-memory scan benchmarks.
pub fn trees() -> &'static [(&'static str, Vec<GeneratedFile>)] {
    static TREES: LazyLock<Trees> = LazyLock::new(|| {
        vec![
            ("small", generate_tree(&TreeGeneratorConfig::small())),
            ("medium", generate_tree(&TreeGeneratorConfig::medium())),
            ("large", generate_tree(&TreeGeneratorConfig::large())),
        ]
    });
    TREES.as_slice()
}

/// Generated mapping sets for render benchmarks.
pub fn mapping_sets() -> &'static [(&'static str, Vec<Mapping>)] {
    static SETS: LazyLock<MappingSets> = LazyLock::new(|| {
        vec![
            ("small", generate_mappings(&TreeGeneratorConfig::small())),
            ("medium", generate_mappings(&TreeGeneratorConfig::medium())),
            ("large", generate_mappings(&TreeGeneratorConfig::large())),
        ]
    });
    SETS.as_slice()
}

/// A benchmark repository holding a generated tree on disk.
///
/// The temp directory is kept alive as long as this struct exists.
pub struct BenchmarkRepo {
    #[allow(dead_code)] // Kept to maintain temp directory lifetime
    temp_dir: TempDir,
    /// Path to the repository root.
    pub path: PathBuf,
}

impl BenchmarkRepo {
    /// Creates a new benchmark repository from the medium preset.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().to_path_buf();
        let files = generate_tree(&TreeGeneratorConfig::medium());
        write_tree(&path, &files).expect("Failed to write benchmark tree");
        // A .git directory that the walker must prune
        write_tree(&path.join(".git"), &files[..files.len().min(50)])
            .expect("Failed to write .git tree");

        BenchmarkRepo { temp_dir, path }
    }
}

/// Lazily created benchmark repository, shared by all disk benchmarks.
static BENCHMARK_REPO: LazyLock<BenchmarkRepo> = LazyLock::new(BenchmarkRepo::new);

/// Returns the path to the benchmark repository.
pub fn repo_path() -> &'static PathBuf {
    &BENCHMARK_REPO.path
}
