//! Generate annotated tree fixtures for benchmarking.
//!
//! Usage: cargo run --release --bin generate-fixtures --features generate -- [output_dir]
//!
//! Generates deterministic trees using the same presets as the Rust benchmarks.

use codeowner_core::generate::{FileKind, TreeGeneratorConfig, generate_tree, write_tree};
use std::{fs, io, path::Path, path::PathBuf, process::ExitCode};

/// Type alias for fixture preset entries.
type PresetEntry = (&'static str, fn() -> TreeGeneratorConfig);

/// Fixture presets - keep in sync with benches/fixtures.rs
const PRESETS: &[PresetEntry] = &[
    ("small", TreeGeneratorConfig::small),
    ("medium", TreeGeneratorConfig::medium),
    ("large", TreeGeneratorConfig::large),
];

fn main() -> ExitCode {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benches/fixtures"));

    if let Err(e) = run(&output_dir) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    for (name, config_fn) in PRESETS {
        let config = config_fn();
        let files = generate_tree(&config);
        let root = output_dir.join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        write_tree(&root, &files)?;

        let count = |kind: FileKind| files.iter().filter(|f| f.kind == kind).count();
        println!(
            "Generated {} ({} files, {} annotated, {} markers, {} binary)",
            root.display(),
            files.len(),
            count(FileKind::Annotated),
            count(FileKind::Marker),
            count(FileKind::Binary)
        );
    }

    Ok(())
}
