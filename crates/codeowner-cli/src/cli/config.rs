//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types.

use crate::cli::Args;
use codeowner_core::{CODEOWNERS_PATH, Mapping, ProtectError, ScanConfig, ScanError, parse_protect};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while configuring or running the generator.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Invalid `--protect` value.
    #[error("--protect: {0}")]
    Protect(#[from] ProtectError),

    /// Scanning the tree failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Writing the output file failed.
    #[error("writing {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Generation succeeded, or the existing file is up to date.
    Success = 0,
    /// Wrong configuration, scan failure or write failure.
    Failure = 1,
    /// `--check` found the CODEOWNERS file missing or stale.
    CheckFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running the generator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Canonical root of the tree to scan.
    pub root: PathBuf,
    /// Configuration for the scanner.
    pub scan_config: ScanConfig,
    /// Mapping protecting the CODEOWNERS file, if requested.
    pub protect: Option<Mapping>,
    /// Where to write the result; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Whether to compare against the existing file instead of writing.
    pub check: bool,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let root = args.path.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!("path '{}' is invalid: {}", args.path.display(), e))
        })?;
        if !root.is_dir() {
            return Err(ConfigError::Invalid(format!(
                "path '{}' is not a directory",
                args.path.display()
            )));
        }

        if args.prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("prefix must not be empty".to_string()));
        }
        if args.dirowner.trim().is_empty() || args.dirowner.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "dirowner '{}' must be a plain file name",
                args.dirowner
            )));
        }

        let protect = args.protect.as_deref().map(parse_protect).transpose()?;

        let scan_config = ScanConfig::new()
            .with_prefix(args.prefix.clone())
            .with_marker_file(args.dirowner.clone());

        Ok(Self {
            root,
            scan_config,
            protect,
            output: args.output.clone(),
            check: args.check,
            json_output: args.json,
        })
    }
}

/// Finds the existing CODEOWNERS file in the repository.
///
/// Searches in the following locations (in order):
/// 1. `.github/CODEOWNERS`
/// 2. `CODEOWNERS`
/// 3. `docs/CODEOWNERS`
pub fn find_codeowners_file(repo_path: &Path) -> Option<PathBuf> {
    let locations = [
        repo_path.join(".github").join(CODEOWNERS_PATH),
        repo_path.join(CODEOWNERS_PATH),
        repo_path.join("docs").join(CODEOWNERS_PATH),
    ];
    locations.into_iter().find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("codeowner").chain(extra.iter().copied()))
    }

    #[test]
    fn test_find_codeowners_github_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github")).unwrap();
        fs::write(dir.path().join(".github/CODEOWNERS"), "/a @owner\n").unwrap();
        fs::write(dir.path().join("CODEOWNERS"), "/a @owner\n").unwrap();

        let path = find_codeowners_file(dir.path()).unwrap();
        assert!(path.ends_with(".github/CODEOWNERS"));
    }

    #[test]
    fn test_find_codeowners_root_before_docs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/CODEOWNERS"), "/a @owner\n").unwrap();
        assert!(find_codeowners_file(dir.path()).unwrap().ends_with("docs/CODEOWNERS"));

        fs::write(dir.path().join("CODEOWNERS"), "/a @owner\n").unwrap();
        let path = find_codeowners_file(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("CODEOWNERS"));
    }

    #[test]
    fn test_find_codeowners_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("CODEOWNERS")).unwrap();
        assert!(find_codeowners_file(dir.path()).is_none());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Failure), 1);
        assert_eq!(i32::from(ExitCode::CheckFailed), 3);
    }

    #[test]
    fn test_from_args_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ValidatedConfig::from_args(&args(&[dir.path().to_str().unwrap()])).unwrap();

        assert_eq!(config.root, dir.path().canonicalize().unwrap());
        assert_eq!(config.scan_config, ScanConfig::default());
        assert!(config.protect.is_none());
        assert!(!config.check);
    }

    #[test]
    fn test_from_args_custom_scan_config() {
        let dir = TempDir::new().unwrap();
        let config = ValidatedConfig::from_args(&args(&[
            dir.path().to_str().unwrap(),
            "--prefix",
            "OWNER:",
            "--dirowner",
            "OWNERS",
        ]))
        .unwrap();

        assert_eq!(config.scan_config.prefix, "OWNER:");
        assert_eq!(config.scan_config.marker_file, "OWNERS");
    }

    #[test]
    fn test_from_args_protect() {
        let dir = TempDir::new().unwrap();
        let config = ValidatedConfig::from_args(&args(&[
            dir.path().to_str().unwrap(),
            "--protect",
            "@admin @admin @org/security",
        ]))
        .unwrap();

        let protect = config.protect.unwrap();
        assert!(protect.path.is_codeowners());
        assert_eq!(protect.owners(), ["@admin", "@org/security"]);
    }

    #[test]
    fn test_from_args_invalid_protect() {
        let dir = TempDir::new().unwrap();
        let err = ValidatedConfig::from_args(&args(&[
            dir.path().to_str().unwrap(),
            "--protect",
            "admin",
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Protect(_)));
        assert_eq!(
            err.to_string(),
            "--protect: invalid owner \"admin\": must start with @"
        );
    }

    #[test]
    fn test_from_args_empty_protect() {
        let dir = TempDir::new().unwrap();
        let err = ValidatedConfig::from_args(&args(&[
            dir.path().to_str().unwrap(),
            "--protect",
            "  ",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("at least one owner is required"));
    }

    #[test]
    fn test_from_args_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let err = ValidatedConfig::from_args(&args(&[missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_args_file_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.rs");
        fs::write(&file, "").unwrap();
        let err = ValidatedConfig::from_args(&args(&[file.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_from_args_empty_prefix() {
        let dir = TempDir::new().unwrap();
        let err = ValidatedConfig::from_args(&args(&[dir.path().to_str().unwrap(), "--prefix", ""]))
            .unwrap_err();
        assert!(err.to_string().contains("prefix"));
    }

    #[test]
    fn test_from_args_bad_dirowner() {
        let dir = TempDir::new().unwrap();
        let err = ValidatedConfig::from_args(&args(&[
            dir.path().to_str().unwrap(),
            "--dirowner",
            "a/b",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("dirowner"));
    }
}
