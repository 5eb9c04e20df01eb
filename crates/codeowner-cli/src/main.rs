//! CODEOWNERS Generator CLI
//!
//! A command-line tool that builds a GitHub CODEOWNERS file from ownership
//! annotations in source files.

use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ConfigError, ExitCode, ValidatedConfig, find_codeowners_file};
use cli::output::{CheckReport, HumanOutput, JsonOutput};
use codeowner_core::render::{ordered, render};
use codeowner_core::{Mapping, scan_dir};

/// Advisory printed when the scan produced nothing to write.
const NO_ANNOTATIONS: &str = "no CodeOwner annotations found";

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let use_colors = !args.json && io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let exit_code = run(&args, &mut stdout, &mut stderr, use_colors);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the generator with the given arguments.
fn run<O: Write, E: Write>(
    args: &Args,
    stdout: &mut O,
    stderr: &mut E,
    use_colors: bool,
) -> ExitCode {
    match generate(args, stdout, stderr, use_colors) {
        Ok(code) => code,
        Err(e) => {
            let _ = HumanOutput::new(stderr, use_colors).write_error(&e.to_string());
            ExitCode::Failure
        }
    }
}

fn generate<O: Write, E: Write>(
    args: &Args,
    stdout: &mut O,
    stderr: &mut E,
    use_colors: bool,
) -> Result<ExitCode, ConfigError> {
    let config = ValidatedConfig::from_args(args)?;

    debug!("Validated configuration: {:?}", config);
    info!("Scanning {}", config.root.display());

    let mut mappings = scan_dir(&config.root, &config.scan_config)?;
    info!("Found {} annotated path(s)", mappings.len());
    mappings.extend(config.protect.clone());

    if config.check {
        return check(&config, &mappings, stdout, use_colors);
    }

    if mappings.is_empty() {
        HumanOutput::new(stderr, use_colors).write_notice(NO_ANNOTATIONS)?;
        return Ok(ExitCode::Success);
    }

    let content = if config.json_output {
        let mut buf = Vec::new();
        JsonOutput::new(ordered(&mappings)).write(&mut buf)?;
        buf
    } else {
        render(&mappings).into_bytes()
    };

    match &config.output {
        Some(path) => {
            fs::write(path, &content).map_err(|source| ConfigError::Write {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {}", path.display());
        }
        None => stdout.write_all(&content)?,
    }

    Ok(ExitCode::Success)
}

/// Compares freshly rendered text with the repository's CODEOWNERS file.
fn check<O: Write>(
    config: &ValidatedConfig,
    mappings: &[Mapping],
    stdout: &mut O,
    use_colors: bool,
) -> Result<ExitCode, ConfigError> {
    let generated = render(mappings);
    let existing = find_codeowners_file(&config.root)
        .map(|path| fs::read_to_string(&path).map(|content| (path, content)))
        .transpose()?;

    let report = CheckReport::new(
        existing
            .as_ref()
            .map(|(path, content)| (path.as_path(), content.as_str())),
        &generated,
    );
    debug!("Check report: {:?}", report);

    if config.json_output {
        report.write_json(stdout)?;
    } else {
        HumanOutput::new(stdout, use_colors).write_check_report(&report)?;
    }

    Ok(if report.up_to_date {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
