//! CLI module for the reference generator
//!
//! ## Commands
//!
//! - `functions [OUT_DIR] [--catalog FILE]` - Write `functions.md`, `aggregates.md` and `operators.md`
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `catalog` - Catalog file loading
//! - `config` - Output locations and catalog source
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod catalog;
pub mod commands;
pub mod config;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use config::GenerateConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Carries a user-facing message and the exit code `run()` terminates with.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Reference documentation generator for SQL builtins
#[derive(Parser, Debug)]
#[command(name = "sqldoc")]
#[command(version = VERSION)]
#[command(about = "Generate reference docs for SQL builtin functions and operators", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate markdown documentation of functions and operators
    Functions {
        /// Existing output directory (default: docs/generated/sql)
        #[arg(value_name = "OUT_DIR")]
        out_dir: Option<PathBuf>,
        /// JSON catalog to document instead of the builtin catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

impl Command {
    /// Gather the generation settings of a `functions` invocation.
    pub fn generate_config(&self) -> GenerateConfig {
        match self {
            Command::Functions { out_dir, catalog } => {
                let mut config = GenerateConfig::new();
                if let Some(out_dir) = out_dir {
                    config = config.with_out_dir(out_dir);
                }
                if let Some(catalog) = catalog {
                    config = config.with_catalog(catalog);
                }
                config
            }
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        ref command @ Command::Functions { .. } => commands::generate_docs(&command.generate_config()),
    }
}

// ============================================================================
// Tests
// ============================================================================
