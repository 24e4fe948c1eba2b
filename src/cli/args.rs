//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Homebrew cask generator for Espanso releases
#[derive(Parser, Debug)]
#[command(
    name = "espanso_cask",
    version,
    about = "Render the Espanso Homebrew cask for a release",
    long_about = "Substitutes a release version and the SHA-256 of Espanso-Mac-Universal.zip
into the Homebrew cask template and prints the result on stdout.

Usage:
  espanso_cask --release-version 2.2.1 --sha256 <HEX> > espanso.rb
  ESPANSO_CASK_VERSION=2.2.1 ESPANSO_CASK_SHA256=<HEX> espanso_cask --strict
  espanso_cask --release-version 2.2.1 --sha256 <HEX> --template formula_template.rb

Exit code 0 = complete cask written to stdout. Nothing is written on failure."
)]
pub struct Args {
    /// Release version without the leading 'v' (e.g. 2.2.1)
    #[arg(long, env = "ESPANSO_CASK_VERSION", value_name = "VERSION")]
    pub release_version: Option<String>,

    /// SHA-256 of the release archive, hex encoded
    #[arg(long, env = "ESPANSO_CASK_SHA256", value_name = "HEX")]
    pub sha256: Option<String>,

    /// Render this template file instead of the built-in cask
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Reject versions that are not semver and checksums that are not 64 hex chars
    #[arg(long)]
    pub strict: bool,

    /// Print progress messages to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress everything but errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
    strict: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(
            super::OutputManager::new(args.verbose, args.quiet),
            args.strict,
        )
    }
}

impl RuntimeConfig {
    /// Create a runtime configuration over an existing output manager
    pub fn new(output: super::OutputManager, strict: bool) -> Self {
        Self { output, strict }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether inputs are format checked before rendering
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) {
        report(self.output.verbose(message));
    }

    /// Print progress message
    pub fn progress(&self, message: &str) {
        report(self.output.progress(message));
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) {
        report(self.output.success(message));
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) {
        report(self.output.warn(message));
    }
}

// Status lines are best effort; the rendered cask on stdout is what matters.
fn report(result: std::io::Result<()>) {
    if let Err(e) = result {
        log::debug!("Failed to write status output: {}", e);
    }
}
