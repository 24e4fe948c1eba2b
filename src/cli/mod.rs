//! Command line interface for the cask generator.
//!
//! Collects the release inputs from flags or environment, renders the cask,
//! and writes it to stdout in one piece.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::cask::{
    self, DescriptorBuilder, FormulaDescriptor,
    template::{SHA256_TOKEN, VERSION_TOKEN},
    validate,
};
use crate::error::{ErrorExt, Result};
use std::io::Write;
use std::path::Path;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);

    let rendered = generate(&args, &config).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(0)
}

/// Render the cask described by `args` without writing it anywhere.
pub async fn generate(args: &Args, config: &RuntimeConfig) -> Result<String> {
    let descriptor = build_descriptor(args)?;

    if config.strict() {
        config.progress("Validating release inputs");
        let version = validate::check_version(descriptor.version())?;
        validate::check_checksum(descriptor.checksum())?;
        config.verbose_println(&format!("   version {} and checksum look valid", version));
    }

    let rendered = match &args.template {
        Some(path) => render_file(path, &descriptor, config).await?,
        None => {
            config.progress("Rendering built-in cask template");
            descriptor.render()?
        }
    };

    log::info!("Rendered cask for {}", descriptor.download_url());
    config.success(&format!("Cask ready for Espanso {}", descriptor.version()));

    Ok(rendered)
}

fn build_descriptor(args: &Args) -> Result<FormulaDescriptor> {
    let mut builder = DescriptorBuilder::new();
    if let Some(version) = &args.release_version {
        builder = builder.version(version.as_str());
    }
    if let Some(sha256) = &args.sha256 {
        builder = builder.checksum(sha256.as_str());
    }
    builder.build()
}

async fn render_file(
    path: &Path,
    descriptor: &FormulaDescriptor,
    config: &RuntimeConfig,
) -> Result<String> {
    config.progress(&format!("Rendering template {}", path.display()));

    let template = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading template", path)?;

    for token in [VERSION_TOKEN, SHA256_TOKEN] {
        if !template.contains(token) {
            config.warn(&format!("{} has no {} placeholder", path.display(), token));
        }
    }

    cask::render_template(&template, descriptor.version(), descriptor.checksum())
}
