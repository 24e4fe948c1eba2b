//! Formula descriptor and its builder.

use super::render;
use crate::error::{CaskError, InputKind, Result};

/// Display name shown by `brew info`.
pub const DISPLAY_NAME: &str = "Espanso";

/// One-line description.
pub const DESCRIPTION: &str = "A Privacy-first, Cross-platform Text Expander";

/// Project homepage.
pub const HOMEPAGE: &str = "https://espanso.org/";

/// Application bundle installed into `/Applications`.
pub const APP_BUNDLE_NAME: &str = "Espanso.app";

/// Paths removed by `brew uninstall --zap`.
pub const CLEANUP_PATHS: &[&str] = &["~/Library/Caches/espanso"];

const RELEASES_URL: &str = "https://github.com/espanso/espanso/releases/download";
const ARCHIVE_NAME: &str = "Espanso-Mac-Universal.zip";

/// A single release's cask descriptor.
///
/// Only `version` and `checksum` vary between releases. The download URL is
/// derived from the version, so the tag in the URL always matches it.
///
/// # Examples
///
/// ```
/// use espanso_cask::cask::DescriptorBuilder;
///
/// # fn example() -> espanso_cask::Result<()> {
/// let descriptor = DescriptorBuilder::new()
///     .version("2.2.1")
///     .checksum("0".repeat(64))
///     .build()?;
///
/// assert_eq!(
///     descriptor.download_url(),
///     "https://github.com/espanso/espanso/releases/download/v2.2.1/Espanso-Mac-Universal.zip"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaDescriptor {
    version: String,
    checksum: String,
}

impl FormulaDescriptor {
    /// Returns the release version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the SHA-256 of the release archive.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Returns the archive URL for this version.
    pub fn download_url(&self) -> String {
        format!("{}/v{}/{}", RELEASES_URL, self.version, ARCHIVE_NAME)
    }

    /// Returns the name shown by `brew info`.
    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    /// Returns the one-line description.
    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Returns the project homepage.
    pub fn homepage(&self) -> &'static str {
        HOMEPAGE
    }

    /// Returns the installed application bundle name.
    pub fn app_bundle_name(&self) -> &'static str {
        APP_BUNDLE_NAME
    }

    /// Returns the paths removed on zap uninstall.
    pub fn cleanup_paths(&self) -> &'static [&'static str] {
        CLEANUP_PATHS
    }

    /// Renders the embedded cask template for this descriptor.
    pub fn render(&self) -> Result<String> {
        render::render(&self.version, &self.checksum)
    }
}

/// Builder for [`FormulaDescriptor`].
///
/// Both inputs are required. [`build`](Self::build) reports the first one
/// that is absent or empty, version before checksum.
#[derive(Debug, Default)]
pub struct DescriptorBuilder {
    version: Option<String>,
    checksum: Option<String>,
}

impl DescriptorBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the release version.
    ///
    /// # Required
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the archive checksum.
    ///
    /// # Required
    pub fn checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    /// Builds the descriptor.
    ///
    /// # Errors
    ///
    /// [`CaskError::MissingInput`] if `version` or `checksum` is unset or empty.
    pub fn build(self) -> Result<FormulaDescriptor> {
        let version = require(self.version, InputKind::Version)?;
        let checksum = require(self.checksum, InputKind::Checksum)?;

        Ok(FormulaDescriptor { version, checksum })
    }
}

fn require(value: Option<String>, input: InputKind) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CaskError::missing(input)),
    }
}
