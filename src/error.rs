//! Error types for cask rendering.
//!
//! Every failure carries enough context to tell the user which input or
//! file caused it.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for cask operations
pub type Result<T> = std::result::Result<T, CaskError>;

/// The two externally supplied renderer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Release version, e.g. "2.2.1"
    Version,
    /// SHA-256 digest of the release archive
    Checksum,
}

impl InputKind {
    /// Name used in error messages and CLI diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Checksum => "checksum",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for all cask operations
#[derive(Error, Debug)]
pub enum CaskError {
    /// A required input was absent or empty
    #[error("missing required input: {input}")]
    MissingInput {
        /// Which input was missing
        input: InputKind,
    },

    /// An input failed strict format validation
    #[error("invalid {input}: {reason}")]
    InvalidInput {
        /// Which input was rejected
        input: InputKind,
        /// Reason for the rejection
        reason: String,
    },

    /// Writing user output failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// IO errors with the operation and path that failed
    #[error("{context} {}: {source}", .path.display())]
    Io {
        /// What was being attempted
        context: &'static str,
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl CaskError {
    /// Shorthand for [`CaskError::MissingInput`].
    pub fn missing(input: InputKind) -> Self {
        Self::MissingInput { input }
    }

    /// Check if this error was caused by bad user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingInput { .. } | Self::InvalidInput { .. })
    }
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Convert an IO error into [`CaskError::Io`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| CaskError::Io {
            context,
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_input() {
        let err = CaskError::missing(InputKind::Checksum);
        assert_eq!(err.to_string(), "missing required input: checksum");
        assert!(err.is_input_error());
    }

    #[test]
    fn fs_context_keeps_path() {
        let res: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = res
            .fs_context("reading template", Path::new("cask.rb"))
            .unwrap_err();
        assert_eq!(err.to_string(), "reading template cask.rb: gone");
        assert!(!err.is_input_error());
    }
}
