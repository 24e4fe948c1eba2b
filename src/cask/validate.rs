//! Input format checks for strict mode.
//!
//! The renderer accepts any non-empty strings. These checks catch the usual
//! release mistakes (a `v`-prefixed tag, a truncated digest) before a bad
//! cask gets published.

use crate::error::{CaskError, InputKind, Result};

/// Length of a hex-encoded SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// Check that `version` is a bare semantic version.
pub fn check_version(version: &str) -> Result<semver::Version> {
    if version.is_empty() {
        return Err(CaskError::missing(InputKind::Version));
    }

    if version.starts_with('v') || version.starts_with('V') {
        return Err(invalid(
            InputKind::Version,
            format!(
                "'{}' has a tag prefix; the url already adds 'v', pass '{}'",
                version,
                &version[1..]
            ),
        ));
    }

    semver::Version::parse(version)
        .map_err(|e| invalid(InputKind::Version, format!("'{}' is not semver: {}", version, e)))
}

/// Check that `checksum` is a 64 character hex SHA-256 digest.
pub fn check_checksum(checksum: &str) -> Result<()> {
    if checksum.is_empty() {
        return Err(CaskError::missing(InputKind::Checksum));
    }

    if checksum.len() != SHA256_HEX_LEN {
        return Err(invalid(
            InputKind::Checksum,
            format!(
                "expected {} hex characters, got {}",
                SHA256_HEX_LEN,
                checksum.len()
            ),
        ));
    }

    hex::decode(checksum)
        .map(|_| ())
        .map_err(|e| invalid(InputKind::Checksum, format!("not hex: {}", e)))
}

fn invalid(input: InputKind, reason: String) -> CaskError {
    CaskError::InvalidInput { input, reason }
}
