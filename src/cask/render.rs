//! Cask template rendering.
//!
//! Substitutes the version and checksum into a cask template. Only the two
//! literal tokens are touched; every other byte of the template is copied
//! through unchanged.

use super::template::{CASK_TEMPLATE, SHA256_TOKEN, VERSION_TOKEN};
use crate::error::{CaskError, InputKind, Result};

/// Render the embedded Espanso cask.
///
/// # Errors
/// [`CaskError::MissingInput`] if either input is empty.
pub fn render(version: &str, checksum: &str) -> Result<String> {
    render_template(CASK_TEMPLATE, version, checksum)
}

/// Render an arbitrary cask template.
///
/// Every `{{{VERSION}}}` and `{{{SHA256}}}` occurrence is replaced in a single
/// left-to-right pass, so inserted values are never scanned again. Any other
/// `{{...}}` text in the template is left as is.
///
/// Input formats are not checked here. See [`super::validate`].
///
/// # Errors
/// [`CaskError::MissingInput`] if `version` or `checksum` is empty.
pub fn render_template(template: &str, version: &str, checksum: &str) -> Result<String> {
    if version.is_empty() {
        return Err(CaskError::missing(InputKind::Version));
    }
    if checksum.is_empty() {
        return Err(CaskError::missing(InputKind::Checksum));
    }

    let substitutions = [(VERSION_TOKEN, version), (SHA256_TOKEN, checksum)];

    let mut rendered = String::with_capacity(template.len() + version.len() + checksum.len());
    let mut rest = template;
    let mut replaced = 0usize;

    loop {
        let next = substitutions
            .iter()
            .filter_map(|&(token, value)| rest.find(token).map(|at| (at, token, value)))
            .min_by_key(|&(at, _, _)| at);

        match next {
            Some((at, token, value)) => {
                rendered.push_str(&rest[..at]);
                rendered.push_str(value);
                rest = &rest[at + token.len()..];
                replaced += 1;
            }
            None => {
                rendered.push_str(rest);
                break;
            }
        }
    }

    log::debug!(
        "Rendered cask template ({} placeholders) with version={} sha256={}",
        replaced,
        version,
        checksum
    );

    Ok(rendered)
}
