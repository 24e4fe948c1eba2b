//! Homebrew cask generation for Espanso macOS releases.
//!
//! A release produces one cask descriptor: the fixed template with the
//! release version and archive checksum substituted in.
//!
//! # Example
//!
//! ```
//! use espanso_cask::cask;
//!
//! # fn example() -> espanso_cask::Result<()> {
//! let rb = cask::render("2.2.1", &"0".repeat(64))?;
//! assert!(rb.contains("version \"2.2.1\""));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`template`] - Embedded cask template and placeholder tokens
//! - [`descriptor`] - [`FormulaDescriptor`] and its builder
//! - [`render`](mod@render) - Placeholder substitution
//! - [`validate`] - Optional format checks used by `--strict`

pub mod descriptor;
pub mod render;
pub mod template;
pub mod validate;

pub use descriptor::{DescriptorBuilder, FormulaDescriptor};
pub use render::{render, render_template};
