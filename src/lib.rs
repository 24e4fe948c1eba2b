//! Homebrew cask generation for Espanso releases
//!
//! This library renders the cask descriptor that publishes the universal
//! macOS build of Espanso:
//! - [`cask`] - descriptor model, template, and renderer
//! - [`cli`] - the `espanso_cask` command line front end
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cask;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use cask::{DescriptorBuilder, FormulaDescriptor, render, render_template};
pub use error::{CaskError, InputKind, Result};
