//! Espanso cask generator.
//!
//! Renders the Homebrew cask for an Espanso macOS release and prints it on
//! stdout, ready to be committed to the tap.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match espanso_cask::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
