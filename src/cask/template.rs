//! Embedded cask template.

/// Literal version token as it appears in template text.
pub const VERSION_TOKEN: &str = "{{{VERSION}}}";

/// Literal checksum token as it appears in template text.
pub const SHA256_TOKEN: &str = "{{{SHA256}}}";

/// Homebrew cask for the universal macOS build.
pub const CASK_TEMPLATE: &str = r#"cask "espanso" do
  version "{{{VERSION}}}"
  url "https://github.com/espanso/espanso/releases/download/v{{{VERSION}}}/Espanso-Mac-Universal.zip"
  sha256 "{{{SHA256}}}"
  name "Espanso"
  desc "A Privacy-first, Cross-platform Text Expander"
  homepage "https://espanso.org/"
  app "Espanso.app"
  zap trash: "~/Library/Caches/espanso"
end
"#;
