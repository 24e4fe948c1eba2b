//! End-to-end tests for the `espanso_cask` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

const SHA: &str = "7c4a8d09ca3762af61e59520943dc26494f8941b7c4a8d09ca3762af61e59520";

fn cask() -> Command {
    let mut cmd = Command::cargo_bin("espanso_cask").unwrap();
    cmd.env_remove("ESPANSO_CASK_VERSION")
        .env_remove("ESPANSO_CASK_SHA256");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn prints_cask_on_stdout() {
    cask()
        .args(["--release-version", "2.2.1", "--sha256", SHA])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  url \"https://github.com/espanso/espanso/releases/download/v2.2.1/Espanso-Mac-Universal.zip\"\n",
        ))
        .stdout(predicate::str::contains(format!("  sha256 \"{SHA}\"\n")))
        .stdout(predicate::str::ends_with("end\n"));
}

#[test]
fn reads_inputs_from_environment() {
    cask()
        .env("ESPANSO_CASK_VERSION", "2.1.8")
        .env("ESPANSO_CASK_SHA256", SHA)
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("  version \"2.1.8\"\n"));
}

#[test]
fn missing_checksum_fails_without_output() {
    cask()
        .args(["--release-version", "2.2.1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing required input: checksum"));
}

#[test]
fn empty_version_fails_without_output() {
    cask()
        .args(["--release-version", "", "--sha256", SHA])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing required input: version"));
}

#[test]
fn strict_rejects_short_checksum() {
    cask()
        .args(["--release-version", "2.2.1", "--sha256", "abc123", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid checksum"));
}

#[test]
fn strict_rejects_tag_prefix() {
    cask()
        .args(["--release-version", "v2.2.1", "--sha256", SHA, "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid version"));
}

#[test]
fn renders_custom_template_file() {
    cask()
        .args(["--release-version", "2.2.1", "--sha256", SHA, "--template"])
        .arg(fixture("formula_template.rb"))
        .assert()
        .success()
        .stdout(predicate::str::contains("  version \"2.2.1\"\n\n"))
        .stdout(predicate::str::contains("download/v#{version}/"))
        .stdout(predicate::str::contains("{{{").not());
}

#[test]
fn warns_when_template_lacks_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.rb");
    std::fs::write(&path, "version \"{{{VERSION}}}\"\n").unwrap();

    cask()
        .args(["--release-version", "2.2.1", "--sha256", SHA, "--template"])
        .arg(&path)
        .assert()
        .success()
        .stdout("version \"2.2.1\"\n")
        .stderr(predicate::str::contains("has no {{{SHA256}}} placeholder"));
}

#[test]
fn unreadable_template_reports_path() {
    cask()
        .args([
            "--release-version",
            "2.2.1",
            "--sha256",
            SHA,
            "--template",
            "does/not/exist.rb",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading template does/not/exist.rb"));
}

#[test]
fn custom_template_keeps_non_placeholder_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotated.rb");
    std::fs::write(
        &path,
        "# {{!-- keep --}} \\{{raw}}\nversion \"{{{VERSION}}}\"\nsha256 \"{{{SHA256}}}\"\n",
    )
    .unwrap();

    cask()
        .args(["--release-version", "2.2.1", "--sha256", "{{oops}}", "--template"])
        .arg(&path)
        .assert()
        .success()
        .stdout("# {{!-- keep --}} \\{{raw}}\nversion \"2.2.1\"\nsha256 \"{{oops}}\"\n");
}
