use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn qrmint(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qrmint").expect("binary built");
    cmd.current_dir(cwd)
        .env_clear()
        // Plain log lines so assertions can match on message text
        .env("QRMINT_LOG_COLOR", "0");
    cmd
}

fn png_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("output directory readable")
        .map(|entry| entry.unwrap().path())
        .collect()
}

#[test]
fn valid_url_writes_one_decodable_png() {
    let tmp = TempDir::new().unwrap();

    qrmint(tmp.path())
        .args(["--url", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL is valid: https://example.com"))
        .stdout(predicate::str::contains("QR code generation run completed"));

    let files = png_files(&tmp.path().join("qr_codes"));
    assert_eq!(files.len(), 1, "expected exactly one artifact");

    let name = files[0].file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("QRCode_")
        .and_then(|rest| rest.strip_suffix(".png"))
        .unwrap_or_else(|| panic!("unexpected artifact name {name}"));
    assert_eq!(stamp.len(), 14, "timestamp is YYYYMMDDHHMMSS");
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));

    // The written image decodes back to the input URL
    let luma = image::open(&files[0]).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(luma);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    let (_, content) = grids[0].decode().unwrap();
    assert_eq!(content, "https://example.com");
}

#[test]
fn invalid_url_logs_error_and_still_exits_zero() {
    let tmp = TempDir::new().unwrap();

    qrmint(tmp.path())
        .args(["--url", "not-a-url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid URL provided: not-a-url"))
        .stdout(predicate::str::contains("QR code generation run completed"));

    // The directory is ensured before validation runs, but no artifact
    // may be written for a rejected URL.
    let dir = tmp.path().join("qr_codes");
    assert!(dir.is_dir());
    assert!(png_files(&dir).is_empty());
}

#[test]
fn directory_collision_with_file_exits_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("qr_codes"), b"not a directory").unwrap();

    qrmint(tmp.path())
        .args(["--url", "https://example.com"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to create directory"));
}

#[test]
fn pre_existing_directory_is_left_undisturbed() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("qr_codes");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("keep.txt"), b"precious").unwrap();

    qrmint(tmp.path())
        .args(["--url", "https://example.com"])
        .assert()
        .success();

    assert_eq!(fs::read(dir.join("keep.txt")).unwrap(), b"precious");
}

#[test]
fn environment_overrides_directory_and_colors() {
    let tmp = TempDir::new().unwrap();

    qrmint(tmp.path())
        .env("QR_CODE_DIR", "custom_codes")
        .env("FILL_COLOR", "red")
        .env("BACK_COLOR", "white")
        .args(["--url", "https://example.com"])
        .assert()
        .success();

    let files = png_files(&tmp.path().join("custom_codes"));
    assert_eq!(files.len(), 1);

    let rgb = image::open(&files[0]).unwrap().to_rgb8();
    assert_eq!(*rgb.get_pixel(0, 0), image::Rgb([255u8, 255, 255]));
    assert!(
        rgb.pixels().any(|p| *p == image::Rgb([255u8, 0, 0])),
        "expected red modules from FILL_COLOR"
    );
}

#[test]
fn cli_output_dir_takes_precedence_over_environment() {
    let tmp = TempDir::new().unwrap();

    qrmint(tmp.path())
        .env("QR_CODE_DIR", "env_dir")
        .args(["--url", "https://example.com", "--output-dir", "cli_dir"])
        .assert()
        .success();

    assert_eq!(png_files(&tmp.path().join("cli_dir")).len(), 1);
    assert!(!tmp.path().join("env_dir").exists());
}

#[test]
fn unknown_configured_color_fails_startup() {
    let tmp = TempDir::new().unwrap();

    qrmint(tmp.path())
        .env("FILL_COLOR", "notacolor")
        .args(["--url", "https://example.com"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown color 'notacolor'"));

    assert!(!tmp.path().join("qr_codes").exists());
}

#[test]
fn config_file_sets_output_options() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("qrmint.toml"),
        "[output]\ndirectory = \"from_file\"\nfill_color = \"black\"\n",
    )
    .unwrap();

    qrmint(tmp.path())
        .args(["--url", "https://example.com"])
        .assert()
        .success();

    assert_eq!(png_files(&tmp.path().join("from_file")).len(), 1);
}
