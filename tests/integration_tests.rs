mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use common::{create_corrupt_file, create_png};
use img_fit::{read_dimensions, Dimensions};
use predicates::prelude::*;

fn img_fit() -> Command {
    Command::cargo_bin("img-fit").unwrap()
}

#[test]
fn test_cli_help() {
    img_fit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-width"));
}

#[test]
fn test_cli_version() {
    img_fit().arg("--version").assert().success();
}

#[test]
fn test_missing_source_directory_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.child("images");

    img_fit()
        .arg("--source")
        .arg(missing.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Image directory not found"))
        .stdout(predicate::str::contains("Completed!").not());

    missing.assert(predicate::path::missing());
}

#[test]
fn test_batch_resizes_and_backs_up() {
    let temp = assert_fs::TempDir::new().unwrap();
    create_png(temp.path(), "wide.png", 400, 200);
    create_png(temp.path(), "small.png", 50, 50);

    img_fit()
        .args(["-w", "100", "-H", "100", "--source"])
        .arg(temp.path())
        .args(["wide.png", "small.png", "missing.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing: wide.png"))
        .stdout(predicate::str::contains("New dimensions: 100x50"))
        .stdout(predicate::str::contains("No resize needed"))
        .stdout(predicate::str::contains("File not found: missing.png"))
        .stdout(predicate::str::contains("Processed 2/3 files"));

    temp.child("backup/wide.png").assert(predicate::path::is_file());
    temp.child("backup/small.png").assert(predicate::path::is_file());
    temp.child("backup/missing.png").assert(predicate::path::missing());
    assert_eq!(
        read_dimensions(&temp.path().join("wide.png")).unwrap(),
        Dimensions::new(100, 50)
    );
}

#[test]
fn test_custom_backup_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let images = temp.child("images");
    images.create_dir_all().unwrap();
    create_png(images.path(), "a.png", 30, 20);
    let originals = temp.child("archive/originals");

    img_fit()
        .arg("--source")
        .arg(images.path())
        .arg("--backup")
        .arg(originals.path())
        .arg("a.png")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 1/1 files"));

    originals.child("a.png").assert(predicate::path::is_file());
    images.child("backup").assert(predicate::path::missing());
}

#[test]
fn test_backup_directory_equal_to_source_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    create_png(temp.path(), "Power.png", 2400, 1200);

    img_fit()
        .arg("--source")
        .arg(temp.path())
        .arg("--backup")
        .arg(temp.path().join("."))
        .arg("Power.png")
        .assert()
        .failure()
        .stdout(predicate::str::contains("is the image directory"))
        .stdout(predicate::str::contains("Processing").not());

    assert_eq!(
        read_dimensions(&temp.path().join("Power.png")).unwrap(),
        Dimensions::new(2400, 1200)
    );
}

#[test]
fn test_corrupt_file_is_rolled_back() {
    let temp = assert_fs::TempDir::new().unwrap();
    create_corrupt_file(temp.path(), "broken.png");

    img_fit()
        .arg("--source")
        .arg(temp.path())
        .arg("broken.png")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing broken.png"))
        .stdout(predicate::str::contains("Processed 0/1 files"));

    temp.child("broken.png").assert("fake png data");
}

#[test]
fn test_quiet_mode_keeps_errors_only() {
    let temp = assert_fs::TempDir::new().unwrap();
    create_png(temp.path(), "a.png", 30, 20);
    create_corrupt_file(temp.path(), "broken.png");

    img_fit()
        .arg("--quiet")
        .arg("--source")
        .arg(temp.path())
        .args(["a.png", "broken.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing").not())
        .stdout(predicate::str::contains("Error processing broken.png"));
}

#[test]
fn test_invalid_quality_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();

    img_fit()
        .args(["--quality", "0", "--source"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quality value"));
}

#[test]
fn test_zero_bound_is_rejected() {
    img_fit().args(["--max-width", "0"]).assert().failure();
}

#[test]
fn test_path_in_file_name_is_refused() {
    let temp = assert_fs::TempDir::new().unwrap();
    let images = temp.child("images");
    images.create_dir_all().unwrap();
    create_png(temp.path(), "outside.png", 30, 20);

    img_fit()
        .arg("--source")
        .arg(images.path())
        .arg("../outside.png")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 0/1 files"));

    images.child("backup/outside.png").assert(predicate::path::missing());
}
