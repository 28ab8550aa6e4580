//! End-to-end tests driving the built binary against tempdir fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn slidegen() -> Command {
    Command::cargo_bin("slidegen").unwrap()
}

fn seed_carousel(root: &Path) {
    let images = root.join("images/carousel");
    fs::create_dir_all(&images).unwrap();
    fs::write(images.join("furnace-tuneup_2025.jpg"), "fake image").unwrap();
    fs::write(images.join("mini_split_install.png"), "fake image").unwrap();
    fs::write(images.join("readme.txt"), "not an image").unwrap();
}

#[test]
fn carousel_writes_manifest_and_reports_count() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());

    slidegen()
        .current_dir(tmp.path())
        .arg("carousel")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 slide(s) to carousel.json"));

    let json = fs::read_to_string(tmp.path().join("carousel.json")).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(
        entries[0]["src"],
        "/images/carousel/furnace-tuneup_2025.jpg"
    );
    assert_eq!(entries[0]["alt"], "Furnace Tune-Up");
    assert_eq!(entries[0]["caption"], "Furnace Tune-Up");
    assert_eq!(entries[0]["link"], "#services");
    assert_eq!(entries[1]["caption"], "Mini-Split Install");
}

#[test]
fn carousel_output_is_two_space_indented() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());

    slidegen()
        .current_dir(tmp.path())
        .arg("carousel")
        .assert()
        .success();

    let json = fs::read_to_string(tmp.path().join("carousel.json")).unwrap();
    assert!(json.starts_with("[\n  {\n    \"src\""));
}

#[test]
fn carousel_dry_run_prints_json_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());

    slidegen()
        .current_dir(tmp.path())
        .args(["carousel", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"caption\": \"Furnace Tune-Up\""));

    assert!(!tmp.path().join("carousel.json").exists());
}

#[test]
fn carousel_missing_images_root_fails() {
    let tmp = TempDir::new().unwrap();

    slidegen()
        .current_dir(tmp.path())
        .arg("carousel")
        .assert()
        .failure()
        .stderr(predicate::str::contains("images/carousel"));

    assert!(!tmp.path().join("carousel.json").exists());
}

#[test]
fn carousel_rejects_unknown_sort_mode() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());

    slidegen()
        .current_dir(tmp.path())
        .args(["carousel", "--sort", "size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sort"));
}

#[test]
fn carousel_creates_output_parent_directories() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());

    slidegen()
        .current_dir(tmp.path())
        .args(["carousel", "--output", "data/site/carousel.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote 2 slide(s) to data/site/carousel.json",
        ));

    assert!(tmp.path().join("data/site/carousel.json").exists());
}

#[test]
fn carousel_no_recursive_skips_subfolders() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());
    let nested = tmp.path().join("images/carousel/archive");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("old.jpg"), "fake image").unwrap();

    slidegen()
        .current_dir(tmp.path())
        .args(["carousel", "--no-recursive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 slide(s)"));

    slidegen()
        .current_dir(tmp.path())
        .arg("carousel")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 slide(s)"));
}

#[test]
fn carousel_reruns_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    seed_carousel(tmp.path());

    slidegen()
        .current_dir(tmp.path())
        .arg("carousel")
        .assert()
        .success();
    let first = fs::read(tmp.path().join("carousel.json")).unwrap();

    slidegen()
        .current_dir(tmp.path())
        .arg("carousel")
        .assert()
        .success();
    let second = fs::read(tmp.path().join("carousel.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn featured_creates_directories_and_writes_manifest() {
    let tmp = TempDir::new().unwrap();

    slidegen()
        .current_dir(tmp.path())
        .arg("featured")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote data/featured.json with 0 items.",
        ));

    assert!(tmp.path().join("images/featured").is_dir());
    let json = fs::read_to_string(tmp.path().join("data/featured.json")).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn featured_lists_images_with_title_cased_alt() {
    let tmp = TempDir::new().unwrap();
    let featured = tmp.path().join("images/featured");
    fs::create_dir_all(&featured).unwrap();
    fs::write(featured.join("cozy-fireplace.jpg"), "fake image").unwrap();
    fs::write(featured.join("attic_insulation.webp"), "fake image").unwrap();
    fs::write(featured.join("notes.txt"), "not an image").unwrap();

    slidegen()
        .current_dir(tmp.path())
        .arg("featured")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote data/featured.json with 2 items.",
        ));

    let json = fs::read_to_string(tmp.path().join("data/featured.json")).unwrap();
    let items: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(items[0]["src"], "images/featured/attic_insulation.webp");
    assert_eq!(items[0]["alt"], "Attic Insulation");
    assert_eq!(items[0]["caption"], "");
    assert_eq!(items[1]["alt"], "Cozy Fireplace");
}
