extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn julia() -> Command {
    Command::cargo_bin("julia").unwrap()
}

#[test]
fn renders_a_small_tga() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.tga");
    julia()
        .arg("-o")
        .arg(&path)
        .arg("-s")
        .arg("4x3")
        .arg("-t")
        .arg("1")
        .assert()
        .success();

    let contents = fs::read(&path).unwrap();
    assert_eq!(contents.len(), 12 + 6 + 4 * 3 * 3);
    assert_eq!(contents[2], 2);
    assert_eq!(&contents[12..18], &[4, 0, 3, 0, 24, 0]);
    assert!(contents[18..]
        .chunks(3)
        .all(|t| t == [0, 0, 255] || t == [255, 255, 255]));
}

#[test]
fn renders_with_explicit_corners() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corners.tga");
    julia()
        .arg("--output")
        .arg(&path)
        .arg("--size")
        .arg("300x200")
        .arg("--leftlower")
        .arg("-1.5,-1.0")
        .arg("--rightupper")
        .arg("1.5,1.0")
        .assert()
        .success();

    let contents = fs::read(&path).unwrap();
    assert_eq!(contents.len(), 18 + 300 * 200 * 3);
    assert_eq!(&contents[12..16], &[44, 1, 200, 0]);
}

#[test]
fn renders_a_pnm() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.pnm");
    julia()
        .arg("-o")
        .arg(&path)
        .arg("-s")
        .arg("8x8")
        .arg("-f")
        .arg("pnm")
        .assert()
        .success();

    let contents = fs::read(&path).unwrap();
    assert!(contents.starts_with(b"P6"));
}

#[test]
fn rejects_a_malformed_size() {
    julia()
        .arg("-s")
        .arg("lots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_a_one_pixel_side() {
    julia()
        .arg("-s")
        .arg("1x100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 2 and 65535"));
}

#[test]
fn rejects_zero_threads() {
    julia()
        .arg("-t")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between 1"));
}

#[test]
fn rejects_an_inverted_domain() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inverted.tga");
    julia()
        .arg("-o")
        .arg(&path)
        .arg("-s")
        .arg("4x4")
        .arg("-l")
        .arg("1.0,1.0")
        .arg("-r")
        .arg("-1.0,-1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
    assert!(!path.exists());
}

#[test]
fn reports_an_unwritable_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.tga");
    julia()
        .arg("-o")
        .arg(&path)
        .arg("-s")
        .arg("4x4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
