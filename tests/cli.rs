use assert_cmd::prelude::*;
use predicates::prelude::*;
use rgbseam::{load_image, save_image, Raster};
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn gradient(height: usize, width: usize) -> Raster {
    let mut image = Raster::new(height, width).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 37 + y * 11) % 256) as u8;
            image.set_pixel(y, x, v, 255 - v, v / 2);
        }
    }
    image
}

fn rgbseam() -> Command {
    Command::cargo_bin("rgbseam").unwrap()
}

fn write_input(dir: &Path, name: &str, image: &Raster) -> String {
    let path = dir.join(name);
    save_image(image, &path).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn carves_a_bare_raster() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.bin", &gradient(6, 10));
    let output = dir.path().join("out.bin");

    rgbseam()
        .args(&[input.as_str(), output.to_str().unwrap(), "--seams", "4"])
        .assert()
        .success();

    let carved = load_image(&output).unwrap();
    assert_eq!((carved.height(), carved.width()), (6, 6));
}

#[test]
fn carves_a_png_to_a_width() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.png", &gradient(5, 9));
    let output = dir.path().join("out.png");

    rgbseam()
        .args(&[input.as_str(), output.to_str().unwrap(), "-w", "7"])
        .assert()
        .success();

    let carved = load_image(&output).unwrap();
    assert_eq!((carved.height(), carved.width()), (5, 7));
}

#[test]
fn writes_the_energy_map() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.bin", &gradient(4, 4));
    let output = dir.path().join("out.bin");
    let energy = dir.path().join("energy.png");

    rgbseam()
        .args(&[
            input.as_str(),
            output.to_str().unwrap(),
            "-n",
            "1",
            "--energy",
            energy.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(energy.exists());
    assert_eq!(load_image(&energy).unwrap().width(), 4);
}

#[test]
fn too_many_seams_is_an_error() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.bin", &gradient(3, 3));
    let output = dir.path().join("out.bin");

    rgbseam()
        .args(&[input.as_str(), output.to_str().unwrap(), "-n", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot remove 3 seams"));
    assert!(!output.exists());
}

#[test]
fn failure_is_reported_once() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.bin", &gradient(3, 3));
    let output = dir.path().join("out.bin");

    let out = rgbseam()
        .args(&[input.as_str(), output.to_str().unwrap(), "-n", "5"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("cannot remove 5 seams").count(), 1, "{}", stderr);
}

#[test]
fn default_seam_count_needs_a_wide_image() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.bin", &gradient(2, 20));
    let output = dir.path().join("out.bin");

    rgbseam()
        .args(&[input.as_str(), output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remove 200 seams"));
}

#[test]
fn seams_and_width_conflict() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.bin", &gradient(3, 6));
    let output = dir.path().join("out.bin");

    rgbseam()
        .args(&[input.as_str(), output.to_str().unwrap(), "-n", "1", "-w", "4"])
        .assert()
        .failure();
}

#[test]
fn missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.bin");

    rgbseam()
        .args(&["no-such-file.bin", output.to_str().unwrap(), "-n", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("reading no-such-file.bin"));
}
