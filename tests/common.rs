#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes a real, decodable image; the format follows the file extension.
pub fn create_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x ^ y) % 256) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

pub fn create_corrupt_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"\x89PNG\r\n\x1a\nthis is not really a png")
        .unwrap();
    path
}

/// Lays out images at several depths plus files that must be ignored.
pub fn create_nested_directory_structure(root: &Path) -> Vec<PathBuf> {
    let deep = root.join("albums").join("2024").join("summer");
    fs::create_dir_all(&deep).unwrap();

    let images = vec![
        create_test_image(root, "cover.png", 16, 16),
        create_test_image(&deep, "beach.JPG", 24, 12),
    ];

    File::create(root.join("readme.txt"))
        .unwrap()
        .write_all(b"not an image")
        .unwrap();
    create_test_image(&deep, "mixed.Jpg", 8, 8);

    images
}

pub fn webp_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}
