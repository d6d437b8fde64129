//! Fixture helpers: small real images encoded with the `image` crate, plus non-image files.

#![allow(dead_code)]

use image::{RgbImage, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use imagesize::{CompareOp, Comparison, MatchRecord, ScanOpts};

/// Write a `width` x `height` image; the format follows the extension (png, jpg, gif).
pub fn write_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("gif") => RgbaImage::new(width, height).save(path).unwrap(),
        _ => RgbImage::new(width, height).save(path).unwrap(),
    }
}

pub fn write_text(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Tree used by most scan tests:
///
/// ```text
/// root/tall.png        1x1024
/// root/short.png       1x500
/// root/notes.txt       text
/// root/fake.png        text with an image extension
/// root/sub/tall.jpg    1x1024
/// root/sub/small.gif   4x4
/// ```
pub fn create_image_tree(base: &Path) -> PathBuf {
    let root = base.join("root");
    write_image(&root.join("tall.png"), 1, 1024);
    write_image(&root.join("short.png"), 1, 500);
    write_text(&root.join("notes.txt"), "not an image\n");
    write_text(&root.join("fake.png"), "definitely not a png");
    write_image(&root.join("sub/tall.jpg"), 1, 1024);
    write_image(&root.join("sub/small.gif"), 4, 4);
    root
}

/// `base/r/a/a/.../a/x.png` (1x1024) with up to `depth` single-letter levels, kept under PATH_MAX.
/// Returns the chain root and the image path.
pub fn create_deep_chain(base: &Path, depth: usize) -> (PathBuf, PathBuf) {
    const PATH_BUDGET: usize = 4000;
    let root = base.join("r");
    let room = PATH_BUDGET.saturating_sub(root.as_os_str().len()) / 2;
    let mut dir = root.clone();
    for _ in 0..depth.min(room) {
        dir.push("a");
    }
    let file = dir.join("x.png");
    write_image(&file, 1, 1024);
    (root, file)
}

pub fn taller_than(threshold: u32) -> ScanOpts {
    ScanOpts::new(Comparison::new(CompareOp::Taller, threshold, false))
}

pub fn paths(records: &[MatchRecord]) -> Vec<PathBuf> {
    records.iter().map(|r| r.path.clone()).collect()
}
