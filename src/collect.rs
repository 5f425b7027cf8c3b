//! Frame collection - folder listings and horizontal strip slicing
//!
//! Both assembly pipelines start here: a directory of still images becomes an
//! ordered frame sequence, or a single strip image is sliced into equal-width
//! frames left to right.

use std::fs;
use std::path::Path;

use image::imageops::crop_imm;
use image::RgbaImage;

use crate::error::PackError;
use crate::sort::SortOrder;

/// File extensions the folder collector recognizes (matched case-insensitively)
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Check if a file name carries a recognized image extension.
///
/// Extension match only - file contents are never sniffed.
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// List the qualifying image file names in a directory, sorted by `order`.
pub fn list_image_names(dir: &Path, order: SortOrder) -> Result<Vec<String>, PackError> {
    if !dir.is_dir() {
        return Err(PackError::InvalidInput(format!("{} is not a directory", dir.display())));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_image_file(name) {
                names.push(name.to_string());
            }
        }
    }

    order.sort(&mut names);
    Ok(names)
}

/// Collect the frames of a folder of still images.
///
/// Qualifying files are decoded in sorted order and converted to RGBA
/// regardless of source format. An empty folder yields an empty sequence;
/// assembly rejects it downstream.
pub fn collect_folder(dir: &Path, order: SortOrder) -> Result<Vec<RgbaImage>, PackError> {
    let names = list_image_names(dir, order)?;

    let mut frames = Vec::with_capacity(names.len());
    for name in &names {
        frames.push(image::open(dir.join(name))?.to_rgba8());
    }
    Ok(frames)
}

/// Slice a horizontal strip image into equal-width frames.
///
/// When `frame_width` is omitted the strip's height is used, i.e. square
/// frames are assumed. Trailing pixels narrower than one frame are silently
/// dropped.
pub fn collect_strip(path: &Path, frame_width: Option<u32>) -> Result<Vec<RgbaImage>, PackError> {
    if !path.is_file() {
        return Err(PackError::InvalidInput(format!("{} is not a file", path.display())));
    }

    let strip = image::open(path)?.to_rgba8();

    let frame_width = frame_width.unwrap_or_else(|| strip.height());
    if frame_width == 0 {
        return Err(PackError::InvalidInput("frame width must be positive".to_string()));
    }

    let count = strip.width() / frame_width;
    if count == 0 {
        return Err(PackError::InvalidInput(format!(
            "strip {} ({} px wide) is narrower than one frame ({} px)",
            path.display(),
            strip.width(),
            frame_width
        )));
    }

    let frames = (0..count)
        .map(|i| crop_imm(&strip, i * frame_width, 0, frame_width, strip.height()).to_image())
        .collect();
    Ok(frames)
}
