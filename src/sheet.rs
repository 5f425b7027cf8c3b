//! Sprite sheet assembly - fit, center, and concatenate frames in one row
//!
//! Each source image is normalized to a fixed slot size (aspect-preserving,
//! never upscaled) and pasted centered into its slot. The source image's own
//! alpha is kept as-is; there is no masking or blending against the canvas.

use std::fs;
use std::path::Path;

use image::imageops::{replace, resize, FilterType};
use image::RgbaImage;

use crate::error::PackError;

/// Scale dimensions to fit within a bounding box, preserving aspect ratio.
///
/// Thumbnail semantics: an image that already fits is returned unchanged,
/// never upscaled.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale =
        f64::min(max_width as f64 / width as f64, max_height as f64 / height as f64);
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (w, h)
}

/// Lay images out left to right as a single-row sprite sheet.
///
/// The canvas is `frame_width * N` by `frame_height`, fully transparent. Each
/// image is resized to fit its slot (Lanczos3) and centered with floor
/// offsets, so odd remainders bias one pixel left/top.
pub fn render_sheet(
    images: &[RgbaImage],
    frame_width: u32,
    frame_height: u32,
) -> Result<RgbaImage, PackError> {
    if images.is_empty() {
        return Err(PackError::EmptyInput("no images to lay out".to_string()));
    }
    if frame_width == 0 || frame_height == 0 {
        return Err(PackError::InvalidInput("frame size must be positive".to_string()));
    }

    let count = images.len() as u32;
    let mut sheet = RgbaImage::new(frame_width * count, frame_height);

    for (index, image) in images.iter().enumerate() {
        let (w, h) = fit_within(image.width(), image.height(), frame_width, frame_height);
        let resized;
        let cell: &RgbaImage = if (w, h) == image.dimensions() {
            image
        } else {
            resized = resize(image, w, h, FilterType::Lanczos3);
            &resized
        };

        let x = index as i64 * frame_width as i64 + ((frame_width - w) / 2) as i64;
        let y = ((frame_height - h) / 2) as i64;
        replace(&mut sheet, cell, x, y);
    }

    Ok(sheet)
}

/// Output file name for a sheet of `n` frames, e.g. `sprite_sheet_12f.png`.
pub fn sheet_file_name(n: usize) -> String {
    format!("sprite_sheet_{}f.png", n)
}

/// Save a sheet as PNG, creating parent directories if needed.
pub fn save_sheet(sheet: &RgbaImage, path: &Path) -> Result<(), PackError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    sheet.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_fit_within_no_upscale() {
        assert_eq!(fit_within(300, 400, 500, 500), (300, 400));
        assert_eq!(fit_within(10, 10, 500, 500), (10, 10));
        assert_eq!(fit_within(500, 500, 500, 500), (500, 500));
    }

    #[test]
    fn test_fit_within_downscales_preserving_aspect() {
        assert_eq!(fit_within(1000, 500, 500, 500), (500, 250));
        assert_eq!(fit_within(500, 1000, 500, 500), (250, 500));
        assert_eq!(fit_within(800, 600, 400, 400), (400, 300));
    }

    #[test]
    fn test_fit_within_never_exceeds_bounds() {
        let (w, h) = fit_within(1333, 777, 500, 500);
        assert!(w <= 500 && h <= 500);
        let (w, h) = fit_within(3, 1000, 500, 500);
        assert!(w >= 1, "degenerate aspect ratios must not collapse to zero: {}x{}", w, h);
    }

    #[test]
    fn test_render_sheet_empty_is_empty_input() {
        let err = render_sheet(&[], 4, 4).unwrap_err();
        assert!(matches!(err, PackError::EmptyInput(_)));
    }

    #[test]
    fn test_render_sheet_dimensions() {
        let images = vec![solid(2, 2, RED), solid(2, 2, GREEN), solid(2, 2, RED)];
        let sheet = render_sheet(&images, 4, 4).unwrap();
        assert_eq!(sheet.dimensions(), (12, 4));
    }

    #[test]
    fn test_render_sheet_centers_with_floor_offsets() {
        // 2x2 image in a 4x4 slot: offset (1, 1)
        let sheet = render_sheet(&[solid(2, 2, RED)], 4, 4).unwrap();
        assert_eq!(*sheet.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*sheet.get_pixel(1, 1), RED);
        assert_eq!(*sheet.get_pixel(2, 2), RED);
        assert_eq!(*sheet.get_pixel(3, 3), TRANSPARENT);

        // 3x3 image in a 4x4 slot: odd remainder biases left/top, offset (0, 0)
        let sheet = render_sheet(&[solid(3, 3, GREEN)], 4, 4).unwrap();
        assert_eq!(*sheet.get_pixel(0, 0), GREEN);
        assert_eq!(*sheet.get_pixel(2, 2), GREEN);
        assert_eq!(*sheet.get_pixel(3, 3), TRANSPARENT);
    }

    #[test]
    fn test_render_sheet_places_slots_left_to_right() {
        let images = vec![solid(4, 4, RED), solid(4, 4, GREEN)];
        let sheet = render_sheet(&images, 4, 4).unwrap();
        assert_eq!(*sheet.get_pixel(0, 0), RED);
        assert_eq!(*sheet.get_pixel(4, 0), GREEN);
    }

    #[test]
    fn test_render_sheet_downscales_oversized_images() {
        // 8x4 into a 4x4 slot: fits to 4x2, centered at y = 1
        let sheet = render_sheet(&[solid(8, 4, RED)], 4, 4).unwrap();
        assert_eq!(*sheet.get_pixel(0, 0), TRANSPARENT);
        assert!(sheet.get_pixel(0, 1).0[0] > 200);
        assert!(sheet.get_pixel(3, 2).0[0] > 200);
        assert_eq!(*sheet.get_pixel(0, 3), TRANSPARENT);
    }

    #[test]
    fn test_render_sheet_preserves_source_alpha() {
        // Direct paste, no blending: semi-transparent pixels stay semi-transparent
        let translucent = solid(4, 4, Rgba([255, 0, 0, 128]));
        let sheet = render_sheet(&[translucent], 4, 4).unwrap();
        assert_eq!(sheet.get_pixel(0, 0).0[3], 128);
    }

    #[test]
    fn test_sheet_file_name_encodes_count() {
        assert_eq!(sheet_file_name(3), "sprite_sheet_3f.png");
        assert_eq!(sheet_file_name(12), "sprite_sheet_12f.png");
    }

    #[test]
    fn test_save_sheet_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/sheet.png");

        let sheet = render_sheet(&[solid(2, 2, RED)], 4, 4).unwrap();
        save_sheet(&sheet, &path).unwrap();

        let read_back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read_back.dimensions(), (4, 4));
    }
}
