//! Animation assembly - canvas compositing and GIF encoding
//!
//! Every output frame is a fresh transparent canvas, sized to the first
//! frame, with the source frame alpha-composited at the origin. That keeps
//! output dimensions uniform and the fill consistently transparent even when
//! source frames differ in size.

use std::fs;
use std::path::Path;

use gif::{DisposalMethod, Encoder, Frame, Repeat};
use image::imageops::overlay;
use image::RgbaImage;

use crate::error::PackError;

/// Quantization speed for `Frame::from_rgba_speed` (1 = slowest/best, 30 =
/// fastest). Frames are quantized independently, with no inter-frame diffing.
const QUANT_SPEED: i32 = 10;

/// Convert frames-per-second to a per-frame duration in whole milliseconds.
///
/// Truncating division, so fps 10 gives 100 ms and fps 3 gives 333 ms.
pub fn frame_delay_ms(fps: u32) -> Result<u32, PackError> {
    if fps == 0 {
        return Err(PackError::InvalidInput("fps must be positive".to_string()));
    }
    Ok(1000 / fps)
}

/// Composite each frame onto a transparent canvas sized to the first frame.
///
/// The frame's own alpha channel acts as the paste mask: transparent source
/// pixels leave the canvas transparent rather than frame-colored. Frames
/// larger than the canvas are clipped at its bounds.
pub fn composite_frames(frames: &[RgbaImage]) -> Result<Vec<RgbaImage>, PackError> {
    let first = frames
        .first()
        .ok_or_else(|| PackError::EmptyInput("no frames to composite".to_string()))?;

    // RgbaImage::new zero-fills, i.e. fully transparent
    let canvas = RgbaImage::new(first.width(), first.height());

    let mut composited = Vec::with_capacity(frames.len());
    for frame in frames {
        let mut composed = canvas.clone();
        overlay(&mut composed, frame, 0, 0);
        composited.push(composed);
    }
    Ok(composited)
}

/// Encode frames as an animated GIF at `path`.
///
/// A `loop_count` of 0 repeats forever; N > 0 repeats N times. Every frame
/// carries the given duration (stored in centiseconds, floored, minimum one)
/// and restore-to-background disposal so players clear each frame before
/// drawing the next. The file is encoded fully in memory and written in one
/// shot, so a mid-encode failure never leaves a truncated artifact.
pub fn render_gif(
    frames: &[RgbaImage],
    duration_ms: u32,
    loop_count: u16,
    path: &Path,
) -> Result<(), PackError> {
    let first = frames
        .first()
        .ok_or_else(|| PackError::EmptyInput("no frames to encode".to_string()))?;

    let (width, height) = frame_dimensions(first)?;
    if frames.iter().any(|f| f.dimensions() != first.dimensions()) {
        return Err(PackError::InvalidInput(
            "all frames must share the same dimensions".to_string(),
        ));
    }

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // GIF delays are in centiseconds; anything below 10 ms clamps to 1
    let delay_cs = (duration_ms / 10).max(1) as u16;
    let repeat = if loop_count == 0 { Repeat::Infinite } else { Repeat::Finite(loop_count) };

    let mut buf = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buf, width, height, &[])?;
        encoder.set_repeat(repeat)?;
        for image in frames {
            let mut pixels = image.as_raw().clone();
            let mut frame = Frame::from_rgba_speed(width, height, &mut pixels, QUANT_SPEED);
            frame.delay = delay_cs;
            frame.dispose = DisposalMethod::Background;
            encoder.write_frame(&frame)?;
        }
    }
    fs::write(path, &buf)?;

    Ok(())
}

fn frame_dimensions(frame: &RgbaImage) -> Result<(u16, u16), PackError> {
    let clamp = |n: u32| {
        u16::try_from(n).map_err(|_| {
            PackError::InvalidInput(format!("frame dimension {} exceeds the GIF limit of 65535", n))
        })
    };
    Ok((clamp(frame.width())?, clamp(frame.height())?))
}
