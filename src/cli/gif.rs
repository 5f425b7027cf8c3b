//! Gif command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::animation::{composite_frames, frame_delay_ms, render_gif};
use crate::collect::{collect_folder, collect_strip};
use crate::error::PackError;
use crate::sort::SortOrder;

use super::{error_exit_code, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Default output directory: `outputs/` next to the executable, falling back
/// to the working directory when the executable path is unavailable.
fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("outputs")))
        .unwrap_or_else(|| PathBuf::from("outputs"))
}

/// Execute the gif command
pub fn run_gif(
    input: &Path,
    output_dir: Option<&Path>,
    fps: u32,
    loop_count: u16,
    strip: bool,
    frame_width: Option<u32>,
    output_file_name: &str,
    reverse: bool,
) -> ExitCode {
    // Reject the wrong input shape before any decoding
    if strip && !input.is_file() {
        eprintln!(
            "Error: {} is not a file (strip mode expects a single strip image)",
            input.display()
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    if !strip && !input.is_dir() {
        eprintln!(
            "Error: {} is not a directory (folder mode expects a folder of images)",
            input.display()
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let output_file = match output_dir {
        Some(dir) => dir.join(output_file_name),
        None => default_output_dir().join(output_file_name),
    };

    match assemble(input, strip, frame_width, fps, loop_count, reverse, &output_file) {
        Ok(count) => {
            println!("Wrote {} frames to {}", count, output_file.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(error_exit_code(&err))
        }
    }
}

/// Collect, composite, and encode; returns the number of encoded frames.
fn assemble(
    input: &Path,
    strip: bool,
    frame_width: Option<u32>,
    fps: u32,
    loop_count: u16,
    reverse: bool,
    output_file: &Path,
) -> Result<usize, PackError> {
    let frames = if strip {
        collect_strip(input, frame_width)?
    } else {
        collect_folder(input, SortOrder::Lexicographic)?
    };
    if frames.is_empty() {
        return Err(PackError::EmptyInput(format!("no images found in {}", input.display())));
    }

    let duration_ms = frame_delay_ms(fps)?;
    let mut composited = composite_frames(&frames)?;
    // Reverse the composited list, not the input sequence
    if reverse {
        composited.reverse();
    }
    render_gif(&composited, duration_ms, loop_count, output_file)?;
    Ok(composited.len())
}
