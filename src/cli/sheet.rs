//! Sheet command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::collect::collect_folder;
use crate::error::PackError;
use crate::sheet::{render_sheet, save_sheet, sheet_file_name};
use crate::sort::SortOrder;

use super::{error_exit_code, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the sheet command
pub fn run_sheet(input_dir: &Path, frame_width: u32, frame_height: u32) -> ExitCode {
    if !input_dir.is_dir() {
        eprintln!("Error: {} is not a directory", input_dir.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    match assemble(input_dir, frame_width, frame_height) {
        Ok(path) => {
            println!("Wrote {}", path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(error_exit_code(&err))
        }
    }
}

/// Collect, lay out, and save; returns the written sheet path.
fn assemble(input_dir: &Path, frame_width: u32, frame_height: u32) -> Result<PathBuf, PackError> {
    let images = collect_folder(input_dir, SortOrder::Natural)?;
    if images.is_empty() {
        return Err(PackError::EmptyInput(format!(
            "no images found in {}",
            input_dir.display()
        )));
    }

    let sheet = render_sheet(&images, frame_width, frame_height)?;
    let path = input_dir.join(sheet_file_name(images.len()));
    save_sheet(&sheet, &path)?;
    Ok(path)
}
