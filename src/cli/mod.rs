//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for the two assembly commands.

mod gif;
mod sheet;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::PackError;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Map an assembly error to the process exit code.
pub(crate) fn error_exit_code(err: &PackError) -> u8 {
    match err {
        PackError::InvalidInput(_) => EXIT_INVALID_ARGS,
        _ => EXIT_ERROR,
    }
}

/// Framepack - assemble image sequences into animated GIFs and sprite sheets
#[derive(Parser)]
#[command(name = "framepack")]
#[command(about = "Framepack - assemble image sequences into animated GIFs and sprite sheets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble a folder of images or a horizontal strip into an animated GIF
    Gif {
        /// Folder of images, or a strip image file with --strip
        input: PathBuf,

        /// Directory for the output GIF (default: outputs/ next to the executable)
        output_dir: Option<PathBuf>,

        /// Frames per second
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,

        /// Number of times to loop the animation (0 = loop forever)
        #[arg(long = "loop", default_value = "0")]
        loop_count: u16,

        /// Treat the input as a horizontal strip of frames
        #[arg(long)]
        strip: bool,

        /// Width of each frame in the strip (default: the strip's height,
        /// i.e. square frames)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        frame_width: Option<u32>,

        /// Output file name
        #[arg(long, default_value = "output.gif")]
        output_file_name: String,

        /// Encode the frames in reverse order
        #[arg(long)]
        reverse: bool,
    },

    /// Lay a folder of images out as a single-row sprite sheet
    Sheet {
        /// Folder of images; the sheet is written back into it
        input_dir: PathBuf,

        /// Width of each sheet slot in pixels
        #[arg(long, default_value = "500", value_parser = clap::value_parser!(u32).range(1..))]
        frame_width: u32,

        /// Height of each sheet slot in pixels
        #[arg(long, default_value = "500", value_parser = clap::value_parser!(u32).range(1..))]
        frame_height: u32,
    },
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gif {
            input,
            output_dir,
            fps,
            loop_count,
            strip,
            frame_width,
            output_file_name,
            reverse,
        } => gif::run_gif(
            &input,
            output_dir.as_deref(),
            fps,
            loop_count,
            strip,
            frame_width,
            &output_file_name,
            reverse,
        ),
        Commands::Sheet { input_dir, frame_width, frame_height } => {
            sheet::run_sheet(&input_dir, frame_width, frame_height)
        }
    }
}
