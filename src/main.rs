//! Framepack - command-line tool for assembling image sequences into
//! animated GIFs and sprite sheets

use std::process::ExitCode;

use framepack::cli;

fn main() -> ExitCode {
    cli::run()
}
