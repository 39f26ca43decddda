mod message;
mod outdir;
mod tool;

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use crate::message::Message;
use crate::outdir::OutputDir;
pub use crate::tool::{Sharp, ToolOutput, ToolRunner};

/// Usage line reported to the caller when the arguments do not parse.
pub const USAGE: &str = "Usage: splat-gen <input_image> <output_dir>";

#[derive(Parser, Debug)]
#[command(about = "Generate a 3D Gaussian splat from an image using SHARP")]
struct Cli {
    /// Image to reconstruct
    input_image: PathBuf,

    /// Directory the generated .ply splat is written to (created if missing)
    output_dir: PathBuf,
}

/// Drives one splat generation: validate arguments, prepare the output
/// directory, run the tool, report the result as JSON on `out`.
///
/// Returns the process exit code. Anticipated failures (bad usage, missing
/// input, tool failure, missing output) are reported as a single JSON error
/// object and exit code 1; unexpected OS-level failures propagate as errors.
pub fn run<I, T, R, W>(args: I, runner: &R, out: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: ToolRunner,
    W: io::Write,
{
    let Cli {
        input_image,
        output_dir,
    } = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            e.print()?;
            return Ok(0);
        }
        Err(_) => {
            Message::error(USAGE).emit(out)?;
            return Ok(1);
        }
    };

    if !input_image.exists() {
        Message::error(format!("Input image not found: {}", input_image.display())).emit(out)?;
        return Ok(1);
    }

    let output_dir = OutputDir::prepare(output_dir)?;

    Message::starting().emit(out)?;
    let result = runner.predict(&input_image, output_dir.path())?;

    if !result.success() {
        Message::error(format!("SHARP failed: {}", result.stderr)).emit(out)?;
        return Ok(1);
    }

    match output_dir.first_ply()? {
        Some(ply) => {
            Message::complete(ply).emit(out)?;
            Ok(0)
        }
        None => {
            Message::error("No .ply file generated").emit(out)?;
            Ok(1)
        }
    }
}
