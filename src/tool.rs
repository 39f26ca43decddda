use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Exit status and captured streams of one external tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code of the child, `None` if it was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// The splat-generation capability. The real implementation spawns `sharp`;
/// tests substitute their own.
pub trait ToolRunner {
    /// Runs the tool to completion on one image, blocking until it exits.
    fn predict(&self, input_image: &Path, output_dir: &Path) -> Result<ToolOutput>;
}

/// Invokes `sharp predict -i <input> -o <dir>` with both streams captured.
///
/// No retries and no timeout: once spawned, the call blocks until the tool
/// exits, and the exit code is the sole signal of success.
pub struct Sharp;

impl ToolRunner for Sharp {
    fn predict(&self, input_image: &Path, output_dir: &Path) -> Result<ToolOutput> {
        let output = Command::new("sharp")
            .arg("predict")
            .arg("-i")
            .arg(input_image)
            .arg("-o")
            .arg(output_dir)
            .output()
            .context("Failed to launch sharp")?;
        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
