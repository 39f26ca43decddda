use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// Every JSON object this program ever prints on stdout.
///
/// The calling application reads stdout as a stream of JSON objects and takes
/// the last one as the definitive result, so exactly one terminal message
/// (`Complete` or `Error`) may be emitted per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Status(StatusMessage),
    Error { error: String },
}

/// Progress messages carry a `status` tag; error messages do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusMessage {
    Starting { message: String },
    Complete { output_path: PathBuf, message: String },
}

impl Message {
    pub fn starting() -> Self {
        Message::Status(StatusMessage::Starting {
            message: "Loading SHARP model...".to_string(),
        })
    }

    pub fn complete(output_path: PathBuf) -> Self {
        Message::Status(StatusMessage::Complete {
            output_path,
            message: "3D splat generated successfully!".to_string(),
        })
    }

    pub fn error(error: impl Into<String>) -> Self {
        Message::Error {
            error: error.into(),
        }
    }

    /// Writes the message as one JSON line and flushes, so a parent process
    /// watching the stream sees it before the blocking subprocess call.
    pub fn emit<W: io::Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self).context("Failed to serialize message")?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
