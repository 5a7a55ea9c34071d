//! Source formatting for generated Go files.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use crate::error::{RenderError, Result};

/// How the rendered source is formatted before it is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Formatter {
    /// Pipe the source through `gofmt`.
    #[default]
    Gofmt,
    /// Write the source as rendered.
    None,
}

impl Formatter {
    pub fn format(&self, source: &str) -> Result<String> {
        match self {
            Self::Gofmt => gofmt(source),
            Self::None => Ok(source.to_string()),
        }
    }
}

const GOFMT: &str = "gofmt";

fn gofmt(source: &str) -> Result<String> {
    let io_err = |source| RenderError::Io {
        program: GOFMT,
        source,
    };

    let mut child = Command::new(GOFMT)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(io_err)?;

    // gofmt reads all of stdin before writing, so stdin is closed before waiting
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(source.as_bytes()).map_err(io_err)?;
    }

    let output = child.wait_with_output().map_err(io_err)?;
    if !output.status.success() {
        return Err(RenderError::Format {
            program: GOFMT,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| RenderError::Format {
        program: GOFMT,
        message: e.to_string(),
    })
}
