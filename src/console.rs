//! Progress output.
//!
//! In [`OutputMode::Human`] every progress line is written as it happens.
//! In [`OutputMode::Json`] progress is suppressed and only the final report
//! (or the error) is written, as a single JSON document.

use std::io::{self, Write};

use serde_json::json;

use crate::config::OutputMode;
use crate::error::{Error, Result};
use crate::types::RepairReport;

/// Progress sink for a repair run.
pub struct Console<W: Write> {
    out: W,
    mode: OutputMode,
}

impl Console<io::Stdout> {
    /// Console on standard output.
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> Console<W> {
    /// Console writing to `out`.
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self { out, mode }
    }

    /// Write one progress line.
    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        if self.mode == OutputMode::Human {
            writeln!(self.out, "{}", text.as_ref())?;
        }
        Ok(())
    }

    /// Write a heading preceded by a blank line.
    pub fn section(&mut self, title: impl AsRef<str>) -> Result<()> {
        self.line(format!("\n{}", title.as_ref()))
    }

    /// Report the error that ended the run.
    pub fn error(&mut self, err: &Error) -> Result<()> {
        match self.mode {
            OutputMode::Human => writeln!(self.out, "\n❌ ERROR: {}", err)?,
            OutputMode::Json => {
                let doc = json!({ "error": err.to_string() });
                writeln!(self.out, "{}", serde_json::to_string_pretty(&doc)?)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Emit the final report. Human output has already been streamed.
    pub fn report(&mut self, report: &RepairReport) -> Result<()> {
        if self.mode == OutputMode::Json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(report)?)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
