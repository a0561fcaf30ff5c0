use std::io::{self, Write};

use log::debug;
use serde::Serialize;

use crate::core::config::OutputFormat;
use crate::core::error::{ToolError, ToolResult};

/// A finished result that can be written as plain text or JSON
pub trait Report: Serialize {
    /// Write the plain-text form, one value per line
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Write `report` to `out` in the requested format and flush
pub fn emit<R: Report>(report: &R, format: OutputFormat, out: &mut dyn Write) -> ToolResult<()> {
    debug!("Writing report as {:?}", format);

    let written = match format {
        OutputFormat::Text => report.write_text(out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
    };

    match written.and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        // A closed pipe (e.g. `| head`) just ends the output
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(ToolError::output(e)),
    }
}
