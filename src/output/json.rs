//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::error::ClipResult;
use crate::options::WrapOptions;

use super::utils::output_lines;

/// A wrap result together with the options that produced it.
#[derive(Debug, Serialize)]
pub struct WrapReport<'a> {
    /// Options after normalization
    pub options: WrapOptions,
    pub lines: Vec<&'a str>,
}

impl<'a> WrapReport<'a> {
    pub fn new(options: &WrapOptions, wrapped: &'a str) -> Self {
        Self {
            options: options.normalized(),
            lines: output_lines(wrapped),
        }
    }
}

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &WrapReport<'_>) -> ClipResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json(report: &WrapReport<'_>) -> ClipResult<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, report)
}
