// JSON report output.

use std::io::Write;

use anyhow::Result;

use crate::pipeline::Report;

pub fn write_report<W: Write>(report: &Report, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
