//! Output lines for matched records and the verbose summary.

use std::io::{self, Write};
use std::time::Duration;

use crate::MatchRecord;

/// `path`, or `path (WxH)` when verbose.
pub fn render_line(record: &MatchRecord, verbose: bool) -> String {
    if verbose {
        format!(
            "{} ({}x{})",
            record.path.display(),
            record.width,
            record.height
        )
    } else {
        record.path.display().to_string()
    }
}

pub fn summary_line(count: usize, elapsed: Duration) -> String {
    format!("{} file(s) matched in {:?}.", count, elapsed)
}

/// Write records in order; when verbose, a blank separator (if anything matched) and the summary.
pub fn write_report<W: Write>(
    out: &mut W,
    records: &[MatchRecord],
    verbose: bool,
    elapsed: Duration,
) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", render_line(record, verbose))?;
    }
    if verbose {
        if !records.is_empty() {
            writeln!(out)?;
        }
        writeln!(out, "{}", summary_line(records.len(), elapsed))?;
    }
    out.flush()
}
