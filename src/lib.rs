//! imagesize: find images by pixel dimensions, walking trees concurrently under a bounded gate.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use engine::compare::{CompareOp, Comparison};
pub use engine::probe::{DimensionProbe, HeaderProbe, ProbeOutcome};
pub use engine::sort::{SortDirection, SortKey, SortSpec};
pub use pipeline::CancelToken;

use log::debug;
use std::path::PathBuf;

/// Result alias used by public imagesize API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: scan `roots` with `opts` using the default header probe; return sorted matches.
///
/// The first scan-fatal error (unreadable directory, unopenable file, corrupt header) is returned
/// and no records are. Files that are not images are skipped silently.
///
/// ```ignore
/// let cmp = imagesize::Comparison::new(imagesize::CompareOp::Taller, 512, false);
/// let opts = imagesize::ScanOpts { recursive: true, ..imagesize::ScanOpts::new(cmp) };
/// let matches = imagesize::scan(&[PathBuf::from("photos")], &opts)?;
/// ```
pub fn scan(roots: &[PathBuf], opts: &ScanOpts) -> Result<Vec<MatchRecord>> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    let probe = HeaderProbe::default();
    let report = pipeline::run_scan(roots, opts, &probe, &CancelToken::new())?;
    Ok(report.records)
}
