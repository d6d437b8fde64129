//! Public and internal types for the imagesize API and pipeline.

use std::path::PathBuf;
use std::time::Duration;

use crate::engine::compare::Comparison;
use crate::engine::sort::SortSpec;
use crate::utils::config::ScanDefaults;

/// Pixel dimensions read from an image header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// One file whose dimensions satisfied the active [`Comparison`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Path as reached from the root it was found under (root joined with entry names).
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Result of one full scan: matches in final order plus scan statistics.
#[derive(Debug)]
pub struct ScanReport {
    pub records: Vec<MatchRecord>,
    /// Highest number of list/probe operations observed in flight at once.
    pub peak_in_flight: usize,
    pub elapsed: Duration,
}

/// Lib-only options for [`scan`](crate::scan) and [`run_scan`](crate::pipeline::run_scan).
#[derive(Clone, Debug)]
pub struct ScanOpts {
    /// Match condition applied to every decoded header.
    pub comparison: Comparison,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Capacity of the concurrency gate (simultaneous directory listings + file probes).
    pub max_concurrency: usize,
    /// Override worker thread count. When None, derived from the gate capacity and CPU count.
    pub num_threads: Option<usize>,
    /// Final ordering. `None` keeps arrival order.
    pub sort: Option<SortSpec>,
}

impl ScanOpts {
    /// Options with default concurrency, non-recursive, sorted ascending by name.
    pub fn new(comparison: Comparison) -> Self {
        Self {
            comparison,
            recursive: false,
            max_concurrency: ScanDefaults::MAX_CONCURRENCY,
            num_threads: None,
            sort: Some(SortSpec::default()),
        }
    }
}

impl From<&Opts> for ScanOpts {
    fn from(o: &Opts) -> Self {
        ScanOpts {
            comparison: o.comparison,
            recursive: o.recursive,
            max_concurrency: o.max_concurrency,
            num_threads: None,
            sort: o.sort,
        }
    }
}

/// Full options (CLI). Use [`ScanOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    pub comparison: Comparison,
    /// Root paths to scan. Never empty once built by the CLI (defaults to `.`).
    pub roots: Vec<PathBuf>,
    pub recursive: bool,
    pub max_concurrency: usize,
    pub sort: Option<SortSpec>,
    /// Print dimensions per line and a trailing summary; debug logging.
    pub verbose: bool,
}
