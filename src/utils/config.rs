//! Application configuration constants.
//! Tuning and defaults in one place.

use std::sync::OnceLock;
use std::time::Duration;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Settings file looked up in the working directory (e.g. `.imagesize.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Scan defaults ----

/// Defaults applied when neither the settings file nor the CLI sets a value.
pub struct ScanDefaults;

impl ScanDefaults {
    /// Gate capacity: simultaneous directory listings + file probes.
    pub const MAX_CONCURRENCY: usize = 4096;
    pub const SORT_KEY: &'static str = "name";
    pub const SORT_ORDER: &'static str = "ascending";
    /// Root used when no path is given.
    pub const ROOT: &'static str = ".";
}

// ---- Worker threads ----

/// Thread limits for the scan pool. Probes are I/O bound, so the pool oversubscribes the CPUs.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon; the rest are const.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    /// Threads per available CPU.
    pub io_multiplier: usize,
    /// Floor / minimum pool size.
    pub floor: usize,
    /// Hard ceiling regardless of CPU count.
    pub max: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 0, // use current() to set from rayon
            io_multiplier: Self::IO_MULTIPLIER,
            floor: Self::FLOOR_THREADS,
            max: Self::MAX_THREADS,
        }
    }
}

impl WorkerThreadLimits {
    pub const IO_MULTIPLIER: usize = 4;
    pub const FLOOR_THREADS: usize = 2;
    pub const MAX_THREADS: usize = 128;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }

    /// Pool size for a gate of `capacity` slots: never more threads than slots.
    pub fn threads_for(&self, capacity: usize) -> usize {
        let io = (self.all_threads * self.io_multiplier).clamp(self.floor, self.max);
        io.min(capacity).max(1)
    }
}

// ---- Gate ----

pub struct GateConsts;

impl GateConsts {
    /// How long a blocked acquire waits before re-checking cancellation.
    pub const ACQUIRE_POLL: Duration = Duration::from_millis(25);
}
