use anyhow::{Context, Result, anyhow, bail};
use crossbeam_channel::unbounded;
use log::debug;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use crate::engine::probe::DimensionProbe;
use crate::engine::sort::sort_records;
use crate::utils::config::{PackagePaths, WorkerThreadLimits};
use crate::utils::fd_limit::cap_concurrency;
use crate::{ScanOpts, ScanReport};

use super::collector::collect;
use super::context::{CancelToken, Emission, ScanContext};
use super::gate::ConcurrencyGate;
use super::walk::{DirLister, FsLister, walk_root};

/// Pool size and gate capacity for one scan.
#[derive(Clone, Copy, Debug)]
pub struct ScanTuning {
    pub num_threads: usize,
    pub gate_capacity: usize,
}

/// Validate the requested concurrency, cap it by the FD limit, and size the pool.
pub fn setup_scan_tuning(opts: &ScanOpts) -> Result<ScanTuning> {
    if opts.max_concurrency == 0 {
        bail!("max concurrency must be at least 1");
    }
    let gate_capacity = cap_concurrency(opts.max_concurrency);
    let num_threads = match opts.num_threads {
        Some(0) => bail!("thread count must be at least 1"),
        Some(n) => n,
        None => WorkerThreadLimits::current().threads_for(gate_capacity),
    };
    Ok(ScanTuning {
        num_threads,
        gate_capacity,
    })
}

/// Main orchestrator: scan every root under one gate and return sorted matches.
///
/// The walk runs on a dedicated pool in its own thread while this thread drains the collector.
/// The first fatal error cancels `cancel`; remaining units stop at their next gate acquisition or
/// loop check, and all of them have finished before this function returns.
pub fn run_scan<P: DimensionProbe + ?Sized>(
    roots: &[PathBuf],
    opts: &ScanOpts,
    probe: &P,
    cancel: &CancelToken,
) -> Result<ScanReport> {
    run_scan_with(roots, opts, probe, &FsLister, cancel)
}

/// [`run_scan`] with a caller-supplied directory lister.
pub fn run_scan_with<P: DimensionProbe + ?Sized>(
    roots: &[PathBuf],
    opts: &ScanOpts,
    probe: &P,
    lister: &dyn DirLister,
    cancel: &CancelToken,
) -> Result<ScanReport> {
    let start_time = Instant::now();
    let tuning = setup_scan_tuning(opts)?;
    debug!(
        "Scanning {} root(s) for images {}: {} threads, gate capacity {}",
        roots.len(),
        opts.comparison,
        tuning.num_threads,
        tuning.gate_capacity
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(tuning.num_threads)
        .thread_name(|i| format!("{}-scan-{}", PackagePaths::get().pkg_name(), i))
        .build()
        .context("build scan thread pool")?;
    let gate = ConcurrencyGate::new(tuning.gate_capacity);
    let (emit_tx, emit_rx) = unbounded::<Emission>();
    let ctx = ScanContext::new(
        opts.comparison,
        opts.recursive,
        &gate,
        probe,
        lister,
        cancel,
        emit_tx,
    );

    let records = thread::scope(|ts| -> Result<_> {
        let pool = &pool;
        let walk_handle = ts.spawn(move || {
            // One scope for the whole tree: walkers spawn their children into it.
            pool.scope(|s| {
                let ctx = &ctx;
                for root in roots {
                    s.spawn(move |s| walk_root(s, root, ctx));
                }
            });
            // Dropping the last sender closes the channel so the collector finishes.
            drop(ctx);
        });
        let outcome = collect(emit_rx, cancel);
        walk_handle
            .join()
            .map_err(|_| anyhow!("walk thread panicked"))?;
        outcome
    })?;

    let records = sort_records(records, opts.sort);
    let elapsed = start_time.elapsed();
    debug!(
        "Scan finished: {} match(es) in {:?}, peak {} operation(s) in flight",
        records.len(),
        elapsed,
        gate.peak()
    );
    Ok(ScanReport {
        records,
        peak_in_flight: gate.peak(),
        elapsed,
    })
}
