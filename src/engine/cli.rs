//! CLI command handler: merge settings, run the scan, print matches.

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

use crate::engine::arg_parser::Cli;
use crate::engine::compare::Comparison;
use crate::engine::output::write_report;
use crate::engine::probe::HeaderProbe;
use crate::engine::sort::SortSpec;
use crate::engine::tools::resolve_roots;
use crate::pipeline::{CancelToken, run_scan};
use crate::utils::config::ScanDefaults;
use crate::utils::imagesize_toml::{ImagesizeToml, SettingsSection, load_imagesize_toml};
use crate::utils::setup_logging;
use crate::{Opts, ScanOpts};

/// Build [`Opts`] from CLI flags over settings-file values over defaults.
/// Threshold, sort key/order and concurrency are validated here, before any scanning.
pub fn build_opts(cli: &Cli, file: Option<&ImagesizeToml>) -> Result<Opts> {
    let defaults = SettingsSection::default();
    let file = file.map(|f| &f.settings).unwrap_or(&defaults);

    let or_equal = cli.or_equal.or(file.or_equal).unwrap_or(false);
    let args = cli.threshold_args();
    let comparison = Comparison::parse(cli.compare_op(), &args.size, or_equal)?;

    let max_concurrency = cli
        .max_concurrency
        .or(file.max_concurrency)
        .unwrap_or(ScanDefaults::MAX_CONCURRENCY);
    if max_concurrency == 0 {
        bail!("max concurrency must be at least 1");
    }

    let sort_key = cli
        .sort_key
        .as_deref()
        .or(file.sort_key.as_deref())
        .unwrap_or(ScanDefaults::SORT_KEY);
    let sort_order = cli
        .sort_order
        .as_deref()
        .or(file.sort_order.as_deref())
        .unwrap_or(ScanDefaults::SORT_ORDER);
    let spec = SortSpec::parse(sort_key, sort_order)?;
    let unsorted = cli.unsorted.or(file.unsorted).unwrap_or(false);

    Ok(Opts {
        comparison,
        roots: resolve_roots(&args.paths),
        recursive: cli.recursive.or(file.recursive).unwrap_or(false),
        max_concurrency,
        sort: (!unsorted).then_some(spec),
        verbose: cli.verbose.or(file.verbose).unwrap_or(false),
    })
}

/// Run one scan from the command line and print the result.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let start_time = Instant::now();
    let file = load_imagesize_toml(Path::new("."));
    let file_verbose = file
        .as_ref()
        .ok()
        .and_then(|f| f.as_ref())
        .and_then(|f| f.settings.verbose);
    setup_logging(cli.verbose.or(file_verbose).unwrap_or(false));
    let file = file.unwrap_or_else(|e| {
        warn!("{:#}", e);
        None
    });

    let opts = build_opts(cli, file.as_ref())?;
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );

    let cancel = CancelToken::new();
    let cancel_handler = cancel.clone();
    ctrlc::set_handler(move || cancel_handler.cancel()).context("set Ctrl+C handler")?;

    let report = run_scan(
        &opts.roots,
        &ScanOpts::from(&opts),
        &HeaderProbe::default(),
        &cancel,
    )?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_report(&mut out, &report.records, opts.verbose, start_time.elapsed())
        .context("write results")?;
    Ok(())
}
