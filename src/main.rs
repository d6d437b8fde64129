//! imagesize CLI: list images wider, narrower, taller or shorter than a given size.

use anyhow::Result;
use clap::Parser;
use imagesize::engine::arg_parser::Cli;
use imagesize::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
