use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::compare::CompareOp;

/// Displays images matching the specified dimension constraints.
#[derive(Clone, Debug, Parser)]
#[command(name = "imagesize", version)]
#[command(about = "Displays images matching the specified constraints.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Maximum number of paths to scan at once. Default: 4096 (capped by the open file limit).
    #[arg(long, short = 'c', global = true, value_parser = clap::value_parser!(usize))]
    pub max_concurrency: Option<usize>,

    /// Also match files equal to the specified dimension.
    #[arg(long, short = 'e', global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub or_equal: Option<bool>,

    /// Include subdirectories.
    #[arg(long, short = 'r', global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub recursive: Option<bool>,

    /// Sort output by the specified key (name, width, height). Default: name.
    #[arg(long, short = 'k', global = true)]
    pub sort_key: Option<String>,

    /// Sort output in the specified direction (asc[ending], desc[ending]). Default: ascending.
    #[arg(long, short = 'o', global = true)]
    pub sort_order: Option<String>,

    /// Print matches in discovery order instead of sorting.
    #[arg(long, short = 'u', global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub unsorted: Option<bool>,

    /// Display image dimensions and total matched file count.
    #[arg(long, short = 'v', global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Filter images by width.
    Width {
        #[command(subcommand)]
        direction: Direction,
    },
    /// Filter images by height.
    Height {
        #[command(subcommand)]
        direction: Direction,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Direction {
    /// Images larger than SIZE pixels.
    Over(ThresholdArgs),
    /// Images smaller than SIZE pixels.
    Under(ThresholdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ThresholdArgs {
    /// Size in pixels.
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    pub size: String,

    /// Directories (or files) to scan. Default: current directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl Direction {
    fn args(&self) -> &ThresholdArgs {
        match self {
            Direction::Over(args) | Direction::Under(args) => args,
        }
    }
}

impl Cli {
    /// Operator selected by the subcommand pair.
    pub fn compare_op(&self) -> CompareOp {
        match &self.command {
            Commands::Width {
                direction: Direction::Over(_),
            } => CompareOp::Wider,
            Commands::Width {
                direction: Direction::Under(_),
            } => CompareOp::Narrower,
            Commands::Height {
                direction: Direction::Over(_),
            } => CompareOp::Taller,
            Commands::Height {
                direction: Direction::Under(_),
            } => CompareOp::Shorter,
        }
    }

    /// Threshold string and paths of the selected subcommand.
    pub fn threshold_args(&self) -> &ThresholdArgs {
        match &self.command {
            Commands::Width { direction } | Commands::Height { direction } => direction.args(),
        }
    }
}
