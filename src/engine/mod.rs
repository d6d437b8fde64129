//! Engine module: comparison, probing, sorting, output and the CLI surface

pub mod arg_parser;
pub mod cli;
pub mod compare;
pub mod output;
pub mod probe;
pub mod sort;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::{Cli, Commands, Direction, ThresholdArgs};
pub use cli::{build_opts, handle_run};
pub use compare::{CompareOp, Comparison};
pub use output::{render_line, summary_line, write_report};
pub use probe::{DEFAULT_FORMATS, DimensionProbe, HeaderProbe, ProbeOutcome};
pub use sort::{SortDirection, SortKey, SortSpec, sort_records};
pub use tools::resolve_roots;
