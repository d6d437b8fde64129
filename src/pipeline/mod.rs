//! Pipeline components: gate, context, walk, collector, orchestrator.

pub mod collector;
pub mod context;
pub mod gate;
pub mod orchestrator;
pub mod walk;

pub use collector::{ResultCollector, collect};
pub use context::{CancelToken, Emission, ScanContext};
pub use gate::{ConcurrencyGate, GatePermit};
pub use orchestrator::{ScanTuning, run_scan, run_scan_with, setup_scan_tuning};
pub use walk::{
    DirItem, DirLister, EntryKind, FsLister, list_dir, probe_file, walk_dir, walk_root,
};
