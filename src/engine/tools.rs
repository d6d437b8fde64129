//! Path utilities

use log::info;
use std::path::PathBuf;

use crate::utils::config::ScanDefaults;

/// Roots to scan: the given paths, or the current directory (with a notice) when none were given.
pub fn resolve_roots(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        info!("No path specified. Defaulting to current directory.");
        return vec![PathBuf::from(ScanDefaults::ROOT)];
    }
    paths.to_vec()
}
