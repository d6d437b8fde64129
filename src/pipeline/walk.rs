//! Tree walker: list a directory under a gate slot, then fan out one unit per child.
//!
//! Children are spawned into the single pool-level scope opened by the orchestrator, which tracks
//! the whole tree; a walker returns as soon as it has dispatched its entries, so stack use does not
//! grow with depth. Failures go straight to the collector.

use anyhow::Context;
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};

use crate::MatchRecord;
use crate::engine::probe::{DimensionProbe, ProbeOutcome};

use super::context::ScanContext;

/// What a directory entry turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    /// Regular file, or a symlink that does not resolve to a directory (dangling links included).
    File,
    /// Symlinked directory, fifo, socket, device: never descended into or opened.
    Skip,
}

/// One listed child of a directory.
#[derive(Debug)]
pub struct DirItem {
    pub path: PathBuf,
    pub kind: EntryKind,
}

fn classify(path: &Path, file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        // Directory links are not followed: there is no cycle detection.
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => EntryKind::Skip,
            Ok(meta) if !meta.is_file() => EntryKind::Skip,
            _ => EntryKind::File,
        }
    } else {
        EntryKind::Skip
    }
}

/// Read every entry of `dir` with its kind. All I/O happens here, under one gate slot.
pub fn list_dir(dir: &Path) -> anyhow::Result<Vec<DirItem>> {
    let read = fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    let mut items = Vec::new();
    for entry in read {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = dir.join(entry.file_name());
        let file_type = entry
            .file_type()
            .with_context(|| format!("file type of {}", path.display()))?;
        let kind = classify(&path, file_type);
        items.push(DirItem { path, kind });
    }
    Ok(items)
}

/// Lists one directory. The walker only sees entries through this seam.
pub trait DirLister: Send + Sync {
    fn list(&self, dir: &Path) -> anyhow::Result<Vec<DirItem>>;
}

/// Lists the real filesystem via [`list_dir`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, dir: &Path) -> anyhow::Result<Vec<DirItem>> {
        list_dir(dir)
    }
}

/// Entry point for one root: a directory gets a walker, anything else is probed directly.
pub fn walk_root<'scope, P: DimensionProbe + ?Sized>(
    s: &rayon::Scope<'scope>,
    root: &Path,
    ctx: &'scope ScanContext<'_, P>,
) {
    match fs::metadata(root) {
        Ok(meta) if !meta.is_dir() => probe_file(root, ctx),
        _ => walk_dir(s, root, ctx),
    }
}

/// Walk one directory: list it under a slot, then spawn one unit per child into `s`.
pub fn walk_dir<'scope, P: DimensionProbe + ?Sized>(
    s: &rayon::Scope<'scope>,
    dir: &Path,
    ctx: &'scope ScanContext<'_, P>,
) {
    let items = {
        let Some(_permit) = ctx.gate.acquire(ctx.cancel) else {
            return;
        };
        match ctx.lister.list(dir) {
            Ok(items) => items,
            Err(e) => {
                ctx.fail(e);
                return;
            }
        }
    };
    if items.is_empty() {
        trace!("empty directory {}", dir.display());
        return;
    }

    for item in items {
        if ctx.cancel.is_cancelled() {
            break;
        }
        match item.kind {
            EntryKind::Dir if ctx.recursive => s.spawn(move |s| walk_dir(s, &item.path, ctx)),
            EntryKind::File => s.spawn(move |_| probe_file(&item.path, ctx)),
            EntryKind::Dir | EntryKind::Skip => {
                trace!("skipping {}", item.path.display());
            }
        }
    }
}

/// Probe one file under a gate slot, compare, and emit on a match.
pub fn probe_file<P: DimensionProbe + ?Sized>(path: &Path, ctx: &ScanContext<'_, P>) {
    let outcome = {
        let Some(_permit) = ctx.gate.acquire(ctx.cancel) else {
            return;
        };
        ctx.probe.probe(path)
    };
    match outcome {
        Ok(ProbeOutcome::Dimensions(d)) => {
            if ctx.comparison.matches(d.width, d.height) {
                ctx.emit(MatchRecord {
                    path: path.to_path_buf(),
                    width: d.width,
                    height: d.height,
                });
            }
        }
        Ok(ProbeOutcome::NotAnImage) => trace!("not an image: {}", path.display()),
        Err(e) => ctx.fail(e),
    }
}
