//! Scan context: shared, read-only configuration plus the emission channel and cancellation token
//! handed to every walker and probe unit.

use crossbeam_channel::Sender;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::MatchRecord;
use crate::engine::compare::Comparison;
use crate::engine::probe::DimensionProbe;

use super::gate::ConcurrencyGate;
use super::walk::DirLister;

/// Shared cancellation flag. Set by the collector on the first fatal error, or by Ctrl+C in the CLI.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What a unit hands to the collector.
#[derive(Debug)]
pub enum Emission {
    Match(MatchRecord),
    Fatal(anyhow::Error),
}

/// Everything a walker or probe unit needs. Borrowed by all units of one scan; the channel closes
/// when the context is dropped after the last unit finishes.
pub struct ScanContext<'a, P: DimensionProbe + ?Sized> {
    pub comparison: Comparison,
    pub recursive: bool,
    pub gate: &'a ConcurrencyGate,
    pub probe: &'a P,
    pub lister: &'a dyn DirLister,
    pub cancel: &'a CancelToken,
    emit_tx: Sender<Emission>,
}

impl<'a, P: DimensionProbe + ?Sized> ScanContext<'a, P> {
    pub fn new(
        comparison: Comparison,
        recursive: bool,
        gate: &'a ConcurrencyGate,
        probe: &'a P,
        lister: &'a dyn DirLister,
        cancel: &'a CancelToken,
        emit_tx: Sender<Emission>,
    ) -> Self {
        Self {
            comparison,
            recursive,
            gate,
            probe,
            lister,
            cancel,
            emit_tx,
        }
    }

    pub fn emit(&self, record: MatchRecord) {
        // Receiver outlives every unit; a send error only means the scan is being torn down.
        let _ = self.emit_tx.send(Emission::Match(record));
    }

    pub fn fail(&self, err: anyhow::Error) {
        let _ = self.emit_tx.send(Emission::Fatal(err));
    }
}
