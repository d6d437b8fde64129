//! Concurrency gate: one counting semaphore bounding every directory listing and file probe in a scan.
//!
//! A bounded channel of unit values acts as the counter: sending takes a slot, receiving frees one.
//! Acquisition waits in short slices so a cancelled scan stops queueing for slots.

use crossbeam_channel::{Receiver, SendTimeoutError, Sender, bounded};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::config::GateConsts;

use super::context::CancelToken;

pub struct ConcurrencyGate {
    slots_tx: Sender<()>,
    slots_rx: Receiver<()>,
    capacity: usize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

/// Held slot. Dropping it releases the slot.
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct GatePermit<'a> {
    gate: &'a ConcurrencyGate,
}

impl ConcurrencyGate {
    /// Gate with `capacity` slots (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (slots_tx, slots_rx) = bounded::<()>(capacity);
        Self {
            slots_tx,
            slots_rx,
            capacity,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// Highest number of slots held at once since the gate was created.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }

    /// Block until a slot is free. Returns `None` if `cancel` fires before or while waiting.
    pub fn acquire(&self, cancel: &CancelToken) -> Option<GatePermit<'_>> {
        loop {
            if cancel.is_cancelled() {
                return None;
            }
            match self.slots_tx.send_timeout((), GateConsts::ACQUIRE_POLL) {
                Ok(()) => {
                    let now = self.in_flight.fetch_add(1, Ordering::Relaxed) + 1;
                    self.peak.fetch_max(now, Ordering::Relaxed);
                    return Some(GatePermit { gate: self });
                }
                Err(SendTimeoutError::Timeout(())) => continue,
                // Both ends live in the gate, so this cannot happen while `self` is alive.
                Err(SendTimeoutError::Disconnected(())) => return None,
            }
        }
    }
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.fetch_sub(1, Ordering::Relaxed);
        let _ = self.gate.slots_rx.try_recv();
    }
}
