//! Result collector: single ingestion point for matches and fatal errors from every unit.

use anyhow::{Result, anyhow};
use crossbeam_channel::Receiver;
use log::debug;

use crate::MatchRecord;

use super::context::{CancelToken, Emission};

/// Accumulates matches in arrival order until the first fatal error, which wins and cancels the scan.
#[derive(Debug)]
pub struct ResultCollector {
    cancel: CancelToken,
    records: Vec<MatchRecord>,
    first_error: Option<anyhow::Error>,
    discarded: usize,
}

impl ResultCollector {
    pub fn new(cancel: CancelToken) -> Self {
        Self {
            cancel,
            records: Vec::new(),
            first_error: None,
            discarded: 0,
        }
    }

    pub fn ingest(&mut self, emission: Emission) {
        if self.first_error.is_some() {
            self.discarded += 1;
            return;
        }
        match emission {
            Emission::Match(record) => self.records.push(record),
            Emission::Fatal(err) => {
                debug!("first fatal error, cancelling scan: {:#}", err);
                self.cancel.cancel();
                self.first_error = Some(err);
            }
        }
    }

    /// Terminal outcome: the first error, a cancellation, or the accumulated records.
    pub fn finish(self) -> Result<Vec<MatchRecord>> {
        if let Some(err) = self.first_error {
            if self.discarded > 0 {
                debug!("discarded {} emissions after the first error", self.discarded);
            }
            return Err(err);
        }
        if self.cancel.is_cancelled() {
            return Err(anyhow!("scan cancelled"));
        }
        Ok(self.records)
    }
}

/// Drain `rx` until every sender is gone (all units finished), then produce the outcome.
pub fn collect(rx: Receiver<Emission>, cancel: &CancelToken) -> Result<Vec<MatchRecord>> {
    let mut collector = ResultCollector::new(cancel.clone());
    while let Ok(emission) = rx.recv() {
        collector.ingest(emission);
    }
    collector.finish()
}
