//! Dimension comparison: which axis, which direction, and whether equality counts.

use anyhow::{Result, anyhow};
use std::fmt;

/// Axis and direction of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    /// Width above the threshold.
    Wider,
    /// Width below the threshold.
    Narrower,
    /// Height above the threshold.
    Taller,
    /// Height below the threshold.
    Shorter,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Wider => "wider",
            CompareOp::Narrower => "narrower",
            CompareOp::Taller => "taller",
            CompareOp::Shorter => "shorter",
        };
        f.write_str(s)
    }
}

/// Operator, threshold and inclusivity. Immutable and shared read-only for a whole scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub op: CompareOp,
    pub threshold: u32,
    /// Also match when the measured side equals the threshold.
    pub inclusive: bool,
}

impl Comparison {
    pub fn new(op: CompareOp, threshold: u32, inclusive: bool) -> Self {
        Self {
            op,
            threshold,
            inclusive,
        }
    }

    /// Parse the threshold from user input. Fails with "invalid threshold" for anything that is
    /// not a non-negative integer.
    pub fn parse(op: CompareOp, threshold: &str, inclusive: bool) -> Result<Self> {
        let threshold = threshold
            .trim()
            .parse::<u32>()
            .map_err(|e| anyhow!("invalid threshold '{}': {}", threshold, e))?;
        Ok(Self::new(op, threshold, inclusive))
    }

    /// True if an image of `width` x `height` satisfies this comparison.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        let t = self.threshold;
        match (self.op, self.inclusive) {
            (CompareOp::Wider, false) => width > t,
            (CompareOp::Wider, true) => width >= t,
            (CompareOp::Narrower, false) => width < t,
            (CompareOp::Narrower, true) => width <= t,
            (CompareOp::Taller, false) => height > t,
            (CompareOp::Taller, true) => height >= t,
            (CompareOp::Shorter, false) => height < t,
            (CompareOp::Shorter, true) => height <= t,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eq = if self.inclusive { " or equal to" } else { "" };
        write!(f, "{} than{} {}px", self.op, eq, self.threshold)
    }
}
