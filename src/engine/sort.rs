//! Final ordering of matched records.

use anyhow::{Result, bail};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::MatchRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Width,
    Height,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(SortKey::Name),
            "width" => Ok(SortKey::Width),
            "height" => Ok(SortKey::Height),
            other => bail!("invalid sort key '{}' (expected name, width or height)", other),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => bail!(
                "invalid sort order '{}' (expected asc[ending] or desc[ending])",
                other
            ),
        }
    }
}

/// Key + direction. Default is ascending by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Parse key and direction strings. Called before any scanning starts.
    pub fn parse(key: &str, direction: &str) -> Result<Self> {
        Ok(Self::new(key.parse()?, direction.parse()?))
    }
}

fn compare_by_key(a: &MatchRecord, b: &MatchRecord, key: SortKey) -> Ordering {
    match key {
        // Raw bytes, so "a.png" sorts before "a/b.png" like a plain string compare.
        SortKey::Name => a.path.as_os_str().cmp(b.path.as_os_str()),
        SortKey::Width => a.width.cmp(&b.width),
        SortKey::Height => a.height.cmp(&b.height),
    }
}

/// Stable sort of `records` by `spec`. Equal keys keep their incoming order in both directions.
/// `None` returns records unchanged.
pub fn sort_records(mut records: Vec<MatchRecord>, spec: Option<SortSpec>) -> Vec<MatchRecord> {
    let Some(spec) = spec else {
        return records;
    };
    match spec.direction {
        SortDirection::Ascending => records.sort_by(|a, b| compare_by_key(a, b, spec.key)),
        SortDirection::Descending => records.sort_by(|a, b| compare_by_key(b, a, spec.key)),
    }
    records
}
