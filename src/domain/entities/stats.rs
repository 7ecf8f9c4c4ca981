//! Headline statistics block.

use serde::{Deserialize, Serialize};

/// A single statistic: the figure to display and its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub data: String,
    pub desc: String,
}

/// The four statistics shown under the intro banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub stats1: StatEntry,
    pub stats2: StatEntry,
    pub stats3: StatEntry,
    pub stats4: StatEntry,
}
