//! DTOs for the statistics block.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{StatEntry, Stats};

/// Body of `POST /stats`. Every entry is optional on the wire; the handler
/// decides completeness with [`StatsRequest::to_stats`].
#[derive(Debug, Default, Deserialize)]
pub struct StatsRequest {
    pub stats1: Option<StatEntry>,
    pub stats2: Option<StatEntry>,
    pub stats3: Option<StatEntry>,
    pub stats4: Option<StatEntry>,
}

impl StatsRequest {
    /// Returns the complete statistics, or `None` if any entry is missing.
    pub fn to_stats(&self) -> Option<Stats> {
        Some(Stats {
            stats1: self.stats1.clone()?,
            stats2: self.stats2.clone()?,
            stats3: self.stats3.clone()?,
            stats4: self.stats4.clone()?,
        })
    }
}

/// `201` body of `POST /stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedStatsResponse {
    pub saved_stats: Stats,
}

/// `200` body of `GET /stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Option<Stats>,
}
