//! Market data displayed on the homepage: coin rates and investment plans.

use serde::{Deserialize, Serialize};

/// Latest rate of a listed coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRate {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price_usd: f64,
    /// Percentage change over the last 24 hours.
    pub change_24h: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// An investment plan offered on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub name: String,
    pub roi_percent: f64,
    pub min_deposit: f64,
    #[serde(default)]
    pub max_deposit: Option<f64>,
    pub duration_days: u32,
    #[serde(default)]
    pub description: Option<String>,
}
