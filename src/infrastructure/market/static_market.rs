//! Coin rates and investment plans served from a fixed snapshot.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::application::services::{CoinRatesService, InvestmentService, ServiceError};
use crate::domain::entities::{CoinRate, Investment};

/// Shape of the snapshot file pointed to by `MARKET_DATA_PATH`.
///
/// ```json
/// {
///   "coins": [{"id": "bitcoin", "symbol": "BTC", "name": "Bitcoin", "priceUsd": 64000.0, "change24h": 1.2}],
///   "investments": [{"name": "Starter", "roiPercent": 5.0, "minDeposit": 50.0, "durationDays": 7}]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
struct MarketSnapshot {
    #[serde(default)]
    coins: Vec<CoinRate>,
    #[serde(default)]
    investments: Vec<Investment>,
}

/// Serves a snapshot loaded once at startup.
#[derive(Debug, Default, Clone)]
pub struct StaticMarketData {
    coins: Vec<CoinRate>,
    investments: Vec<Investment>,
}

impl StaticMarketData {
    pub fn new(coins: Vec<CoinRate>, investments: Vec<Investment>) -> Self {
        Self { coins, investments }
    }

    pub fn coins(&self) -> &[CoinRate] {
        &self.coins
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read market data from {}", path.display()))?;

        Self::from_json(&raw)
            .with_context(|| format!("Invalid market data in {}", path.display()))
    }

    fn from_json(raw: &str) -> Result<Self> {
        let snapshot: MarketSnapshot = serde_json::from_str(raw)?;
        Ok(Self::new(snapshot.coins, snapshot.investments))
    }
}

#[async_trait]
impl CoinRatesService for StaticMarketData {
    async fn retrieve_coins(&self) -> Result<Vec<CoinRate>, ServiceError> {
        Ok(self.coins.clone())
    }
}

#[async_trait]
impl InvestmentService for StaticMarketData {
    async fn retrieve_investments(&self) -> Result<Vec<Investment>, ServiceError> {
        Ok(self.investments.clone())
    }
}
