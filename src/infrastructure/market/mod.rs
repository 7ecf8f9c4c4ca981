//! Market data sources.

mod static_market;

pub use static_market::StaticMarketData;
