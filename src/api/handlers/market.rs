//! Handlers for coin rates and investment plans.

use axum::{Json, extract::State};

use crate::domain::entities::{CoinRate, Investment};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /home/coins` - current coin rates as a bare JSON array.
pub async fn coins_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CoinRate>>, AppError> {
    let coins = state.coin_rates_service.retrieve_coins().await?;
    Ok(Json(coins))
}

/// `GET /home/investments` - investment plans as a bare JSON array.
pub async fn investments_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Investment>>, AppError> {
    let investments = state.investment_service.retrieve_investments().await?;
    Ok(Json(investments))
}
