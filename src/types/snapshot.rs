// src/types/snapshot.rs

use crate::agents::trader::TradingAgent;
use crate::simulators::gbm::MarketSample;
use crate::types::trade::Trade;
use serde::{Deserialize, Serialize};

/// Aggregate arena state, recomputed from the agent list plus the current
/// price after every tick. Never mutated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaStats {
    pub total_bank_value: f64,
    pub total_trades: u32,
    pub avg_win_rate: f64,
    pub market_price: f64,
    pub market_volatility: f64,
    pub top_performer: String,
    pub bottom_performer: String,
}

/// The unit exchanged with persistence and the UI: everything needed to
/// resume a session. RNG state is deliberately not part of it — a restored
/// arena continues the price path from `current_price` with fresh randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaSnapshot {
    pub agents: Vec<TradingAgent>,
    pub market_data: Vec<MarketSample>,
    pub current_price: f64,
    pub stats: ArenaStats,
    pub recent_trades: Vec<Trade>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub joined_team: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated_ms: i64,
}
