// src/agents/trader.rs

use crate::agents::profile::{AgentProfile, RosterEntry};
use crate::config::INITIAL_BALANCE;
use crate::types::trade::Position;
use serde::{Deserialize, Serialize};

/// One autonomous trader's full state.
///
/// Invariant: `position == Neutral` exactly when `entry_price == 0` and
/// `position_size == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingAgent {
    pub id: String,
    pub name: String,
    pub personality: String,
    pub profile: AgentProfile,
    /// Realized cash. Mutated only when a position closes.
    pub balance: f64,
    pub initial_balance: f64,
    pub position: Position,
    pub entry_price: f64,
    pub position_size: f64,
    #[serde(rename = "unrealizedPnL")]
    pub unrealized_pnl: f64,
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: f64,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    pub trade_count: u32,
    /// Fraction of closed trades with positive PnL, kept as a running average.
    pub win_rate: f64,
}

impl TradingAgent {
    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            personality: entry.personality.to_string(),
            profile: entry.profile,
            balance: INITIAL_BALANCE,
            initial_balance: INITIAL_BALANCE,
            position: Position::Neutral,
            entry_price: 0.0,
            position_size: 0.0,
            unrealized_pnl: 0.0,
            realized_pnl: 0.0,
            total_pnl: 0.0,
            trade_count: 0,
            win_rate: 0.0,
        }
    }

    /// Mark-to-market PnL of the open position at `price`. Zero when flat.
    pub fn unrealized_at(&self, price: f64) -> f64 {
        match self.position {
            Position::Neutral => 0.0,
            Position::Long => (price - self.entry_price) * self.position_size,
            Position::Short => (self.entry_price - price) * self.position_size,
        }
    }

    /// Re-marks the open position against `price` and keeps `total_pnl` in
    /// sync. Runs every tick regardless of trade activity.
    pub fn mark(&mut self, price: f64) {
        self.unrealized_pnl = self.unrealized_at(price);
        self.total_pnl = self.realized_pnl + self.unrealized_pnl;
    }

    /// Enters a position. Only legal from `Neutral`; the caller (the policy)
    /// never asks an agent with an open position to open another.
    pub fn open(&mut self, position: Position, price: f64, size: f64) {
        debug_assert_eq!(self.position, Position::Neutral);
        self.position = position;
        self.entry_price = price;
        self.position_size = size;
        // unrealized_pnl stays 0 until the next tick's re-mark.
    }

    /// Closes the open position, realizing `pnl`.
    ///
    /// The win rate is a running average updated with the pre-increment trade
    /// count: `(win_rate * n + win) / (n + 1)`.
    pub fn close(&mut self, pnl: f64) {
        let win = if pnl > 0.0 { 1.0 } else { 0.0 };
        let n = self.trade_count as f64;
        self.win_rate = (self.win_rate * n + win) / (n + 1.0);
        self.trade_count += 1;

        self.balance += pnl;
        self.realized_pnl += pnl;
        self.position = Position::Neutral;
        self.entry_price = 0.0;
        self.position_size = 0.0;
        self.unrealized_pnl = 0.0;
        self.total_pnl = self.realized_pnl;
    }

    pub fn holds_position_invariant(&self) -> bool {
        let flat = self.entry_price == 0.0 && self.position_size == 0.0;
        (self.position == Position::Neutral) == flat
    }
}
