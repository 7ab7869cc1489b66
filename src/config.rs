// src/config.rs

//! A centralized place for tuning simulation parameters.

// --- Market (PriceProcess) ---
pub const BASE_PRICE: f64 = 50_000.0;
pub const DRIFT: f64 = 0.0001;
pub const VOLATILITY: f64 = 0.02;
pub const TICK_DT: f64 = 1.0;
// One tick in 20 carries a discrete news shock on top of the diffusion term.
pub const JUMP_PROBABILITY: f64 = 0.05;
pub const JUMP_STD_DEV: f64 = 0.01;
// Hard clamp on the price path. A deliberate simulation simplification to
// keep the path positive and bounded, not a realistic market constraint.
pub const PRICE_FLOOR: f64 = 0.5 * BASE_PRICE;
pub const PRICE_CEILING: f64 = 2.0 * BASE_PRICE;
pub const MARKET_HISTORY_CAP: usize = 1000;
// Synthetic per-tick volume is a uniform draw scaled into [0, VOLUME_SCALE).
pub const VOLUME_SCALE: f64 = 1_000_000.0;

// --- Indicators ---
pub const SMA_FAST_PERIOD: usize = 20;
pub const SMA_SLOW_PERIOD: usize = 50;
pub const RSI_PERIOD: usize = 14;
pub const RSI_NEUTRAL: f64 = 50.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

// --- Decision policy ---
// Take-profit / stop-loss thresholds, as percent of the agent's initial
// balance. Fixed policy constants shared by every agent.
pub const TAKE_PROFIT_PCT: f64 = 5.0;
pub const STOP_LOSS_PCT: f64 = -3.0;
// A flat agent only considers opening when a uniform draw falls below
// OPEN_GATE_SCALE * aggressiveness.
pub const OPEN_GATE_SCALE: f64 = 0.1;
// Position sizing: risk fraction of balance = base + scale * aggressiveness.
pub const RISK_PCT_BASE: f64 = 0.1;
pub const RISK_PCT_PER_AGGRESSIVENESS: f64 = 0.2;
pub const DEFAULT_AGGRESSIVENESS: f64 = 0.7;

// --- Arena ---
pub const INITIAL_BALANCE: f64 = 3_000.0;
pub const RECENT_TRADES_CAP: usize = 20;
