// src/agents/policy.rs

//! Per-agent trading rule: close on take-profit/stop-loss, otherwise gate a
//! possible open on an aggressiveness-scaled coin flip and a trend read.

use crate::agents::trader::TradingAgent;
use crate::config::{
    OPEN_GATE_SCALE, RISK_PCT_BASE, RISK_PCT_PER_AGGRESSIVENESS, RSI_OVERBOUGHT, RSI_OVERSOLD,
    RSI_PERIOD, SMA_FAST_PERIOD, SMA_SLOW_PERIOD, STOP_LOSS_PCT, TAKE_PROFIT_PCT,
};
use crate::indicators::{rsi, sma};
use crate::random::RandomSource;
use crate::types::trade::Position;

/// What an agent does this tick. Absence of an action is a hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeAction {
    Open { position: Position, size: f64 },
    Close { pnl: f64 },
}

/// The decision rule shared by every agent. Personality enters only through
/// the agent's [`AgentProfile`](crate::agents::profile::AgentProfile).
///
/// State machine per agent: `Neutral -> {Long, Short} -> Neutral`. An agent
/// holding a position can only close or hold; a flat agent can only open or
/// hold. Every input state maps to a defined output, so this has no error
/// paths.
pub struct DecisionPolicy {
    rng: Box<dyn RandomSource>,
}

impl DecisionPolicy {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    pub fn decide(
        &mut self,
        agent: &TradingAgent,
        price: f64,
        history: &[f64],
    ) -> Option<TradeAction> {
        if agent.position != Position::Neutral {
            return self.consider_close(agent, price);
        }
        self.consider_open(agent, price, history)
    }

    /// Take-profit / stop-loss check, as percent of the initial balance.
    /// Thresholds fire inclusively, so a gain of exactly the take-profit
    /// percent closes the position.
    fn consider_close(&mut self, agent: &TradingAgent, price: f64) -> Option<TradeAction> {
        let pnl = agent.unrealized_at(price);
        let pnl_pct = pnl / agent.initial_balance * 100.0;
        if pnl_pct >= TAKE_PROFIT_PCT || pnl_pct <= STOP_LOSS_PCT {
            return Some(TradeAction::Close { pnl });
        }
        None
    }

    fn consider_open(
        &mut self,
        agent: &TradingAgent,
        price: f64,
        history: &[f64],
    ) -> Option<TradeAction> {
        // The gate randomizes how often an agent even looks at the market,
        // independent of signal quality.
        if self.rng.next_uniform() >= OPEN_GATE_SCALE * agent.profile.aggressiveness {
            return None;
        }

        let sma_fast = sma(history, SMA_FAST_PERIOD);
        let sma_slow = sma(history, SMA_SLOW_PERIOD);
        let momentum = rsi(history, RSI_PERIOD);

        let mut go_long = sma_fast > sma_slow && momentum < RSI_OVERBOUGHT;
        let mut go_short = sma_fast < sma_slow && momentum > RSI_OVERSOLD;
        if agent.profile.mean_reversion {
            // Independent OR-overlay: fade RSI extremes.
            if momentum > RSI_OVERBOUGHT {
                go_short = true;
            }
            if momentum < RSI_OVERSOLD {
                go_long = true;
            }
        }

        // Long wins the tie-break; checked before short.
        let position = if go_long {
            Position::Long
        } else if go_short {
            Position::Short
        } else {
            return None;
        };

        let risk_pct = RISK_PCT_BASE + agent.profile.aggressiveness * RISK_PCT_PER_AGGRESSIVENESS;
        let size = agent.balance * risk_pct / price;
        Some(TradeAction::Open { position, size })
    }
}
