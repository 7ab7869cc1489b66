// src/arena.rs

//! The main simulation engine. It owns the world state (the price process
//! and the trader roster) and runs the per-tick interaction loop.

use crate::agents::policy::{DecisionPolicy, TradeAction};
use crate::agents::profile::DEFAULT_ROSTER;
use crate::agents::trader::TradingAgent;
use crate::clock::{Clock, SystemClock};
use crate::config::RECENT_TRADES_CAP;
use crate::random::{RandomSource, ThreadRandom};
use crate::simulators::gbm::PriceProcess;
use crate::types::snapshot::{ArenaSnapshot, ArenaStats};
use crate::types::trade::{Position, Trade, TradeKind};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::rc::Rc;

/// What one tick hands back to the driver: the full post-tick state plus the
/// trades generated during the tick (zero or more, at most one per agent).
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub snapshot: ArenaSnapshot,
    pub new_trades: Vec<Trade>,
}

/// Orchestrates one discrete simulation step: advance the price, evaluate
/// every agent in stable roster order, apply position changes, recompute
/// aggregate stats, and emit a self-consistent snapshot.
///
/// Entirely synchronous and single-threaded. The driving cadence is the
/// caller's policy; the simulator behaves identically under regular,
/// irregular, or test-controlled invocation.
pub struct ArenaSimulator {
    price_process: PriceProcess,
    policy: DecisionPolicy,
    agents: Vec<TradingAgent>,
    recent_trades: VecDeque<Trade>,
    stats: ArenaStats,
    joined_team: Option<String>,
    last_updated_ms: i64,
}

impl ArenaSimulator {
    /// Fresh arena with ambient randomness and the wall clock.
    pub fn new() -> Self {
        Self::with_sources(
            Box::new(ThreadRandom::new()),
            Box::new(ThreadRandom::new()),
            Rc::new(SystemClock),
        )
    }

    /// Fresh arena with explicit randomness and time sources. This is the
    /// seam deterministic tests drive.
    pub fn with_sources(
        price_rng: Box<dyn RandomSource>,
        policy_rng: Box<dyn RandomSource>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let agents: Vec<TradingAgent> =
            DEFAULT_ROSTER.iter().map(TradingAgent::from_roster).collect();
        let price_process = PriceProcess::new(price_rng, clock);
        let stats = Self::compute_stats(&agents, price_process.current_price(), 0.0);
        Self {
            price_process,
            policy: DecisionPolicy::new(policy_rng),
            agents,
            recent_trades: VecDeque::with_capacity(RECENT_TRADES_CAP),
            stats,
            joined_team: None,
            last_updated_ms: 0,
        }
    }

    /// Resumes a persisted session. An absent snapshot and a fresh reset are
    /// interchangeable; this is for the present case.
    pub fn from_snapshot(snapshot: ArenaSnapshot) -> Self {
        let mut arena = Self::new();
        arena.restore(snapshot);
        arena
    }

    /// Replaces the arena's state with a persisted snapshot. Price
    /// continuity resumes from the snapshot's current price with fresh
    /// randomness.
    pub fn restore(&mut self, snapshot: ArenaSnapshot) {
        self.price_process
            .restore(&snapshot.market_data, snapshot.current_price);
        self.agents = snapshot.agents;
        self.recent_trades = snapshot.recent_trades.into_iter().collect();
        self.stats = snapshot.stats;
        self.joined_team = snapshot.joined_team;
        self.last_updated_ms = snapshot.last_updated_ms;
    }

    /// One tick: new price, every agent marked and asked to act, stats
    /// recomputed. No partial agent update is ever observable outside a
    /// completed call.
    pub fn step(&mut self) -> StepOutcome {
        let sample = self.price_process.next_sample();
        let price = sample.price;
        let history = self.price_process.price_history();

        let mut new_trades = Vec::new();
        for agent in self.agents.iter_mut() {
            agent.mark(price);
            match self.policy.decide(agent, price, &history) {
                Some(TradeAction::Close { pnl }) => {
                    let size = agent.position_size;
                    agent.close(pnl);
                    new_trades.push(Trade {
                        agent_id: agent.id.clone(),
                        kind: TradeKind::Close,
                        price,
                        size,
                        timestamp_ms: sample.timestamp_ms,
                        pnl: Some(pnl),
                    });
                }
                Some(TradeAction::Open { position, size }) => {
                    agent.open(position, price, size);
                    new_trades.push(Trade {
                        agent_id: agent.id.clone(),
                        kind: match position {
                            Position::Long => TradeKind::Long,
                            _ => TradeKind::Short,
                        },
                        price,
                        size,
                        timestamp_ms: sample.timestamp_ms,
                        pnl: None,
                    });
                }
                None => {}
            }
        }

        for trade in &new_trades {
            self.recent_trades.push_front(trade.clone());
        }
        self.recent_trades.truncate(RECENT_TRADES_CAP);

        self.stats = Self::compute_stats(&self.agents, price, sample.volatility);
        self.last_updated_ms = sample.timestamp_ms;

        StepOutcome {
            snapshot: self.snapshot(),
            new_trades,
        }
    }

    /// Back to the fixed starting roster, an empty market, and zeroed stats.
    pub fn reset(&mut self) {
        self.agents = DEFAULT_ROSTER.iter().map(TradingAgent::from_roster).collect();
        self.price_process.reset();
        self.recent_trades.clear();
        self.stats = Self::compute_stats(&self.agents, self.price_process.current_price(), 0.0);
        self.last_updated_ms = 0;
    }

    /// The current state as the serializable unit exchanged with persistence
    /// and the UI.
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            agents: self.agents.clone(),
            market_data: self.price_process.samples(),
            current_price: self.price_process.current_price(),
            stats: self.stats.clone(),
            recent_trades: self.recent_trades.iter().cloned().collect(),
            joined_team: self.joined_team.clone(),
            last_updated_ms: self.last_updated_ms,
        }
    }

    /// Derived aggregate state; always recomputed, never mutated in place.
    /// Performer ranking sorts by total PnL descending only, so ties keep
    /// the roster order.
    fn compute_stats(agents: &[TradingAgent], price: f64, volatility: f64) -> ArenaStats {
        let total_bank_value = agents.iter().map(|a| a.balance + a.unrealized_pnl).sum();
        let total_trades = agents.iter().map(|a| a.trade_count).sum();
        let avg_win_rate = if agents.is_empty() {
            0.0
        } else {
            agents.iter().map(|a| a.win_rate).sum::<f64>() / agents.len() as f64
        };

        let mut ranked: Vec<&TradingAgent> = agents.iter().collect();
        ranked.sort_by(|a, b| {
            b.total_pnl
                .partial_cmp(&a.total_pnl)
                .unwrap_or(Ordering::Equal)
        });

        ArenaStats {
            total_bank_value,
            total_trades,
            avg_win_rate,
            market_price: price,
            market_volatility: volatility,
            top_performer: ranked.first().map(|a| a.name.clone()).unwrap_or_default(),
            bottom_performer: ranked.last().map(|a| a.name.clone()).unwrap_or_default(),
        }
    }

    pub fn agents(&self) -> &[TradingAgent] {
        &self.agents
    }

    pub fn stats(&self) -> &ArenaStats {
        &self.stats
    }

    pub fn current_price(&self) -> f64 {
        self.price_process.current_price()
    }

    pub fn set_joined_team(&mut self, team: Option<String>) {
        self.joined_team = team;
    }
}

impl Default for ArenaSimulator {
    fn default() -> Self {
        Self::new()
    }
}
