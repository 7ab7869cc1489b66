// src/simulators/gbm.rs

//! Stochastic price-path generator: geometric Brownian motion with a jump
//! component, clamped to a fixed band around the base price.

use crate::clock::Clock;
use crate::config::{
    BASE_PRICE, DRIFT, JUMP_PROBABILITY, JUMP_STD_DEV, MARKET_HISTORY_CAP, PRICE_CEILING,
    PRICE_FLOOR, TICK_DT, VOLATILITY, VOLUME_SCALE,
};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;

/// One tick of market data. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSample {
    pub price: f64,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub volume: f64,
    /// Absolute one-tick return, |ΔS| / S.
    pub volatility: f64,
}

/// Generates the next market price from nothing but its own retained last
/// price and the injected randomness. Total: never fails.
pub struct PriceProcess {
    base_price: f64,
    last_price: f64,
    history: VecDeque<MarketSample>,
    rng: Box<dyn RandomSource>,
    clock: Rc<dyn Clock>,
}

impl PriceProcess {
    pub fn new(rng: Box<dyn RandomSource>, clock: Rc<dyn Clock>) -> Self {
        Self {
            base_price: BASE_PRICE,
            last_price: BASE_PRICE,
            history: VecDeque::with_capacity(MARKET_HISTORY_CAP),
            rng,
            clock,
        }
    }

    /// Advances the path by one GBM step and returns the new sample.
    ///
    /// `ΔS = μ·S·dt + σ·S·Z·√dt` with `Z ~ N(0,1)`; with probability
    /// [`JUMP_PROBABILITY`] the candidate additionally takes a multiplicative
    /// news shock `(1 + E)`, `E ~ N(0, JUMP_STD_DEV)`. The result is clamped
    /// into `[PRICE_FLOOR, PRICE_CEILING]` — a deliberate simulation
    /// simplification that keeps the path positive and bounded.
    pub fn next_sample(&mut self) -> MarketSample {
        let s = self.last_price;
        let z = self.rng.next_normal();
        let delta = DRIFT * s * TICK_DT + VOLATILITY * s * z * TICK_DT.sqrt();
        let mut next = s + delta;

        if self.rng.next_uniform() < JUMP_PROBABILITY {
            let shock = JUMP_STD_DEV * self.rng.next_normal();
            next *= 1.0 + shock;
        }

        let next = next.clamp(PRICE_FLOOR, PRICE_CEILING);
        let sample = MarketSample {
            price: next,
            timestamp_ms: self.clock.now_ms(),
            volume: self.rng.next_uniform() * VOLUME_SCALE,
            volatility: (next - s).abs() / s,
        };

        self.last_price = next;
        self.push(sample.clone());
        sample
    }

    fn push(&mut self, sample: MarketSample) {
        if self.history.len() == MARKET_HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(sample);
    }

    pub fn current_price(&self) -> f64 {
        self.last_price
    }

    /// The retained price series, oldest first. This is the window the
    /// indicator functions read.
    pub fn price_history(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.price).collect()
    }

    /// The retained samples, oldest first.
    pub fn samples(&self) -> Vec<MarketSample> {
        self.history.iter().cloned().collect()
    }

    /// Rebuilds the buffer and last price from externally supplied prices,
    /// synthesizing timestamps spaced one second apart ending now. Used when
    /// resuming from a persisted price series.
    pub fn set_history(&mut self, prices: &[f64]) {
        self.history.clear();
        let tail_start = prices.len().saturating_sub(MARKET_HISTORY_CAP);
        let tail = &prices[tail_start..];
        let now = self.clock.now_ms();
        let mut prev = tail.first().copied().unwrap_or(self.base_price);
        for (i, &price) in tail.iter().enumerate() {
            let age = (tail.len() - 1 - i) as i64;
            self.history.push_back(MarketSample {
                price,
                timestamp_ms: now - age * 1_000,
                volume: 0.0,
                volatility: if prev > 0.0 {
                    (price - prev).abs() / prev
                } else {
                    0.0
                },
            });
            prev = price;
        }
        self.last_price = tail.last().copied().unwrap_or(self.base_price);
    }

    /// Restores the buffer from fully-formed samples and resumes price
    /// continuity from `current_price`. RNG state is not restored; the path
    /// continues with fresh randomness.
    pub fn restore(&mut self, samples: &[MarketSample], current_price: f64) {
        self.history.clear();
        let tail_start = samples.len().saturating_sub(MARKET_HISTORY_CAP);
        self.history.extend(samples[tail_start..].iter().cloned());
        self.last_price = current_price;
    }

    /// Back to the base price with an empty history.
    pub fn reset(&mut self) {
        self.last_price = self.base_price;
        self.history.clear();
    }
}
