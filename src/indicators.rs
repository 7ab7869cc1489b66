// src/indicators.rs

//! Trend and momentum indicators over the bounded price history.
//!
//! Every function here is total: short or empty histories fall back to a
//! defined degenerate value instead of erroring.

use crate::config::{BASE_PRICE, RSI_NEUTRAL};

/// Arithmetic mean of the last `period` prices.
///
/// With fewer than `period` samples the most recent price stands in for the
/// average; an empty history yields [`BASE_PRICE`]. This is a defined
/// degenerate-case policy, not an error.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    match prices.last() {
        None => BASE_PRICE,
        Some(&last) if prices.len() < period => last,
        _ => {
            let window = &prices[prices.len() - period..];
            window.iter().sum::<f64>() / period as f64
        }
    }
}

/// Relative Strength Index over the last `period` price deltas.
///
/// Average gains vs. average loss magnitudes across the window, then
/// `RSI = 100 - 100 / (1 + gains/losses)`. A window with no losses reads
/// fully overbought (100); fewer than `period + 1` samples reads neutral (50).
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if prices.len() < period + 1 {
        return RSI_NEUTRAL;
    }
    let window = &prices[prices.len() - (period + 1)..];
    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in window.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }
    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sma_of_full_window_is_the_mean() {
        let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(sma(&prices, 5), 3.0);
        // Only the trailing window counts.
        assert_eq!(sma(&prices, 2), 4.5);
    }

    #[test]
    fn sma_short_history_falls_back_to_last_price() {
        let prices = vec![100.0, 101.0, 99.0];
        assert_eq!(sma(&prices, 20), 99.0);
    }

    #[test]
    fn sma_empty_history_falls_back_to_base_price() {
        assert_eq!(sma(&[], 20), BASE_PRICE);
    }

    #[test]
    fn rsi_neutral_when_history_is_short() {
        // 14 deltas need 15 samples; 14 samples is one short.
        let prices: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&prices, 14), 50.0);
    }

    #[test]
    fn rsi_is_exactly_100_with_no_losses() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&prices, 14), 100.0);
    }

    #[test]
    fn rsi_is_exactly_zero_with_no_gains() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        assert_eq!(rsi(&prices, 14), 0.0);
    }

    #[test]
    fn rsi_balanced_window_reads_midrange() {
        // Deltas alternate +2 / -1: avg gain 1.0, avg loss 0.5, RS = 2.
        let mut prices = vec![100.0];
        for i in 0..20 {
            let last = *prices.last().unwrap();
            prices.push(if i % 2 == 0 { last + 2.0 } else { last - 1.0 });
        }
        let value = rsi(&prices, 14);
        assert!(
            (value - (100.0 - 100.0 / 3.0)).abs() < 1e-9,
            "expected RSI 66.67, got {}",
            value
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn rsi_always_within_bounds(prices in prop::collection::vec(0.01f64..100_000.0, 0..120)) {
            let value = rsi(&prices, 14);
            prop_assert!((0.0..=100.0).contains(&value), "RSI out of bounds: {}", value);
        }

        #[test]
        fn sma_always_within_price_range(prices in prop::collection::vec(0.01f64..100_000.0, 1..120)) {
            let value = sma(&prices, 20);
            let lo = prices.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
        }
    }
}
