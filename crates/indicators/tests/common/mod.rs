//! Shared fixtures for the integration tests.
//!
//! Prices and candles are the Tulip Indicators reference data set.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use streamta_indicators::{Candle, HighLowClose};

#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[allow(dead_code)]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap()
}

#[allow(dead_code)]
pub fn tulip_prices() -> Vec<Decimal> {
    tulip_candles().into_iter().map(|c| c.close).collect()
}

#[allow(dead_code)]
pub fn tulip_candles() -> Vec<HighLowClose> {
    [
        (dec!(82.15), dec!(81.29), dec!(81.59)),
        (dec!(81.89), dec!(80.64), dec!(81.06)),
        (dec!(83.03), dec!(81.31), dec!(82.87)),
        (dec!(83.30), dec!(82.65), dec!(83.00)),
        (dec!(83.85), dec!(83.07), dec!(83.61)),
        (dec!(83.90), dec!(83.11), dec!(83.15)),
        (dec!(83.33), dec!(82.49), dec!(82.84)),
        (dec!(84.30), dec!(82.30), dec!(83.99)),
        (dec!(84.84), dec!(84.15), dec!(84.55)),
        (dec!(85.00), dec!(84.11), dec!(84.36)),
        (dec!(85.90), dec!(84.03), dec!(85.53)),
        (dec!(86.58), dec!(85.39), dec!(86.54)),
        (dec!(86.98), dec!(85.76), dec!(86.89)),
        (dec!(88.00), dec!(87.17), dec!(87.77)),
        (dec!(87.87), dec!(87.01), dec!(87.29)),
    ]
    .into_iter()
    .map(|(high, low, close)| HighLowClose::new(high, low, close))
    .collect()
}

#[allow(dead_code)]
pub fn tulip_candles_f64() -> Vec<HighLowClose<f64>> {
    tulip_candles()
        .into_iter()
        .map(|c| HighLowClose::new(to_f64(c.high), to_f64(c.low), to_f64(c.close)))
        .collect()
}

/// Tulip candles with a synthetic volume, for volume based indicators.
#[allow(dead_code)]
pub fn tulip_ohlcv() -> Vec<Candle> {
    tulip_candles()
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let volume = Decimal::from(1000 + (i as u32 % 4) * 250);
            Candle::new(c.close, c.high, c.low, c.close, volume)
        })
        .collect()
}
