//! Shared Tulip Indicators reference data for unit tests.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use streamta_core::HighLowClose;

pub fn prices() -> Vec<Decimal> {
    vec![
        dec!(81.59), dec!(81.06), dec!(82.87), dec!(83.0), dec!(83.61), dec!(83.15),
        dec!(82.84), dec!(83.99), dec!(84.55), dec!(84.36), dec!(85.53), dec!(86.54),
        dec!(86.89), dec!(87.77), dec!(87.29),
    ]
}

pub fn candles() -> Vec<HighLowClose> {
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

pub fn to_f64(candle: HighLowClose) -> HighLowClose<f64> {
    HighLowClose::new(
        candle.high.to_f64().unwrap(),
        candle.low.to_f64().unwrap(),
        candle.close.to_f64().unwrap(),
    )
}

/// Round every value to `dp` decimal places so fixtures can be compared exactly.
pub fn rounded(values: &[Decimal], dp: u32) -> Vec<Decimal> {
    values.iter().map(|v| v.round_dp(dp)).collect()
}
