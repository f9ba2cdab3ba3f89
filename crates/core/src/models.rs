use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Update inputs
// ---------------------------------------------------------------------------

/// High and low of a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLow<T = Decimal> {
    pub high: T,
    pub low: T,
}

/// High, low and close of a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLowClose<T = Decimal> {
    pub high: T,
    pub low: T,
    pub close: T,
}

/// A single OHLCV candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle<T = Decimal> {
    pub open: T,
    pub high: T,
    pub low: T,
    pub close: T,
    pub volume: T,
}

impl<T> HighLow<T> {
    pub fn new(high: T, low: T) -> Self {
        Self { high, low }
    }
}

impl<T> HighLowClose<T> {
    pub fn new(high: T, low: T, close: T) -> Self {
        Self { high, low, close }
    }
}

impl<T> Candle<T> {
    pub fn new(open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

impl<T> From<Candle<T>> for HighLowClose<T> {
    fn from(candle: Candle<T>) -> Self {
        Self {
            high: candle.high,
            low: candle.low,
            close: candle.close,
        }
    }
}

impl<T> From<Candle<T>> for HighLow<T> {
    fn from(candle: Candle<T>) -> Self {
        Self {
            high: candle.high,
            low: candle.low,
        }
    }
}

impl<T> From<HighLowClose<T>> for HighLow<T> {
    fn from(candle: HighLowClose<T>) -> Self {
        Self {
            high: candle.high,
            low: candle.low,
        }
    }
}
