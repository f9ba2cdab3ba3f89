use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{FixedWindow, Indicator, IndicatorError, Numeric, Result};
use tracing::debug;

/// MACD (Moving Average Convergence Divergence).
///
/// Composed of three moving averages of the same kind (EMA by default):
/// - Short (default 12)
/// - Long (default 26)
/// - Signal over the MACD line (default 9)
///
/// Produces a result only once a full long interval of prices has been seen
/// and all three averages are stable.
#[derive(Debug)]
pub struct Macd<T = Decimal> {
    prices: FixedWindow<T>,
    short: Box<dyn MovingAverage<T>>,
    long: Box<dyn MovingAverage<T>>,
    signal: Box<dyn MovingAverage<T>>,
    result: Option<MacdResult<T>>,
}

pub type FasterMacd = Macd<f64>;

/// MACD output with all three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdResult<T = Decimal> {
    pub macd: T,
    pub signal: T,
    pub histogram: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdConfig {
    pub short_interval: usize,
    pub long_interval: usize,
    pub signal_interval: usize,
    /// "ema" or "dema" in the classic definition; any kind is accepted.
    pub smoothing: MovingAverageKind,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            short_interval: 12,
            long_interval: 26,
            signal_interval: 9,
            smoothing: MovingAverageKind::Ema,
        }
    }
}

impl<T: Numeric> Macd<T> {
    pub fn new(short_interval: usize, long_interval: usize, signal_interval: usize) -> Self {
        Self::from_config(&MacdConfig {
            short_interval,
            long_interval,
            signal_interval,
            smoothing: MovingAverageKind::Ema,
        })
    }

    pub fn from_config(config: &MacdConfig) -> Self {
        assert!(
            config.short_interval < config.long_interval,
            "Short interval must be less than long interval"
        );
        assert!(config.signal_interval > 0, "MACD signal interval must be > 0");
        Self {
            prices: FixedWindow::new(config.long_interval),
            short: config.smoothing.build(config.short_interval),
            long: config.smoothing.build(config.long_interval),
            signal: config.smoothing.build(config.signal_interval),
            result: None,
        }
    }

    /// Standard MACD (12, 26, 9).
    pub fn default_periods() -> Self {
        Self::from_config(&MacdConfig::default())
    }

    /// The latest raw prices, at most one long interval.
    pub fn prices(&self) -> &FixedWindow<T> {
        &self.prices
    }

    pub fn short(&self) -> &dyn MovingAverage<T> {
        self.short.as_ref()
    }

    pub fn long(&self) -> &dyn MovingAverage<T> {
        self.long.as_ref()
    }
}

impl<T: Numeric> Indicator for Macd<T> {
    type Input = T;
    type Output = MacdResult<T>;

    fn update(&mut self, price: T) -> Option<MacdResult<T>> {
        self.prices.push(price);
        let short = self.short.update(price);
        let long = self.long.update(price);

        if !self.prices.is_full() {
            return None;
        }
        let macd = short? - long?;
        let signal = self.signal.update(macd)?;

        let result = MacdResult {
            macd,
            signal,
            histogram: macd - signal,
        };
        if self.result.is_none() {
            debug!(
                short = self.short.interval(),
                long = self.long.interval(),
                signal = self.signal.interval(),
                "MACD stabilized"
            );
        }
        self.result = Some(result);
        Some(result)
    }

    fn result(&self) -> Result<MacdResult<T>> {
        self.result.ok_or(IndicatorError::NotEnoughData)
    }

    fn is_stable(&self) -> bool {
        self.result.is_some()
    }
}
