use crate::sma::Sma;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{stats, FixedWindow, HighLowClose, Indicator, IndicatorError, Numeric, Result};
use tracing::debug;

/// Stochastic Oscillator (%K and %D).
///
/// Raw %K = (Close - Lowest Low) / (Highest High - Lowest Low) * 100 over
/// `k_interval` candles, %K = SMA(raw %K, k_smoothing) and
/// %D = SMA(%K, d_interval). A flat range yields a raw %K of zero.
#[derive(Debug, Clone)]
pub struct StochasticOscillator<T = Decimal> {
    highs: FixedWindow<T>,
    lows: FixedWindow<T>,
    stoch_k: Sma<T>,
    stoch_d: Sma<T>,
    result: Option<StochasticResult<T>>,
}

pub type FasterStochasticOscillator = StochasticOscillator<f64>;

/// Output shared by the Stochastic Oscillator and the Stochastic RSI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StochasticResult<T = Decimal> {
    pub stoch_k: T,
    pub stoch_d: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticConfig {
    pub k_interval: usize,
    pub k_smoothing: usize,
    pub d_interval: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            k_interval: 14,
            k_smoothing: 3,
            d_interval: 3,
        }
    }
}

impl<T: Numeric> StochasticOscillator<T> {
    pub fn new(k_interval: usize, k_smoothing: usize, d_interval: usize) -> Self {
        assert!(k_interval > 0, "Stochastic %K interval must be > 0");
        Self {
            highs: FixedWindow::new(k_interval),
            lows: FixedWindow::new(k_interval),
            stoch_k: Sma::new(k_smoothing),
            stoch_d: Sma::new(d_interval),
            result: None,
        }
    }

    pub fn from_config(config: &StochasticConfig) -> Self {
        Self::new(config.k_interval, config.k_smoothing, config.d_interval)
    }

    /// Standard Stochastic (14, 3, 3).
    pub fn default_periods() -> Self {
        Self::from_config(&StochasticConfig::default())
    }
}

impl<T: Numeric> Indicator for StochasticOscillator<T> {
    type Input = HighLowClose<T>;
    type Output = StochasticResult<T>;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<StochasticResult<T>> {
        self.highs.push(candle.high);
        self.lows.push(candle.low);
        if !self.highs.is_full() {
            return None;
        }

        let highest = stats::maximum(&self.highs)?;
        let lowest = stats::minimum(&self.lows)?;
        let range = highest - lowest;
        let raw_k = if range.is_zero() {
            T::ZERO
        } else {
            (candle.close - lowest) / range * T::from_usize(100)
        };

        let stoch_k = self.stoch_k.update(raw_k)?;
        let stoch_d = self.stoch_d.update(stoch_k)?;
        if self.result.is_none() {
            debug!(k_interval = self.highs.capacity(), "Stochastic Oscillator stabilized");
        }

        let result = StochasticResult { stoch_k, stoch_d };
        self.result = Some(result);
        Some(result)
    }

    fn result(&self) -> Result<StochasticResult<T>> {
        self.result.ok_or(IndicatorError::NotEnoughData)
    }

    fn is_stable(&self) -> bool {
        self.result.is_some()
    }
}
