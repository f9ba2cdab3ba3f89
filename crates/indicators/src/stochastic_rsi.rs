use crate::moving_average::MovingAverageKind;
use crate::rsi::Rsi;
use crate::sma::Sma;
use crate::stochastic::StochasticResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{stats, FixedWindow, Indicator, IndicatorError, Numeric, Result, Series};
use tracing::debug;

/// Stochastic RSI (StochRSI).
///
/// Applies the stochastic formula to an [`Rsi`] stream instead of prices:
/// raw = 100 * (RSI - min RSI) / (max RSI - min RSI) over `interval` RSI
/// values, then smoothed into %K and %D like the oscillator. A flat RSI range
/// yields 100.
///
/// Lifetime extremes are tracked over %K.
#[derive(Debug)]
pub struct StochasticRsi<T = Decimal> {
    rsi: Rsi<T>,
    period: FixedWindow<T>,
    stoch_k: Sma<T>,
    stoch_d: Sma<T>,
    result: Option<StochasticResult<T>>,
    k_series: Series<T>,
}

pub type FasterStochasticRsi = StochasticRsi<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticRsiConfig {
    pub interval: usize,
    pub k_smoothing: usize,
    pub d_interval: usize,
    /// Smoothing used inside the RSI.
    pub smoothing: MovingAverageKind,
}

impl Default for StochasticRsiConfig {
    fn default() -> Self {
        Self {
            interval: 14,
            k_smoothing: 3,
            d_interval: 3,
            smoothing: MovingAverageKind::Wsma,
        }
    }
}

impl<T: Numeric> StochasticRsi<T> {
    pub fn new(interval: usize, k_smoothing: usize, d_interval: usize) -> Self {
        Self::from_config(&StochasticRsiConfig {
            interval,
            k_smoothing,
            d_interval,
            ..StochasticRsiConfig::default()
        })
    }

    pub fn from_config(config: &StochasticRsiConfig) -> Self {
        assert!(config.interval > 0, "Stochastic RSI interval must be > 0");
        Self {
            rsi: Rsi::with_smoothing(config.interval, config.smoothing),
            period: FixedWindow::new(config.interval),
            stoch_k: Sma::new(config.k_smoothing),
            stoch_d: Sma::new(config.d_interval),
            result: None,
            k_series: Series::new(),
        }
    }

    pub fn rsi(&self) -> &Rsi<T> {
        &self.rsi
    }

    /// Highest %K produced so far.
    pub fn highest(&self) -> Option<T> {
        self.k_series.highest()
    }

    /// Lowest %K produced so far.
    pub fn lowest(&self) -> Option<T> {
        self.k_series.lowest()
    }
}

impl<T: Numeric> Indicator for StochasticRsi<T> {
    type Input = T;
    type Output = StochasticResult<T>;

    fn update(&mut self, price: T) -> Option<StochasticResult<T>> {
        let rsi = self.rsi.update(price)?;
        self.period.push(rsi);
        if !self.period.is_full() {
            return None;
        }

        let hundred = T::from_usize(100);
        let highest = stats::maximum(&self.period)?;
        let lowest = stats::minimum(&self.period)?;
        let range = highest - lowest;
        let raw = if range.is_zero() {
            hundred
        } else {
            (rsi - lowest) / range * hundred
        };

        let stoch_k = self.stoch_k.update(raw)?;
        let stoch_d = self.stoch_d.update(stoch_k)?;
        if self.result.is_none() {
            debug!(interval = self.period.capacity(), "Stochastic RSI stabilized");
        }

        self.k_series.set(stoch_k);
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
