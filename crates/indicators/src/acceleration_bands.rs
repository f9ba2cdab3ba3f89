use crate::bands::BandsResult;
use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{HighLowClose, Indicator, IndicatorError, Numeric, Result};

/// Acceleration Bands (ABANDS) by Price Headley.
///
/// With `factor = width * (high - low) / (high + low)`:
/// upper = MA(high * (1 + factor)), lower = MA(low * (1 - factor)) and
/// middle = MA(close). All three bands share one interval and smoothing kind.
#[derive(Debug)]
pub struct AccelerationBands<T = Decimal> {
    width: T,
    lower_band: Box<dyn MovingAverage<T>>,
    middle_band: Box<dyn MovingAverage<T>>,
    upper_band: Box<dyn MovingAverage<T>>,
    result: Option<BandsResult<T>>,
}

pub type FasterAccelerationBands = AccelerationBands<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelerationBandsConfig {
    pub interval: usize,
    pub width: Decimal,
    pub smoothing: MovingAverageKind,
}

impl Default for AccelerationBandsConfig {
    fn default() -> Self {
        Self {
            interval: 20,
            width: Decimal::from(4),
            smoothing: MovingAverageKind::Sma,
        }
    }
}

impl<T: Numeric> AccelerationBands<T> {
    pub fn new(interval: usize, width: T) -> Self {
        Self::with_smoothing(interval, width, MovingAverageKind::Sma)
    }

    pub fn with_smoothing(interval: usize, width: T, kind: MovingAverageKind) -> Self {
        assert!(interval > 0, "Acceleration Bands interval must be > 0");
        Self {
            width,
            lower_band: kind.build(interval),
            middle_band: kind.build(interval),
            upper_band: kind.build(interval),
            result: None,
        }
    }

    pub fn from_config(config: &AccelerationBandsConfig) -> Self {
        Self::with_smoothing(config.interval, T::from_decimal(config.width), config.smoothing)
    }
}

impl<T: Numeric> Indicator for AccelerationBands<T> {
    type Input = HighLowClose<T>;
    type Output = BandsResult<T>;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<BandsResult<T>> {
        let sum = candle.high + candle.low;
        let factor = if sum.is_zero() {
            T::ZERO
        } else {
            self.width * (candle.high - candle.low) / sum
        };

        let lower = self.lower_band.update(candle.low * (T::ONE - factor));
        let middle = self.middle_band.update(candle.close);
        let upper = self.upper_band.update(candle.high * (T::ONE + factor));

        let result = BandsResult {
            upper: upper?,
            middle: middle?,
            lower: lower?,
        };
        self.result = Some(result);
        Some(result)
    }

    fn result(&self) -> Result<BandsResult<T>> {
        self.result.ok_or(IndicatorError::NotEnoughData)
    }

    fn is_stable(&self) -> bool {
        self.result.is_some()
    }
}
