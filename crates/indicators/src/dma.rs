use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{Indicator, IndicatorError, Numeric, Result};

/// Dual Moving Average (DMA).
///
/// A short and a long moving average of the same kind over one price stream.
/// Crossings of the two are the classic trend signal.
#[derive(Debug)]
pub struct Dma<T = Decimal> {
    short: Box<dyn MovingAverage<T>>,
    long: Box<dyn MovingAverage<T>>,
    result: Option<DmaResult<T>>,
}

pub type FasterDma = Dma<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DmaResult<T = Decimal> {
    pub short: T,
    pub long: T,
}

impl<T: Numeric> DmaResult<T> {
    /// Short average above the long one.
    pub fn is_bullish(&self) -> bool {
        self.short > self.long
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmaConfig {
    pub short_interval: usize,
    pub long_interval: usize,
    pub smoothing: MovingAverageKind,
}

impl Default for DmaConfig {
    fn default() -> Self {
        Self {
            short_interval: 10,
            long_interval: 20,
            smoothing: MovingAverageKind::Sma,
        }
    }
}

impl<T: Numeric> Dma<T> {
    pub fn new(short_interval: usize, long_interval: usize) -> Self {
        Self::with_smoothing(short_interval, long_interval, MovingAverageKind::Sma)
    }

    pub fn with_smoothing(
        short_interval: usize,
        long_interval: usize,
        kind: MovingAverageKind,
    ) -> Self {
        assert!(short_interval > 0, "DMA short interval must be > 0");
        assert!(long_interval > 0, "DMA long interval must be > 0");
        Self {
            short: kind.build(short_interval),
            long: kind.build(long_interval),
            result: None,
        }
    }

    pub fn from_config(config: &DmaConfig) -> Self {
        Self::with_smoothing(config.short_interval, config.long_interval, config.smoothing)
    }

    pub fn short(&self) -> &dyn MovingAverage<T> {
        self.short.as_ref()
    }

    pub fn long(&self) -> &dyn MovingAverage<T> {
        self.long.as_ref()
    }
}

impl<T: Numeric> Indicator for Dma<T> {
    type Input = T;
    type Output = DmaResult<T>;

    fn update(&mut self, price: T) -> Option<DmaResult<T>> {
        let short = self.short.update(price);
        let long = self.long.update(price);
        let result = DmaResult {
            short: short?,
            long: long?,
        };
        self.result = Some(result);
        Some(result)
    }

    fn result(&self) -> Result<DmaResult<T>> {
        self.result.ok_or(IndicatorError::NotEnoughData)
    }

    fn is_stable(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn prices() -> [Decimal; 6] {
        [dec!(41), dec!(37), dec!(20.9), dec!(100), dec!(30.71), dec!(30)]
    }

    #[test]
    fn test_dma_with_sma() {
        let mut dma = Dma::new(3, 6);
        for price in prices() {
            dma.update(price);
        }
        let result = dma.result().unwrap();
        assert_eq!(result.short.round_dp(8), dec!(53.57000000));
        assert_eq!(result.long.round_dp(8), dec!(43.26833333));
        assert!(result.is_bullish());
    }

    #[test]
    fn test_dma_with_ema() {
        let mut dma = Dma::with_smoothing(3, 6, MovingAverageKind::Ema);
        for price in prices() {
            dma.update(price);
        }
        let result = dma.result().unwrap();
        assert_eq!(result.short.round_dp(8), dec!(39.29833333));
        assert_eq!(result.long.round_dp(8), dec!(43.26833333));
        assert!(!result.is_bullish());
    }

    #[test]
    fn test_dma_stability_depends_on_long_interval() {
        let mut dma = FasterDma::new(3, 5);
        for price in [40.0, 30.0, 20.0, 10.0] {
            dma.update(price);
            assert!(!dma.is_stable());
        }
        dma.update(30.0);
        assert!(dma.is_stable());
        assert_eq!(dma.short().interval(), 3);
        assert_eq!(dma.long().interval(), 5);
    }
}
