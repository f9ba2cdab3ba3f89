use crate::bands::BandsResult;
use crate::sma::Sma;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{stats, Indicator, IndicatorError, Numeric, Result};

/// Bollinger Bands (BBANDS).
///
/// The middle band is the SMA of the interval, the outer bands sit a multiple
/// of the population standard deviation above and below it. Only the SMA's
/// window of prices is kept.
#[derive(Debug, Clone)]
pub struct BollingerBands<T = Decimal> {
    deviation_multiplier: T,
    sma: Sma<T>,
    result: Option<BandsResult<T>>,
}

pub type FasterBollingerBands = BollingerBands<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    pub interval: usize,
    pub deviation_multiplier: Decimal,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            interval: 20,
            deviation_multiplier: Decimal::TWO,
        }
    }
}

impl<T: Numeric> BollingerBands<T> {
    pub fn new(interval: usize, deviation_multiplier: T) -> Self {
        assert!(interval > 0, "Bollinger Bands interval must be > 0");
        Self {
            deviation_multiplier,
            sma: Sma::new(interval),
            result: None,
        }
    }

    pub fn from_config(config: &BollingerConfig) -> Self {
        Self::new(config.interval, T::from_decimal(config.deviation_multiplier))
    }

    /// Standard Bollinger Bands (20, 2).
    pub fn default_periods() -> Self {
        Self::from_config(&BollingerConfig::default())
    }

    pub fn interval(&self) -> usize {
        self.sma.prices().capacity()
    }
}

impl<T: Numeric> Indicator for BollingerBands<T> {
    type Input = T;
    type Output = BandsResult<T>;

    fn update(&mut self, price: T) -> Option<BandsResult<T>> {
        let middle = self.sma.update(price)?;
        let deviation = stats::standard_deviation(self.sma.prices(), Some(middle));
        let offset = self.deviation_multiplier * deviation;

        let result = BandsResult {
            upper: middle + offset,
            middle,
            lower: middle - offset,
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
