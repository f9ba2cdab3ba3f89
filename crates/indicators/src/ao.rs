use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streamta_core::{HighLow, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Awesome Oscillator (AO) by Bill Williams.
///
/// Short minus long moving average of the median price `(high + low) / 2`.
/// Crossing above zero means short term momentum rises faster than long term
/// momentum.
#[derive(Debug)]
pub struct Ao<T = Decimal> {
    short: Box<dyn MovingAverage<T>>,
    long: Box<dyn MovingAverage<T>>,
    series: Series<T>,
}

pub type FasterAo = Ao<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AoConfig {
    pub short_interval: usize,
    pub long_interval: usize,
    pub smoothing: MovingAverageKind,
}

impl Default for AoConfig {
    fn default() -> Self {
        Self {
            short_interval: 5,
            long_interval: 34,
            smoothing: MovingAverageKind::Sma,
        }
    }
}

impl<T: Numeric> Ao<T> {
    pub fn new(short_interval: usize, long_interval: usize) -> Self {
        Self::with_smoothing(short_interval, long_interval, MovingAverageKind::Sma)
    }

    pub fn with_smoothing(
        short_interval: usize,
        long_interval: usize,
        kind: MovingAverageKind,
    ) -> Self {
        assert!(short_interval > 0, "AO short interval must be > 0");
        assert!(long_interval > 0, "AO long interval must be > 0");
        Self {
            short: kind.build(short_interval),
            long: kind.build(long_interval),
            series: Series::new(),
        }
    }

    pub fn from_config(config: &AoConfig) -> Self {
        Self::with_smoothing(config.short_interval, config.long_interval, config.smoothing)
    }

    /// Standard AO (5, 34).
    pub fn default_periods() -> Self {
        Self::from_config(&AoConfig::default())
    }

    pub fn short(&self) -> &dyn MovingAverage<T> {
        self.short.as_ref()
    }

    pub fn long(&self) -> &dyn MovingAverage<T> {
        self.long.as_ref()
    }
}

impl<T: Numeric> Indicator for Ao<T> {
    type Input = HighLow<T>;
    type Output = T;

    fn update(&mut self, candle: HighLow<T>) -> Option<T> {
        let median = (candle.high + candle.low) / T::from_usize(2);
        let short = self.short.update(median);
        let long = self.long.update(median);
        let (short, long) = (short?, long?);
        Some(self.series.set(short - long))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Ao<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
