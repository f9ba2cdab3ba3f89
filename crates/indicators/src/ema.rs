use crate::moving_average::MovingAverage;
use crate::sma::Sma;
use rust_decimal::Decimal;
use streamta_core::{Indicator, IndicatorSeries, Numeric, Result, Series};

/// Exponential Moving Average (EMA).
///
/// Smoothing factor is `2 / (interval + 1)`. The first `interval` prices are
/// averaged by an internal SMA to seed the EMA.
#[derive(Debug, Clone)]
pub struct Ema<T = Decimal> {
    len: usize,
    multiplier: T,
    /// Accumulates values for the initial SMA seed.
    seed: Sma<T>,
    series: Series<T>,
}

pub type FasterEma = Ema<f64>;

impl<T: Numeric> Ema<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "EMA interval must be > 0");
        let multiplier = T::from_ratio(2, interval + 1);
        Self {
            len: interval,
            multiplier,
            seed: Sma::new(interval),
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Indicator for Ema<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        match self.series.value() {
            Some(prev) => {
                let ema = (price - prev) * self.multiplier + prev;
                Some(self.series.set(ema))
            }
            None => {
                let sma = self.seed.update(price)?;
                Some(self.series.set(sma))
            }
        }
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Ema<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}

impl<T: Numeric> MovingAverage<T> for Ema<T> {
    fn interval(&self) -> usize {
        self.len
    }
}
