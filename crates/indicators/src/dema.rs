use crate::ema::Ema;
use crate::moving_average::MovingAverage;
use rust_decimal::Decimal;
use streamta_core::{Indicator, IndicatorSeries, Numeric, Result, Series};
use tracing::debug;

/// Double Exponential Moving Average (DEMA).
///
/// `2 * EMA(price) - EMA(EMA(price))`. The outer EMA only sees results of
/// the inner one, so the first value appears after `2 * interval - 1` prices.
#[derive(Debug, Clone)]
pub struct Dema<T = Decimal> {
    len: usize,
    inner: Ema<T>,
    outer: Ema<T>,
    series: Series<T>,
}

pub type FasterDema = Dema<f64>;

impl<T: Numeric> Dema<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "DEMA interval must be > 0");
        Self {
            len: interval,
            inner: Ema::new(interval),
            outer: Ema::new(interval),
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Indicator for Dema<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        let inner = self.inner.update(price)?;
        let outer = self.outer.update(inner)?;
        if !self.series.is_stable() {
            debug!(interval = self.len, "DEMA stabilized");
        }
        let two = T::from_usize(2);
        Some(self.series.set(two * inner - outer))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Dema<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}

impl<T: Numeric> MovingAverage<T> for Dema<T> {
    fn interval(&self) -> usize {
        self.len
    }
}
