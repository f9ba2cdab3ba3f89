use crate::moving_average::MovingAverage;
use crate::sma::Sma;
use rust_decimal::Decimal;
use streamta_core::{Indicator, IndicatorSeries, Numeric, Result, Series};

/// Wilder's Smoothed Moving Average (WSMA).
///
/// Also known as SMMA, MEMA or RMA. Behaves like an EMA with a smoothing
/// factor of `1 / interval`, so it reacts more slowly to price changes.
/// Seeded by an SMA over the first `interval` prices.
#[derive(Debug, Clone)]
pub struct Wsma<T = Decimal> {
    len: usize,
    seed: Sma<T>,
    series: Series<T>,
}

pub type FasterWsma = Wsma<f64>;

impl<T: Numeric> Wsma<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "WSMA interval must be > 0");
        Self {
            len: interval,
            seed: Sma::new(interval),
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Indicator for Wsma<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        match self.series.value() {
            Some(prev) => {
                let smoothed = prev + (price - prev) / T::from_usize(self.len);
                Some(self.series.set(smoothed))
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

impl<T: Numeric> IndicatorSeries for Wsma<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}

impl<T: Numeric> MovingAverage<T> for Wsma<T> {
    fn interval(&self) -> usize {
        self.len
    }
}
