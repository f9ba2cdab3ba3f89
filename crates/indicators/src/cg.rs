use crate::sma::Sma;
use rust_decimal::Decimal;
use streamta_core::{FixedWindow, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Center of Gravity (CG) oscillator by John Ehlers.
///
/// `Σ (i + 1) * price[i] / Σ price[i]` over the interval, oldest price first.
/// Every value is also fed into an SMA signal line; crossings of the two mark
/// turning points. A zero price sum yields zero.
#[derive(Debug, Clone)]
pub struct Cg<T = Decimal> {
    prices: FixedWindow<T>,
    signal: Sma<T>,
    series: Series<T>,
}

pub type FasterCg = Cg<f64>;

impl<T: Numeric> Cg<T> {
    pub fn new(interval: usize, signal_interval: usize) -> Self {
        assert!(interval > 0, "CG interval must be > 0");
        assert!(signal_interval > 0, "CG signal interval must be > 0");
        Self {
            prices: FixedWindow::new(interval),
            signal: Sma::new(signal_interval),
            series: Series::new(),
        }
    }

    /// The SMA signal line of the CG values.
    pub fn signal(&self) -> &Sma<T> {
        &self.signal
    }

    fn center_of_gravity(&self) -> T {
        let mut weighted = T::ZERO;
        let mut sum = T::ZERO;
        for (i, price) in self.prices.iter().enumerate() {
            weighted += T::from_usize(i + 1) * *price;
            sum += *price;
        }
        if sum.is_zero() {
            T::ZERO
        } else {
            weighted / sum
        }
    }
}

impl<T: Numeric> Indicator for Cg<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        self.prices.push(price);
        let cg = self.center_of_gravity();
        self.signal.update(cg);

        if self.prices.is_full() && self.signal.is_stable() {
            Some(self.series.set(cg))
        } else {
            None
        }
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Cg<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
