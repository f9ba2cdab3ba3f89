use rust_decimal::Decimal;
use streamta_core::{stats, FixedWindow, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Mean Absolute Deviation (MAD).
///
/// Average distance of each price in the interval from the interval's mean.
#[derive(Debug, Clone)]
pub struct Mad<T = Decimal> {
    prices: FixedWindow<T>,
    series: Series<T>,
}

pub type FasterMad = Mad<f64>;

impl<T: Numeric> Mad<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "MAD interval must be > 0");
        Self {
            prices: FixedWindow::new(interval),
            series: Series::new(),
        }
    }

    /// MAD of an arbitrary list of prices around `mean`, or around their
    /// average when no mean is given. An empty list yields zero.
    pub fn batch_result(prices: &[T], mean: Option<T>) -> T {
        if prices.is_empty() {
            return T::ZERO;
        }
        let mean = mean.unwrap_or_else(|| stats::average(prices));
        let deviations: Vec<T> = prices.iter().map(|price| (*price - mean).abs()).collect();
        stats::average(&deviations)
    }
}

impl<T: Numeric> Indicator for Mad<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        self.prices.push(price);
        if !self.prices.is_full() {
            return None;
        }
        let mean = stats::average(&self.prices);
        let deviations: Vec<T> = self.prices.iter().map(|p| (*p - mean).abs()).collect();
        Some(self.series.set(stats::average(&deviations)))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Mad<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
