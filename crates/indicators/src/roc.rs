use rust_decimal::Decimal;
use streamta_core::{FixedWindow, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Rate of Change (ROC).
///
/// Relative change between the latest price and the price `interval` updates
/// ago, as a ratio. A zero reference price yields zero.
#[derive(Debug, Clone)]
pub struct Roc<T = Decimal> {
    prices: FixedWindow<T>,
    series: Series<T>,
}

pub type FasterRoc = Roc<f64>;

impl<T: Numeric> Roc<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "ROC interval must be > 0");
        Self {
            prices: FixedWindow::new(interval + 1),
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Indicator for Roc<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        self.prices.push(price);
        if !self.prices.is_full() {
            return None;
        }
        let then = *self.prices.oldest()?;
        let roc = if then.is_zero() {
            T::ZERO
        } else {
            (price - then) / then
        };
        Some(self.series.set(roc))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Roc<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
