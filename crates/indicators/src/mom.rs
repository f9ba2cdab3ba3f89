use rust_decimal::Decimal;
use streamta_core::{FixedWindow, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Momentum (MOM).
///
/// Difference between the latest price and the price `interval` updates ago.
#[derive(Debug, Clone)]
pub struct Mom<T = Decimal> {
    prices: FixedWindow<T>,
    series: Series<T>,
}

pub type FasterMom = Mom<f64>;

impl<T: Numeric> Mom<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "MOM interval must be > 0");
        Self {
            prices: FixedWindow::new(interval + 1),
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Indicator for Mom<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        self.prices.push(price);
        if !self.prices.is_full() {
            return None;
        }
        let then = *self.prices.oldest()?;
        Some(self.series.set(price - then))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Mom<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
