use rust_decimal::Decimal;
use streamta_core::{Candle, Indicator, IndicatorSeries, Numeric, Result, Series};

/// On-Balance Volume (OBV).
///
/// Running volume total: added on an up close, subtracted on a down close,
/// unchanged otherwise. The first candle only seeds the previous close.
#[derive(Debug, Clone)]
pub struct Obv<T = Decimal> {
    prev_close: Option<T>,
    total: T,
    series: Series<T>,
}

pub type FasterObv = Obv<f64>;

impl<T: Numeric> Obv<T> {
    pub fn new() -> Self {
        Self {
            prev_close: None,
            total: T::ZERO,
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Default for Obv<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> Indicator for Obv<T> {
    type Input = Candle<T>;
    type Output = T;

    fn update(&mut self, candle: Candle<T>) -> Option<T> {
        let prev_close = self.prev_close.replace(candle.close)?;
        if candle.close > prev_close {
            self.total += candle.volume;
        } else if candle.close < prev_close {
            self.total -= candle.volume;
        }
        Some(self.series.set(self.total))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Obv<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
