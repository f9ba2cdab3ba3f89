use rust_decimal::Decimal;
use streamta_core::{stats, HighLowClose, Indicator, IndicatorSeries, Numeric, Result, Series};

/// True Range (TR).
///
/// `max(high - low, |high - prev_close|, |low - prev_close|)`. The very first
/// candle has no previous close and yields `high - low`.
#[derive(Debug, Clone)]
pub struct Tr<T = Decimal> {
    prev_close: Option<T>,
    series: Series<T>,
}

pub type FasterTr = Tr<f64>;

impl<T: Numeric> Tr<T> {
    pub fn new() -> Self {
        Self {
            prev_close: None,
            series: Series::new(),
        }
    }
}

impl<T: Numeric> Default for Tr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> Indicator for Tr<T> {
    type Input = HighLowClose<T>;
    type Output = T;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<T> {
        let range = candle.high - candle.low;
        let tr = match self.prev_close {
            Some(prev_close) => {
                let hc = (candle.high - prev_close).abs();
                let lc = (candle.low - prev_close).abs();
                stats::maximum(&[range, hc, lc]).unwrap_or(range)
            }
            None => range,
        };
        self.prev_close = Some(candle.close);
        Some(self.series.set(tr))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Tr<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
