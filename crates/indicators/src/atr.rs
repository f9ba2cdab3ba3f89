use crate::moving_average::{MovingAverage, MovingAverageKind};
use crate::tr::Tr;
use rust_decimal::Decimal;
use streamta_core::{HighLowClose, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Average True Range (ATR).
///
/// Smooths the [`Tr`] stream, with Wilder's smoothing unless another moving
/// average is chosen.
#[derive(Debug)]
pub struct Atr<T = Decimal> {
    tr: Tr<T>,
    smoothing: Box<dyn MovingAverage<T>>,
    series: Series<T>,
}

pub type FasterAtr = Atr<f64>;

impl<T: Numeric> Atr<T> {
    pub fn new(interval: usize) -> Self {
        Self::with_smoothing(interval, MovingAverageKind::Wsma)
    }

    pub fn with_smoothing(interval: usize, kind: MovingAverageKind) -> Self {
        assert!(interval > 0, "ATR interval must be > 0");
        Self {
            tr: Tr::new(),
            smoothing: kind.build(interval),
            series: Series::new(),
        }
    }

    pub fn interval(&self) -> usize {
        self.smoothing.interval()
    }
}

impl<T: Numeric> Indicator for Atr<T> {
    type Input = HighLowClose<T>;
    type Output = T;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<T> {
        let tr = self.tr.update(candle)?;
        let atr = self.smoothing.update(tr)?;
        Some(self.series.set(atr))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Atr<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
