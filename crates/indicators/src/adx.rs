use crate::dx::Dx;
use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use streamta_core::{HighLowClose, Indicator, IndicatorSeries, Numeric, Result, Series};
use tracing::debug;

/// Average Directional Index (ADX).
///
/// Smoothed [`Dx`] (Wilder's smoothing by default). Measures trend strength
/// regardless of direction; compare [`Adx::pdi`] and [`Adx::mdi`] for the
/// direction itself.
#[derive(Debug)]
pub struct Adx<T = Decimal> {
    dx: Dx<T>,
    smoothing: Box<dyn MovingAverage<T>>,
    series: Series<T>,
}

pub type FasterAdx = Adx<f64>;

impl<T: Numeric> Adx<T> {
    pub fn new(interval: usize) -> Self {
        Self::with_smoothing(interval, MovingAverageKind::Wsma)
    }

    pub fn with_smoothing(interval: usize, kind: MovingAverageKind) -> Self {
        assert!(interval > 0, "ADX interval must be > 0");
        Self {
            dx: Dx::with_smoothing(interval, kind),
            smoothing: kind.build(interval),
            series: Series::new(),
        }
    }

    pub fn interval(&self) -> usize {
        self.smoothing.interval()
    }

    pub fn dx(&self) -> &Dx<T> {
        &self.dx
    }

    pub fn pdi(&self) -> Option<T> {
        self.dx.pdi()
    }

    pub fn mdi(&self) -> Option<T> {
        self.dx.mdi()
    }
}

impl<T: Numeric> Indicator for Adx<T> {
    type Input = HighLowClose<T>;
    type Output = T;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<T> {
        let dx = self.dx.update(candle)?;
        let adx = self.smoothing.update(dx)?;
        if !self.series.is_stable() {
            debug!(interval = self.interval(), %adx, "ADX stabilized");
        }
        Some(self.series.set(adx))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Adx<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
