use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use streamta_core::{Indicator, IndicatorSeries, Numeric, Result, Series};

/// Relative Strength Index (RSI).
///
/// Gains and losses are smoothed separately (Wilder's smoothing by default).
/// `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`; no losses at all yields 100.
#[derive(Debug)]
pub struct Rsi<T = Decimal> {
    prev_price: Option<T>,
    avg_gain: Box<dyn MovingAverage<T>>,
    avg_loss: Box<dyn MovingAverage<T>>,
    series: Series<T>,
}

pub type FasterRsi = Rsi<f64>;

impl<T: Numeric> Rsi<T> {
    pub fn new(interval: usize) -> Self {
        Self::with_smoothing(interval, MovingAverageKind::Wsma)
    }

    pub fn with_smoothing(interval: usize, kind: MovingAverageKind) -> Self {
        assert!(interval > 0, "RSI interval must be > 0");
        Self {
            prev_price: None,
            avg_gain: kind.build(interval),
            avg_loss: kind.build(interval),
            series: Series::new(),
        }
    }

    pub fn interval(&self) -> usize {
        self.avg_gain.interval()
    }
}

impl<T: Numeric> Indicator for Rsi<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        let prev = self.prev_price.replace(price)?;
        let change = price - prev;
        let (gain, loss) = if change > T::ZERO {
            (change, T::ZERO)
        } else {
            (T::ZERO, -change)
        };

        let avg_gain = self.avg_gain.update(gain);
        let avg_loss = self.avg_loss.update(loss);
        let (avg_gain, avg_loss) = (avg_gain?, avg_loss?);

        let hundred = T::from_usize(100);
        let rsi = if avg_loss.is_zero() {
            hundred
        } else {
            hundred - hundred / (T::ONE + avg_gain / avg_loss)
        };
        Some(self.series.set(rsi))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Rsi<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
