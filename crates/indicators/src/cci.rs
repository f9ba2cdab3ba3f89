use crate::mad::Mad;
use crate::sma::Sma;
use rust_decimal::Decimal;
use streamta_core::{HighLowClose, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Commodity Channel Index (CCI).
///
/// `(tp - SMA(tp)) / (0.015 * MAD(tp))` where `tp` is the typical price
/// `(high + low + close) / 3`. A flat interval (zero MAD) yields zero.
#[derive(Debug, Clone)]
pub struct Cci<T = Decimal> {
    sma: Sma<T>,
    constant: T,
    series: Series<T>,
}

pub type FasterCci = Cci<f64>;

impl<T: Numeric> Cci<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "CCI interval must be > 0");
        Self {
            sma: Sma::new(interval),
            constant: T::from_ratio(15, 1000),
            series: Series::new(),
        }
    }

    pub fn typical_price(candle: &HighLowClose<T>) -> T {
        (candle.high + candle.low + candle.close) / T::from_usize(3)
    }
}

impl<T: Numeric> Indicator for Cci<T> {
    type Input = HighLowClose<T>;
    type Output = T;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<T> {
        let typical_price = Self::typical_price(&candle);
        let mean = self.sma.update(typical_price)?;

        let window: Vec<T> = self.sma.prices().iter().copied().collect();
        let mad = Mad::batch_result(&window, Some(mean));
        let cci = if mad.is_zero() {
            T::ZERO
        } else {
            (typical_price - mean) / (self.constant * mad)
        };
        Some(self.series.set(cci))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Cci<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
