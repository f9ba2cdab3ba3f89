use crate::atr::Atr;
use crate::moving_average::{MovingAverage, MovingAverageKind};
use rust_decimal::Decimal;
use streamta_core::{HighLow, HighLowClose, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Directional Movement Index (DX).
///
/// Smoothed +DM and -DM are normalized by the ATR of the same interval into
/// +DI and -DI (kept as ratios). `DX = 100 * |+DI - -DI| / (+DI + -DI)`; when
/// both are zero the result is zero.
#[derive(Debug)]
pub struct Dx<T = Decimal> {
    prev: Option<HighLow<T>>,
    movement_up: Box<dyn MovingAverage<T>>,
    movement_down: Box<dyn MovingAverage<T>>,
    atr: Atr<T>,
    pdi: Option<T>,
    mdi: Option<T>,
    series: Series<T>,
}

pub type FasterDx = Dx<f64>;

impl<T: Numeric> Dx<T> {
    pub fn new(interval: usize) -> Self {
        Self::with_smoothing(interval, MovingAverageKind::Wsma)
    }

    pub fn with_smoothing(interval: usize, kind: MovingAverageKind) -> Self {
        assert!(interval > 0, "DX interval must be > 0");
        Self {
            prev: None,
            movement_up: kind.build(interval),
            movement_down: kind.build(interval),
            atr: Atr::with_smoothing(interval, kind),
            pdi: None,
            mdi: None,
            series: Series::new(),
        }
    }

    pub fn interval(&self) -> usize {
        self.atr.interval()
    }

    /// Plus directional indicator (+DI) as a ratio.
    pub fn pdi(&self) -> Option<T> {
        self.pdi
    }

    /// Minus directional indicator (-DI) as a ratio.
    pub fn mdi(&self) -> Option<T> {
        self.mdi
    }

    fn directional_movement(&self, candle: &HighLowClose<T>) -> (T, T) {
        let Some(prev) = self.prev else {
            return (T::ZERO, T::ZERO);
        };
        let up = candle.high - prev.high;
        let down = prev.low - candle.low;
        let plus = if up < T::ZERO || up < down { T::ZERO } else { up };
        let minus = if down < T::ZERO || down < up { T::ZERO } else { down };
        (plus, minus)
    }
}

impl<T: Numeric> Indicator for Dx<T> {
    type Input = HighLowClose<T>;
    type Output = T;

    fn update(&mut self, candle: HighLowClose<T>) -> Option<T> {
        let atr = self.atr.update(candle);
        let (plus_dm, minus_dm) = self.directional_movement(&candle);
        self.prev = Some(HighLow::from(candle));

        let up = self.movement_up.update(plus_dm);
        let down = self.movement_down.update(minus_dm);
        let (up, down, atr) = (up?, down?, atr?);

        let (pdi, mdi) = if atr.is_zero() {
            (T::ZERO, T::ZERO)
        } else {
            (up / atr, down / atr)
        };
        self.pdi = Some(pdi);
        self.mdi = Some(mdi);

        let sum = pdi + mdi;
        let dx = if sum.is_zero() {
            T::ZERO
        } else {
            (pdi - mdi).abs() / sum * T::from_usize(100)
        };
        Some(self.series.set(dx))
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Dx<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}
