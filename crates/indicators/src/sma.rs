use crate::moving_average::MovingAverage;
use rust_decimal::Decimal;
use streamta_core::{stats, FixedWindow, Indicator, IndicatorSeries, Numeric, Result, Series};

/// Simple Moving Average (SMA).
///
/// Weights every price inside the interval equally. The mean is recomputed
/// from the window on every update so `f64` rounding never accumulates.
#[derive(Debug, Clone)]
pub struct Sma<T = Decimal> {
    len: usize,
    prices: FixedWindow<T>,
    series: Series<T>,
}

pub type FasterSma = Sma<f64>;

impl<T: Numeric> Sma<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "SMA interval must be > 0");
        Self {
            len: interval,
            prices: FixedWindow::new(interval),
            series: Series::new(),
        }
    }

    /// The raw prices currently inside the interval, oldest first.
    pub fn prices(&self) -> &FixedWindow<T> {
        &self.prices
    }

    /// Mean of an arbitrary list of prices; zero for an empty list.
    pub fn batch_result(prices: &[T]) -> T {
        stats::average(prices)
    }
}

impl<T: Numeric> Indicator for Sma<T> {
    type Input = T;
    type Output = T;

    fn update(&mut self, price: T) -> Option<T> {
        self.prices.push(price);
        if self.prices.is_full() {
            Some(self.series.set(stats::average(&self.prices)))
        } else {
            None
        }
    }

    fn result(&self) -> Result<T> {
        self.series.get()
    }

    fn is_stable(&self) -> bool {
        self.series.is_stable()
    }
}

impl<T: Numeric> IndicatorSeries for Sma<T> {
    fn highest(&self) -> Option<T> {
        self.series.highest()
    }

    fn lowest(&self) -> Option<T> {
        self.series.lowest()
    }
}

impl<T: Numeric> MovingAverage<T> for Sma<T> {
    fn interval(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;
    use streamta_core::IndicatorError;

    #[test]
    fn test_sma_basic() {
        let mut sma = Sma::new(3);
        assert_eq!(sma.update(dec!(1)), None);
        assert_eq!(sma.update(dec!(2)), None);
        assert_eq!(sma.update(dec!(3)), Some(dec!(2)));
        assert_eq!(sma.update(dec!(4)), Some(dec!(3)));
        assert_eq!(sma.update(dec!(5)), Some(dec!(4)));
    }

    #[test]
    fn test_sma_keeps_only_interval_prices() {
        let mut sma = Sma::new(3);
        for (i, price) in [1, 2, 3, 4, 5, 6].into_iter().enumerate() {
            sma.update(Decimal::from(price));
            assert_eq!(sma.prices().len(), (i + 1).min(3));
        }
    }

    #[test]
    fn test_sma_tracks_lifetime_extremes() {
        let mut sma = Sma::new(3);
        sma.update(dec!(40));
        sma.update(dec!(30));
        assert!(!sma.is_stable());
        sma.update(dec!(20));
        assert!(sma.is_stable());
        sma.update(dec!(10));
        sma.update(dec!(30));
        assert_eq!(sma.result(), Ok(dec!(20)));
        assert_eq!(sma.lowest(), Some(dec!(20)));
        assert_eq!(sma.highest(), Some(dec!(30)));
    }

    #[test]
    fn test_sma_tulip_fixture() {
        let prices = [
            dec!(81.59), dec!(81.06), dec!(82.87), dec!(83.0), dec!(83.61), dec!(83.15),
            dec!(82.84), dec!(83.99), dec!(84.55), dec!(84.36), dec!(85.53), dec!(86.54),
            dec!(86.89), dec!(87.77), dec!(87.29),
        ];
        let expected = [
            dec!(82.426), dec!(82.738), dec!(83.094), dec!(83.318), dec!(83.628), dec!(83.778),
            dec!(84.254), dec!(84.994), dec!(85.574), dec!(86.218), dec!(86.804),
        ];
        let mut sma = Sma::new(5);
        let mut faster = FasterSma::new(5);
        let mut results = Vec::new();
        for price in prices {
            let faster_result = faster.update(price.to_f64().unwrap());
            if let Some(result) = sma.update(price) {
                results.push(result);
                assert!((faster_result.unwrap() - result.to_f64().unwrap()).abs() < 1e-9);
            }
        }
        assert_eq!(results, expected);
        assert_eq!(sma.highest().map(|h| h.round_dp(2)), Some(dec!(86.80)));
        assert_eq!(sma.lowest().map(|l| l.round_dp(2)), Some(dec!(82.43)));
    }

    #[test]
    fn test_sma_not_enough_data() {
        let sma = Sma::<Decimal>::new(26);
        assert_eq!(sma.result(), Err(IndicatorError::NotEnoughData));
        let faster = FasterSma::new(5);
        assert_eq!(faster.result(), Err(IndicatorError::NotEnoughData));
    }

    #[test]
    fn test_faster_sma_recovers_after_large_price() {
        let mut sma = Sma::new(2);
        let mut faster = FasterSma::new(2);
        for price in [1e16, 1.0, 1.0, 1.0, 1.0] {
            sma.update(Decimal::from_f64_retain(price).unwrap());
            faster.update(price);
        }
        assert_eq!(sma.result(), Ok(dec!(1)));
        assert_eq!(faster.result(), Ok(1.0));
        assert_eq!(faster.highest(), Some(5e15));
    }

    #[test]
    fn test_batch_result_of_empty_list_is_zero() {
        assert_eq!(Sma::<Decimal>::batch_result(&[]), Decimal::ZERO);
        assert_eq!(Sma::batch_result(&[dec!(1), dec!(2), dec!(6)]), dec!(3));
    }
}
