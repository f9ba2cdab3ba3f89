use crate::error::{IndicatorError, Result};
use crate::numeric::Numeric;
use tracing::trace;

/// Result slot shared by all scalar indicators.
///
/// Holds the latest result together with the lifetime extremes. Ties never
/// overwrite an extreme.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    result: Option<T>,
    highest: Option<T>,
    lowest: Option<T>,
}

impl<T: Numeric> Series<T> {
    pub fn new() -> Self {
        Self {
            result: None,
            highest: None,
            lowest: None,
        }
    }

    /// Store `value` as the current result and return it.
    pub fn set(&mut self, value: T) -> T {
        if self.result.is_none() {
            trace!(%value, "series stabilized");
        }

        if self.highest.map_or(true, |highest| value > highest) {
            self.highest = Some(value);
        }
        if self.lowest.map_or(true, |lowest| value < lowest) {
            self.lowest = Some(value);
        }

        self.result = Some(value);
        value
    }

    pub fn get(&self) -> Result<T> {
        self.result.ok_or(IndicatorError::NotEnoughData)
    }

    pub fn value(&self) -> Option<T> {
        self.result
    }

    pub fn is_stable(&self) -> bool {
        self.result.is_some()
    }

    pub fn highest(&self) -> Option<T> {
        self.highest
    }

    pub fn lowest(&self) -> Option<T> {
        self.lowest
    }
}

impl<T: Numeric> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_series_is_not_stable() {
        let series = Series::<f64>::new();
        assert!(!series.is_stable());
        assert_eq!(series.get(), Err(IndicatorError::NotEnoughData));
        assert_eq!(series.highest(), None);
        assert_eq!(series.lowest(), None);
    }

    #[test]
    fn test_series_tracks_lifetime_extremes() {
        let mut series = Series::new();
        assert_eq!(series.set(dec!(20)), dec!(20));
        series.set(dec!(30));
        series.set(dec!(10));
        series.set(dec!(25));
        assert_eq!(series.get(), Ok(dec!(25)));
        assert_eq!(series.highest(), Some(dec!(30)));
        assert_eq!(series.lowest(), Some(dec!(10)));
    }

    #[test]
    fn test_ties_do_not_overwrite_extremes() {
        let mut series = Series::new();
        series.set(dec!(1.0));
        series.set(dec!(1.00));
        // Decimal keeps the scale of the first value that set the extreme
        assert_eq!(series.highest().map(|h| h.scale()), Some(1));
        assert_eq!(series.lowest().map(|l| l.scale()), Some(1));
    }
}
