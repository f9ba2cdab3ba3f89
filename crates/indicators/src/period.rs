use rust_decimal::Decimal;
use serde::Serialize;
use streamta_core::{stats, FixedWindow, Indicator, IndicatorError, Numeric, Result};

/// Highest and lowest value inside the current window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodResult<T = Decimal> {
    pub highest: T,
    pub lowest: T,
}

/// Rolling high/low over the last `interval` values.
#[derive(Debug, Clone)]
pub struct Period<T = Decimal> {
    values: FixedWindow<T>,
    result: Option<PeriodResult<T>>,
}

pub type FasterPeriod = Period<f64>;

impl<T: Numeric> Period<T> {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "Period interval must be > 0");
        Self {
            values: FixedWindow::new(interval),
            result: None,
        }
    }

    pub fn interval(&self) -> usize {
        self.values.capacity()
    }
}

impl<T: Numeric> Indicator for Period<T> {
    type Input = T;
    type Output = PeriodResult<T>;

    fn update(&mut self, value: T) -> Option<PeriodResult<T>> {
        self.values.push(value);
        if !self.values.is_full() {
            return None;
        }

        let highest = stats::maximum(&self.values)?;
        let lowest = stats::minimum(&self.values)?;
        let result = PeriodResult { highest, lowest };
        self.result = Some(result);
        Some(result)
    }

    fn result(&self) -> Result<PeriodResult<T>> {
        self.result.ok_or(IndicatorError::NotEnoughData)
    }

    fn is_stable(&self) -> bool {
        self.result.is_some()
    }
}
