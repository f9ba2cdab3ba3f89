use rust_decimal::Decimal;
use serde::Serialize;
use streamta_core::Numeric;

/// Output of band indicators such as Bollinger Bands and Acceleration Bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandsResult<T = Decimal> {
    pub upper: T,
    pub middle: T,
    pub lower: T,
}

impl<T: Numeric> BandsResult<T> {
    /// Distance between the upper and the lower band.
    pub fn bandwidth(&self) -> T {
        self.upper - self.lower
    }
}
