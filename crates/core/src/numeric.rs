use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Arithmetic capability every indicator is generic over.
///
/// Two flavours ship with the crate: [`Decimal`] for exact results and `f64`
/// for speed. Both run the exact same update logic.
pub trait Numeric:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;
    const ONE: Self;

    fn from_usize(value: usize) -> Self;

    /// `numerator / denominator`, used to build constants such as `0.015`
    /// without going through a float literal.
    fn from_ratio(numerator: usize, denominator: usize) -> Self {
        Self::from_usize(numerator) / Self::from_usize(denominator)
    }

    /// Convert a configured parameter such as a deviation multiplier.
    fn from_decimal(value: Decimal) -> Self;

    fn abs(self) -> Self;

    /// Square root. Negative inputs yield zero.
    fn sqrt(self) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Numeric for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const ONE: Self = Decimal::ONE;

    fn from_usize(value: usize) -> Self {
        Decimal::from(value)
    }

    fn from_decimal(value: Decimal) -> Self {
        value
    }

    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    fn sqrt(self) -> Self {
        decimal_sqrt(self)
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn from_usize(value: usize) -> Self {
        value as f64
    }

    fn from_decimal(value: Decimal) -> Self {
        value.to_f64().unwrap_or_default()
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn sqrt(self) -> Self {
        if self <= 0.0 {
            0.0
        } else {
            f64::sqrt(self)
        }
    }
}

/// Newton's method square root for Decimal.
pub fn decimal_sqrt(value: Decimal) -> Decimal {
    if value.is_zero() || value < Decimal::ZERO {
        return Decimal::ZERO;
    }
    let mut guess = value / Decimal::TWO;
    let epsilon = Decimal::new(1, 24);
    for _ in 0..200 {
        let next_guess = (guess + value / guess) / Decimal::TWO;
        let diff = (next_guess - guess).abs();
        guess = next_guess;
        if diff < epsilon {
            break;
        }
    }
    guess
}
