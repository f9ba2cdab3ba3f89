use crate::error::Result;
use std::fmt;

// ---------------------------------------------------------------------------
// Indicator Traits
// ---------------------------------------------------------------------------

/// A streaming (incremental) indicator.
///
/// Feed one input at a time through [`update`](Indicator::update); the
/// indicator keeps whatever state it needs and never rescans history.
/// Stability is one-way: once `is_stable` turns true it stays true.
pub trait Indicator: fmt::Debug + Send + Sync {
    type Input;
    type Output;

    /// Process the next input. Returns the new result once the indicator is
    /// stable, `None` while it is still accumulating data.
    fn update(&mut self, input: Self::Input) -> Option<Self::Output>;

    /// The latest result, or [`IndicatorError::NotEnoughData`](crate::IndicatorError::NotEnoughData)
    /// if no result has been produced yet.
    fn result(&self) -> Result<Self::Output>;

    /// Whether the indicator has enough data to produce output.
    fn is_stable(&self) -> bool;
}

/// An indicator with a scalar result that remembers the highest and lowest
/// result over its whole lifetime (not just the current interval).
pub trait IndicatorSeries: Indicator {
    fn highest(&self) -> Option<Self::Output>;

    fn lowest(&self) -> Option<Self::Output>;
}
