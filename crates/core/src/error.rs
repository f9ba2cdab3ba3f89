use thiserror::Error;

/// Errors raised by indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// The result was requested before the indicator received enough updates.
    #[error("not enough data")]
    NotEnoughData,
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
