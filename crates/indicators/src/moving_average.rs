use crate::dema::Dema;
use crate::ema::Ema;
use crate::sma::Sma;
use crate::wsma::Wsma;
use serde::{Deserialize, Serialize};
use streamta_core::{IndicatorSeries, Numeric};
use tracing::debug;

/// A smoothing indicator that can be plugged into compound indicators.
pub trait MovingAverage<T>: IndicatorSeries<Input = T, Output = T> {
    fn interval(&self) -> usize;
}

/// Selects which moving average a compound indicator uses internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovingAverageKind {
    #[default]
    Sma,
    Ema,
    Wsma,
    Dema,
}

impl MovingAverageKind {
    pub fn build<T: Numeric>(self, interval: usize) -> Box<dyn MovingAverage<T>> {
        debug!(kind = ?self, interval, "building smoothing indicator");
        match self {
            MovingAverageKind::Sma => Box::new(Sma::new(interval)),
            MovingAverageKind::Ema => Box::new(Ema::new(interval)),
            MovingAverageKind::Wsma => Box::new(Wsma::new(interval)),
            MovingAverageKind::Dema => Box::new(Dema::new(interval)),
        }
    }
}
