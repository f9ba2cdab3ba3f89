//! Streaming technical indicators.
//!
//! Every indicator consumes one input per [`Indicator::update`] call and never
//! rescans history. Each one is generic over [`Numeric`]: the default `Decimal`
//! flavour is exact, the `Faster*` aliases run the same logic on `f64`.

pub mod acceleration_bands;
pub mod adx;
pub mod ao;
pub mod atr;
pub mod bands;
pub mod bollinger;
pub mod cci;
pub mod cg;
pub mod dema;
pub mod dma;
pub mod dx;
pub mod ema;
pub mod macd;
pub mod mad;
pub mod mom;
pub mod moving_average;
pub mod obv;
pub mod period;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod stochastic_rsi;
pub mod tr;
pub mod wsma;

#[cfg(test)]
mod test_data;

pub use streamta_core as core_types;
pub use streamta_core::stats;
pub use streamta_core::{
    Candle, FixedWindow, HighLow, HighLowClose, Indicator, IndicatorError, IndicatorSeries,
    Numeric, Result,
};

pub use acceleration_bands::{AccelerationBands, AccelerationBandsConfig, FasterAccelerationBands};
pub use adx::{Adx, FasterAdx};
pub use ao::{Ao, AoConfig, FasterAo};
pub use atr::{Atr, FasterAtr};
pub use bands::BandsResult;
pub use bollinger::{BollingerBands, BollingerConfig, FasterBollingerBands};
pub use cci::{Cci, FasterCci};
pub use cg::{Cg, FasterCg};
pub use dema::{Dema, FasterDema};
pub use dma::{Dma, DmaConfig, DmaResult, FasterDma};
pub use dx::{Dx, FasterDx};
pub use ema::{Ema, FasterEma};
pub use macd::{FasterMacd, Macd, MacdConfig, MacdResult};
pub use mad::{FasterMad, Mad};
pub use mom::{FasterMom, Mom};
pub use moving_average::{MovingAverage, MovingAverageKind};
pub use obv::{FasterObv, Obv};
pub use period::{FasterPeriod, Period, PeriodResult};
pub use roc::{FasterRoc, Roc};
pub use rsi::{FasterRsi, Rsi};
pub use sma::{FasterSma, Sma};
pub use stochastic::{
    FasterStochasticOscillator, StochasticConfig, StochasticOscillator, StochasticResult,
};
pub use stochastic_rsi::{FasterStochasticRsi, StochasticRsi, StochasticRsiConfig};
pub use tr::{FasterTr, Tr};
pub use wsma::{FasterWsma, Wsma};
