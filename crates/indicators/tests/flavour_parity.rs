//! The Decimal and f64 flavours must produce the same result streams.

mod common;

use common::{approx_eq, to_f64, tulip_candles, tulip_candles_f64, tulip_ohlcv, tulip_prices};
use rust_decimal::Decimal;
use streamta_indicators::*;

const EPS: f64 = 1e-6;

fn assert_price_parity<P, F>(mut precise: P, mut faster: F)
where
    P: Indicator<Input = Decimal, Output = Decimal>,
    F: Indicator<Input = f64, Output = f64>,
{
    for price in tulip_prices() {
        let expected = precise.update(price);
        let actual = faster.update(to_f64(price));
        assert_eq!(expected.is_some(), actual.is_some(), "{precise:?}");
        if let (Some(expected), Some(actual)) = (expected, actual) {
            assert!(approx_eq(to_f64(expected), actual, EPS), "{expected} != {actual}");
        }
        assert_eq!(precise.is_stable(), faster.is_stable());
    }
    assert!(precise.is_stable(), "{precise:?} never stabilized");
}

fn assert_candle_parity<P, F>(mut precise: P, mut faster: F)
where
    P: Indicator<Input = HighLowClose, Output = Decimal>,
    F: Indicator<Input = HighLowClose<f64>, Output = f64>,
{
    for (candle, fast_candle) in tulip_candles().into_iter().zip(tulip_candles_f64()) {
        let expected = precise.update(candle);
        let actual = faster.update(fast_candle);
        assert_eq!(expected.is_some(), actual.is_some(), "{precise:?}");
        if let (Some(expected), Some(actual)) = (expected, actual) {
            assert!(approx_eq(to_f64(expected), actual, EPS), "{expected} != {actual}");
        }
    }
    assert!(precise.is_stable(), "{precise:?} never stabilized");
}

#[test]
fn moving_averages_match() {
    assert_price_parity(Sma::new(5), FasterSma::new(5));
    assert_price_parity(Ema::new(5), FasterEma::new(5));
    assert_price_parity(Wsma::new(5), FasterWsma::new(5));
    assert_price_parity(Dema::new(4), FasterDema::new(4));
}

#[test]
fn price_indicators_match() {
    assert_price_parity(Mom::new(5), FasterMom::new(5));
    assert_price_parity(Roc::new(5), FasterRoc::new(5));
    assert_price_parity(Mad::new(5), FasterMad::new(5));
    assert_price_parity(Rsi::new(5), FasterRsi::new(5));
    assert_price_parity(Cg::new(5, 5), FasterCg::new(5, 5));
}

#[test]
fn candle_indicators_match() {
    assert_candle_parity(Tr::new(), FasterTr::new());
    assert_candle_parity(Atr::new(5), FasterAtr::new(5));
    assert_candle_parity(Cci::new(5), FasterCci::new(5));
    assert_candle_parity(Dx::new(5), FasterDx::new(5));
    assert_candle_parity(Adx::new(5), FasterAdx::new(5));
}

#[test]
fn compound_results_match() {
    let mut macd = Macd::new(2, 5, 9);
    let mut faster_macd = FasterMacd::new(2, 5, 9);
    let mut bands = BollingerBands::new(5, Decimal::TWO);
    let mut faster_bands = FasterBollingerBands::new(5, 2.0);
    let mut stoch_rsi = StochasticRsi::new(5, 3, 3);
    let mut faster_stoch_rsi = FasterStochasticRsi::new(5, 3, 3);

    for price in tulip_prices() {
        let fast = to_f64(price);
        if let (Some(a), Some(b)) = (macd.update(price), faster_macd.update(fast)) {
            assert!(approx_eq(to_f64(a.histogram), b.histogram, EPS));
        }
        if let (Some(a), Some(b)) = (bands.update(price), faster_bands.update(fast)) {
            assert!(approx_eq(to_f64(a.upper), b.upper, EPS));
            assert!(approx_eq(to_f64(a.lower), b.lower, EPS));
        }
        if let (Some(a), Some(b)) = (stoch_rsi.update(price), faster_stoch_rsi.update(fast)) {
            assert!(approx_eq(to_f64(a.stoch_d), b.stoch_d, EPS));
        }
    }
    assert!(macd.is_stable() && faster_macd.is_stable());
    assert!(bands.is_stable() && faster_bands.is_stable());
    assert!(stoch_rsi.is_stable() && faster_stoch_rsi.is_stable());
}

#[test]
fn candle_compound_results_match() {
    let mut stoch = StochasticOscillator::new(5, 3, 3);
    let mut faster_stoch = FasterStochasticOscillator::new(5, 3, 3);
    let mut accbands = AccelerationBands::new(5, Decimal::from(4));
    let mut faster_accbands = FasterAccelerationBands::new(5, 4.0);
    let mut ao = Ao::new(2, 4);
    let mut faster_ao = FasterAo::new(2, 4);

    for (candle, fast) in tulip_candles().into_iter().zip(tulip_candles_f64()) {
        if let (Some(a), Some(b)) = (stoch.update(candle), faster_stoch.update(fast)) {
            assert!(approx_eq(to_f64(a.stoch_k), b.stoch_k, EPS));
        }
        if let (Some(a), Some(b)) = (accbands.update(candle), faster_accbands.update(fast)) {
            assert!(approx_eq(to_f64(a.bandwidth()), b.bandwidth(), EPS));
        }
        if let (Some(a), Some(b)) = (ao.update(candle.into()), faster_ao.update(fast.into())) {
            assert!(approx_eq(to_f64(a), b, EPS));
        }
    }
    assert!(stoch.is_stable() && accbands.is_stable() && ao.is_stable());
}

#[test]
fn obv_matches() {
    let mut obv = Obv::new();
    let mut faster = FasterObv::new();
    for candle in tulip_ohlcv() {
        let fast = Candle::new(
            to_f64(candle.open),
            to_f64(candle.high),
            to_f64(candle.low),
            to_f64(candle.close),
            to_f64(candle.volume),
        );
        assert_eq!(obv.update(candle).map(to_f64), faster.update(fast));
    }
}
