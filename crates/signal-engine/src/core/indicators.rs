//! Pure computation module for technical indicators.
//!
//! No I/O, no side effects. Takes a validated candle series and returns
//! indicator values. All computations use `Decimal`, so identical input
//! yields bit-identical output. Insufficient history is never an error:
//! each function returns `None` (or an empty `Vec` for series-valued EMA)
//! and the absence propagates through scoring as a first-class case.
//!
//! Indicators implemented: SMA, EMA, RSI, MACD, Bollinger Bands,
//! volume ratio/trend/correlation with OBV, and support/resistance levels.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::config::IndicatorParams;
use crate::types::{
    BollingerBands, Candle, CandleSeries, IndicatorSet, Macd, PriceLevels, VolumeAnalysis,
    VolumeCorrelation, VolumeTrend,
};

// ═══════════════════════════════════════════════════════════════════════════
// Moving averages
// ═══════════════════════════════════════════════════════════════════════════

/// Simple Moving Average of the last `period` closes.
///
/// Returns `None` if the series is shorter than `period`.
pub fn sma(closes: &[Decimal], period: usize) -> Option<Decimal> {
    if period == 0 || closes.len() < period {
        return None;
    }
    let window = &closes[closes.len() - period..];
    Some(window.iter().copied().sum::<Decimal>() / Decimal::from(period as u64))
}

/// Exponential Moving Average series.
///
/// Seeded with the first close, then `ema[i] = close[i]*k + ema[i-1]*(1-k)`
/// with `k = 2 / (period + 1)`. The result has the same length as the
/// input; callers that need warmed-up values must discard the first
/// `period` entries. Returns an empty `Vec` for an empty input.
pub fn ema(closes: &[Decimal], period: usize) -> Vec<Decimal> {
    if closes.is_empty() || period == 0 {
        return Vec::new();
    }

    let k = dec!(2) / Decimal::from(period as u64 + 1);
    let one_minus_k = dec!(1) - k;

    let mut result = Vec::with_capacity(closes.len());
    result.push(closes[0]);

    for &price in &closes[1..] {
        let prev = *result.last().expect("result is seeded with the first close");
        result.push(price * k + prev * one_minus_k);
    }

    result
}

// ═══════════════════════════════════════════════════════════════════════════
// Oscillators
// ═══════════════════════════════════════════════════════════════════════════

/// Relative Strength Index over the last `period` price changes.
///
/// Average gain and loss are simple means of the last `period` deltas
/// (losses as positive magnitudes); `RSI = 100 - 100/(1+RS)`.
/// `avg_loss == 0` with any gain is a pure uptrend and reads 100, not a
/// divide-by-zero fault; a fully flat window reads `flat_value`.
/// Returns `None` below `period + 1` closes. Always in [0, 100].
pub fn rsi(closes: &[Decimal], period: usize, flat_value: Decimal) -> Option<Decimal> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let window = &closes[closes.len() - (period + 1)..];
    let mut gain_sum = Decimal::ZERO;
    let mut loss_sum = Decimal::ZERO;

    for pair in window.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > Decimal::ZERO {
            gain_sum += delta;
        } else {
            loss_sum += -delta;
        }
    }

    let period_d = Decimal::from(period as u64);
    let avg_gain = gain_sum / period_d;
    let avg_loss = loss_sum / period_d;

    if avg_loss.is_zero() {
        return Some(if avg_gain.is_zero() { flat_value } else { dec!(100) });
    }

    let rs = avg_gain / avg_loss;
    Some(dec!(100) - dec!(100) / (dec!(1) + rs))
}

/// Moving Average Convergence Divergence.
///
/// `line = EMA(fast) - EMA(slow)` element-wise over the full series,
/// `signal = EMA(signal_period)` of the line series, `histogram = line -
/// signal`; the snapshot reads the last value of each. Returns `None`
/// below `slow` bars.
pub fn macd(closes: &[Decimal], fast: usize, slow: usize, signal: usize) -> Option<Macd> {
    if fast == 0 || slow == 0 || signal == 0 || closes.len() < slow {
        return None;
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let line: Vec<Decimal> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(&f, &s)| f - s)
        .collect();

    let signal_ema = ema(&line, signal);

    let line_last = *line.last()?;
    let signal_last = *signal_ema.last()?;

    Some(Macd {
        line: line_last,
        signal: signal_last,
        histogram: line_last - signal_last,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Volatility bands
// ═══════════════════════════════════════════════════════════════════════════

/// Bollinger Bands: SMA middle with a population-standard-deviation
/// envelope. Returns `None` below `period` bars.
pub fn bollinger_bands(
    closes: &[Decimal],
    period: usize,
    std_mult: Decimal,
) -> Option<BollingerBands> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let window = &closes[closes.len() - period..];
    let period_d = Decimal::from(period as u64);
    let middle: Decimal = window.iter().copied().sum::<Decimal>() / period_d;

    // Population variance.
    let variance: Decimal = window
        .iter()
        .map(|&p| {
            let diff = p - middle;
            diff * diff
        })
        .sum::<Decimal>()
        / period_d;

    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

    Some(BollingerBands {
        upper: middle + std_mult * std_dev,
        middle,
        lower: middle - std_mult * std_dev,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Volume
// ═══════════════════════════════════════════════════════════════════════════

/// Volume ratio, short-window trend, price correlation, and OBV.
///
/// Returns `None` below `volume_period` bars. The trend compares the last
/// `volume_trend_window` bars' average volume against the prior window's
/// with the configured fractional threshold; price direction is measured
/// the same way over closes, and the correlation labels agreement.
pub fn analyze_volume(candles: &[Candle], params: &IndicatorParams) -> Option<VolumeAnalysis> {
    let period = params.volume_period as usize;
    let window = params.volume_trend_window as usize;
    if period == 0 || window == 0 || candles.len() < period {
        return None;
    }

    let volumes: Vec<Decimal> = candles.iter().map(|c| c.volume).collect();
    let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();

    let current_volume = *volumes.last().expect("candles is non-empty");
    let avg_volume = volumes[volumes.len() - period..]
        .iter()
        .copied()
        .sum::<Decimal>()
        / Decimal::from(period as u64);

    let ratio = if avg_volume > Decimal::ZERO {
        current_volume / avg_volume
    } else {
        dec!(1)
    };

    let trend = window_trend(&volumes, window, params.volume_trend_threshold);
    let price_direction = window_trend(&closes, window, params.volume_trend_threshold);

    let correlation = match (price_direction, trend) {
        (VolumeTrend::Increasing, VolumeTrend::Increasing)
        | (VolumeTrend::Decreasing, VolumeTrend::Decreasing) => VolumeCorrelation::Confirmatory,
        (VolumeTrend::Increasing, VolumeTrend::Decreasing)
        | (VolumeTrend::Decreasing, VolumeTrend::Increasing) => VolumeCorrelation::Divergent,
        _ => VolumeCorrelation::Neutral,
    };

    // On-Balance Volume over the whole series.
    let mut obv = Decimal::ZERO;
    for pair in candles.windows(2) {
        if pair[1].close > pair[0].close {
            obv += pair[1].volume;
        } else if pair[1].close < pair[0].close {
            obv -= pair[1].volume;
        }
    }

    Some(VolumeAnalysis {
        current_volume,
        avg_volume,
        ratio,
        trend,
        correlation,
        obv,
    })
}

/// Compare the average of the last `window` values against the prior
/// `window` values. Exceeding `threshold` fractional change in either
/// direction labels the move; otherwise the window is Stable.
fn window_trend(values: &[Decimal], window: usize, threshold: Decimal) -> VolumeTrend {
    if values.len() < 2 * window {
        return VolumeTrend::Stable;
    }

    let window_d = Decimal::from(window as u64);
    let recent: Decimal =
        values[values.len() - window..].iter().copied().sum::<Decimal>() / window_d;
    let prior: Decimal = values[values.len() - 2 * window..values.len() - window]
        .iter()
        .copied()
        .sum::<Decimal>()
        / window_d;

    if prior.is_zero() {
        return if recent > Decimal::ZERO {
            VolumeTrend::Increasing
        } else {
            VolumeTrend::Stable
        };
    }

    if recent > prior * (dec!(1) + threshold) {
        VolumeTrend::Increasing
    } else if recent < prior * (dec!(1) - threshold) {
        VolumeTrend::Decreasing
    } else {
        VolumeTrend::Stable
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Support / Resistance
// ═══════════════════════════════════════════════════════════════════════════

/// Lowest low and highest high over the last `lookback` bars.
///
/// Returns `None` below `min_bars` bars.
pub fn price_levels(candles: &[Candle], lookback: usize, min_bars: usize) -> Option<PriceLevels> {
    if lookback == 0 || candles.len() < min_bars {
        return None;
    }

    let start = candles.len().saturating_sub(lookback);
    let recent = &candles[start..];

    let support = recent.iter().map(|c| c.low).min()?;
    let resistance = recent.iter().map(|c| c.high).max()?;

    Some(PriceLevels { support, resistance })
}

// ═══════════════════════════════════════════════════════════════════════════
// Composite
// ═══════════════════════════════════════════════════════════════════════════

/// Compute the full indicator snapshot for the last candle of the series.
///
/// Each field is independently `None` when the series is too short for it.
pub fn compute_all(series: &CandleSeries, params: &IndicatorParams) -> IndicatorSet {
    let closes = series.closes();
    let candles = series.candles();

    IndicatorSet {
        rsi: rsi(&closes, params.rsi_period as usize, params.rsi_flat_value),
        macd: macd(
            &closes,
            params.macd_fast as usize,
            params.macd_slow as usize,
            params.macd_signal as usize,
        ),
        sma_20: sma(&closes, params.sma_short as usize),
        sma_50: sma(&closes, params.sma_mid as usize),
        sma_200: sma(&closes, params.sma_long as usize),
        bollinger: bollinger_bands(&closes, params.bb_period as usize, params.bb_std),
        volume: analyze_volume(candles, params),
        levels: price_levels(
            candles,
            params.level_lookback as usize,
            params.level_min_bars as usize,
        ),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
