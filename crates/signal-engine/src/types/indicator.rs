use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// MACD values aligned to the last candle of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    #[serde(with = "rust_decimal::serde::str")]
    pub line: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub signal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub histogram: Decimal,
}

/// Bollinger Band envelope (SMA middle, population-σ half-width).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    #[serde(with = "rust_decimal::serde::str")]
    pub upper: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub middle: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub lower: Decimal,
}

/// Direction of the short-window volume average relative to the prior window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
    Stable,
}

/// Whether volume direction confirms the concurrent price direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeCorrelation {
    Confirmatory,
    Divergent,
    Neutral,
}

/// Volume snapshot for the last candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    #[serde(with = "rust_decimal::serde::str")]
    pub current_volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub avg_volume: Decimal,
    /// Current volume / average volume. 1 when the average is zero.
    #[serde(with = "rust_decimal::serde::str")]
    pub ratio: Decimal,
    pub trend: VolumeTrend,
    pub correlation: VolumeCorrelation,
    /// On-Balance Volume accumulated over the whole series.
    #[serde(with = "rust_decimal::serde::str")]
    pub obv: Decimal,
}

/// Support/resistance band over the recent lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    #[serde(with = "rust_decimal::serde::str")]
    pub support: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub resistance: Decimal,
}

/// Snapshot of all computed indicators, aligned to the last candle.
///
/// A `None` field means the series was too short for that indicator — an
/// absent value is distinct from a computed zero and is excluded from the
/// weighted scorer's ceiling rather than counted against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rsi: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd: Option<Macd>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sma_20: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sma_50: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sma_200: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBands>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<PriceLevels>,
}

/// Trailing returns over fixed lookback windows (percent), plus the
/// 250-bar high/low band. A window that is not covered by the series is
/// omitted entirely — never reported as a fabricated 0%.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub week_return: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub month_return: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub quarter_return: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub half_year_return: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub year_return: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub week_52_high: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub week_52_low: Option<Decimal>,
}
