use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Top-level aggregate
// ---------------------------------------------------------------------------

/// All tunable parameters of the engine, passed explicitly into
/// [`crate::core::analyzer::SignalEngine::new`]. Every field has a default
/// matching the production parameter set, so a partial JSON file (or none
/// at all) yields a working configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub indicators: IndicatorParams,
    pub scoring: ScoringConfig,
    pub hybrid: HybridConfig,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorParams::default(),
            scoring: ScoringConfig::default(),
            hybrid: HybridConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Indicator parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    /// Short / mid / long simple moving average periods (20 / 50 / 200).
    pub sma_short: u32,
    pub sma_mid: u32,
    pub sma_long: u32,
    pub rsi_period: u32,
    /// RSI reported for a flat window where both average gain and average
    /// loss are zero. Pinned by test fixtures rather than universal truth.
    #[serde(with = "rust_decimal::serde::str")]
    pub rsi_flat_value: Decimal,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub bb_period: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub bb_std: Decimal,
    /// Averaging window for the volume ratio.
    pub volume_period: u32,
    /// Window size for the volume/price direction comparison (last N bars
    /// vs the prior N bars).
    pub volume_trend_window: u32,
    /// Fractional change required to call a window Increasing/Decreasing.
    #[serde(with = "rust_decimal::serde::str")]
    pub volume_trend_threshold: Decimal,
    /// Support/resistance lookback and the minimum bars to report levels.
    pub level_lookback: u32,
    pub level_min_bars: u32,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_short: 20,
            sma_mid: 50,
            sma_long: 200,
            rsi_period: 14,
            rsi_flat_value: dec!(50),
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_std: dec!(2),
            volume_period: 20,
            volume_trend_window: 5,
            volume_trend_threshold: dec!(0.10),
            level_lookback: 50,
            level_min_bars: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule-based scorer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub rsi_weight: u32,
    pub macd_weight: u32,
    /// Full chain: price > SMA20 > SMA50 > SMA200 (or the mirror).
    pub ma_alignment_weight: u32,
    /// Price vs the long SMA alone.
    pub long_ma_weight: u32,
    pub bollinger_weight: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub rsi_oversold: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub rsi_overbought: Decimal,
    /// score >= buy_threshold => BUY; score <= sell_threshold => SELL.
    pub buy_threshold: i32,
    pub sell_threshold: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rsi_weight: 2,
            macd_weight: 2,
            ma_alignment_weight: 3,
            long_ma_weight: 1,
            bollinger_weight: 1,
            rsi_oversold: dec!(30),
            rsi_overbought: dec!(70),
            buy_threshold: 3,
            sell_threshold: -3,
        }
    }
}

// ---------------------------------------------------------------------------
// Hybrid combiner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HybridConfig {
    /// A disagreeing statistical prediction overrides the rule-based result
    /// only when its confidence strictly exceeds this.
    #[serde(with = "rust_decimal::serde::str")]
    pub ml_override_confidence: Decimal,
    /// Confidence reported for the HOLD fallback on unresolved disagreement.
    #[serde(with = "rust_decimal::serde::str")]
    pub conflict_confidence: Decimal,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            ml_override_confidence: dec!(75),
            conflict_confidence: dec!(50),
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
        }
    }
}
