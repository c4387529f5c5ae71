use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::indicator::{IndicatorSet, PerformanceSummary};

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Hold,
    Sell,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
        }
    }
}

/// Overall trend direction from moving-average relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// How decisively the moving averages agree on the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStrength {
    Strong,
    Moderate,
    Weak,
}

impl TrendStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

/// Trend classification from price / SMA20 / SMA50 / SMA200 comparisons.
///
/// `score` is the signed comparison tally (roughly -5..+5) kept for
/// display and audit; unavailable comparisons contribute 0 to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    pub strength: TrendStrength,
    pub score: i32,
}

/// Outcome of the rule-based weighted scorer.
///
/// `max_score` is the sum of weights of the factors that were actually
/// computable for this series, so `confidence` is always a percentage of
/// an honest ceiling. `max_score == 0` is the defined degenerate case:
/// HOLD with confidence 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    /// Percent of the achievable ceiling, in [0, 100].
    #[serde(with = "rust_decimal::serde::str")]
    pub confidence: Decimal,
    pub score: i32,
    pub max_score: u32,
}

/// Which estimator produced the final hybrid decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HybridSource {
    /// Rule-based result alone (no usable statistical prediction).
    Traditional,
    /// Statistical prediction overrode a disagreeing rule-based result.
    MlHighConfidence,
    /// Both estimators agreed; confidences averaged.
    HybridAgreement,
    /// Estimators disagreed below the override threshold — insufficient
    /// evidence, distinct from either single-source signal.
    Conflicted,
}

/// Externally supplied statistical prediction for the same instrument/time.
///
/// The engine never computes this; it only consumes it. Either `confidence`
/// (0..100) or `probability` (0..1) must be present for the prediction to
/// participate in blending — `probability * 100` is treated as equivalent
/// to `confidence` when only the probability is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub signal: Signal,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub probability: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl MlPrediction {
    /// Effective confidence on the 0..100 scale, if any was supplied.
    pub fn confidence_pct(&self) -> Option<Decimal> {
        self.confidence
            .or_else(|| self.probability.map(|p| p * Decimal::from(100u32)))
    }
}

/// Final blended decision plus everything used to derive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridResult {
    pub signal: Signal,
    #[serde(with = "rust_decimal::serde::str")]
    pub confidence: Decimal,
    pub source: HybridSource,
    pub rule: SignalResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml: Option<MlPrediction>,
    pub summary: String,
}

/// Complete output of one analysis call, handed to the result consumer
/// for display and audit. Created fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    pub indicators: IndicatorSet,
    pub trend: TrendResult,
    pub performance: PerformanceSummary,
    pub hybrid: HybridResult,
}

impl AnalysisReport {
    /// Final recommendation after blending.
    pub fn signal(&self) -> Signal {
        self.hybrid.signal
    }

    /// Final confidence after blending.
    pub fn confidence(&self) -> Decimal {
        self.hybrid.confidence
    }
}
