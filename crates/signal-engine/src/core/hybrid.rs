//! Hybrid combiner: blends the rule-based result with an externally
//! supplied statistical prediction, and renders the deterministic
//! natural-language summary.
//!
//! The engine never computes the prediction; it only consumes one. A
//! missing or unusable prediction degrades to the rule-based result alone.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{
    HybridResult, HybridSource, IndicatorSet, MlPrediction, Signal, SignalResult, TrendDirection,
    TrendResult, VolumeCorrelation,
};

/// Volume-ratio cutoffs for the summary clauses.
const HIGH_VOLUME_RATIO: Decimal = dec!(1.5);
const LOW_VOLUME_RATIO: Decimal = dec!(0.7);

/// Blend the rule-based result with the statistical prediction.
///
/// Agreement averages the two confidences — agreement between independent
/// estimators is evidence of reliability, so the combiner must not simply
/// pick the higher number. Disagreement defers to the prediction only above
/// the configured override confidence; below it the result is an explicit
/// insufficient-evidence HOLD, distinct from either single-source signal.
pub fn combine(
    rule: SignalResult,
    prediction: Option<&MlPrediction>,
    trend: &TrendResult,
    indicators: &IndicatorSet,
    config: &EngineConfig,
) -> HybridResult {
    let usable = prediction.and_then(|p| p.confidence_pct().map(|c| (p, c)));

    let (signal, confidence, source) = match usable {
        None => (rule.signal, rule.confidence, HybridSource::Traditional),
        Some((ml, ml_confidence)) => {
            if ml.signal == rule.signal {
                let blended = (rule.confidence + ml_confidence) / dec!(2);
                (ml.signal, blended, HybridSource::HybridAgreement)
            } else if ml_confidence > config.hybrid.ml_override_confidence {
                (ml.signal, ml_confidence, HybridSource::MlHighConfidence)
            } else {
                (
                    Signal::Hold,
                    config.hybrid.conflict_confidence,
                    HybridSource::Conflicted,
                )
            }
        }
    };

    debug!(
        signal = signal.as_str(),
        %confidence,
        source = ?source,
        "hybrid decision"
    );

    let summary = summary_text(signal, trend, indicators, config);

    HybridResult {
        signal,
        confidence,
        source,
        rule,
        ml: prediction.cloned(),
        summary,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Summary text
// ═══════════════════════════════════════════════════════════════════════════

/// Render the human-readable summary from fixed templates.
///
/// Purely a function of the final signal, the trend label/strength, the
/// RSI state, and the volume context — byte-stable for identical input.
fn summary_text(
    signal: Signal,
    trend: &TrendResult,
    indicators: &IndicatorSet,
    config: &EngineConfig,
) -> String {
    let strength = trend.strength.as_str();

    let rsi_text = match indicators.rsi {
        Some(rsi) if rsi > config.scoring.rsi_overbought => {
            ", but showing overbought conditions"
        }
        Some(rsi) if rsi < config.scoring.rsi_oversold => ", showing oversold conditions",
        _ => "",
    };

    let volume_text = match &indicators.volume {
        Some(vol) if vol.ratio > HIGH_VOLUME_RATIO => " High volume confirms the move.",
        Some(vol) if vol.ratio < LOW_VOLUME_RATIO => " Low volume suggests caution.",
        Some(vol) if vol.correlation == VolumeCorrelation::Divergent => {
            " Volume not confirming price action."
        }
        _ => "",
    };

    match (signal, trend.direction) {
        (Signal::Buy, TrendDirection::Bullish) => format!(
            "Strong buy signal detected. Stock is in a {strength} bullish trend{rsi_text}.{volume_text} Good entry opportunity."
        ),
        (Signal::Buy, TrendDirection::Bearish) => format!(
            "Buy signal detected despite bearish trend. Potential reversal forming{rsi_text}.{volume_text} Exercise caution."
        ),
        (Signal::Buy, TrendDirection::Neutral) => format!(
            "Buy signal detected. Stock showing bullish momentum{rsi_text}.{volume_text} Monitor for trend confirmation."
        ),
        (Signal::Sell, TrendDirection::Bullish) => format!(
            "Sell signal detected despite bullish trend. Consider profit booking{rsi_text}.{volume_text} Watch for reversal signs."
        ),
        (Signal::Sell, TrendDirection::Bearish) => format!(
            "Strong sell signal. Stock in {strength} bearish trend{rsi_text}.{volume_text} Exit recommended."
        ),
        (Signal::Sell, TrendDirection::Neutral) => format!(
            "Sell signal detected. Bearish momentum developing{rsi_text}.{volume_text} Consider reducing positions."
        ),
        (Signal::Hold, TrendDirection::Bullish) => format!(
            "Hold recommended. Stock in {strength} bullish trend{rsi_text}.{volume_text} Wait for better entry."
        ),
        (Signal::Hold, TrendDirection::Bearish) => format!(
            "Hold position. Stock in {strength} bearish trend{rsi_text}.{volume_text} Avoid fresh buying."
        ),
        (Signal::Hold, TrendDirection::Neutral) => format!(
            "Neutral stance. No clear trend{rsi_text}.{volume_text} Wait for clearer signals before action."
        ),
    }
}
