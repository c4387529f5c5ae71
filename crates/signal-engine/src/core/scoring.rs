//! Rule-based weighted signal scorer.
//!
//! Five factors vote with fixed weights; the achievable ceiling is
//! recomputed per call from the factors that were actually available, so
//! short history lowers the denominator instead of silently dragging the
//! confidence down. That is a policy decision, not an oversight.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::ScoringConfig;
use crate::types::{IndicatorSet, Signal, SignalResult};

/// Score the indicator snapshot into a BUY/HOLD/SELL decision.
///
/// A factor whose required indicator is `None` is excluded from both the
/// running score and `max_score`. An available factor whose neither
/// condition fires still contributes its weight to `max_score`.
/// `confidence = round(100 * |score| / max_score)` clamped to [0, 100];
/// `max_score == 0` is the defined degenerate case: HOLD with confidence 0.
pub fn score_signal(price: Decimal, indicators: &IndicatorSet, config: &ScoringConfig) -> SignalResult {
    let mut score: i32 = 0;
    let mut max_score: u32 = 0;

    // RSI extremes.
    if let Some(rsi) = indicators.rsi {
        max_score += config.rsi_weight;
        if rsi < config.rsi_oversold {
            score += config.rsi_weight as i32;
        } else if rsi > config.rsi_overbought {
            score -= config.rsi_weight as i32;
        }
    }

    // MACD histogram.
    if let Some(macd) = &indicators.macd {
        max_score += config.macd_weight;
        if macd.histogram > Decimal::ZERO {
            score += config.macd_weight as i32;
        } else if macd.histogram < Decimal::ZERO {
            score -= config.macd_weight as i32;
        }
    }

    // Full moving-average alignment (needs all three SMAs).
    if let (Some(s20), Some(s50), Some(s200)) =
        (indicators.sma_20, indicators.sma_50, indicators.sma_200)
    {
        max_score += config.ma_alignment_weight;
        if price > s20 && s20 > s50 && s50 > s200 {
            score += config.ma_alignment_weight as i32;
        } else if price < s20 && s20 < s50 && s50 < s200 {
            score -= config.ma_alignment_weight as i32;
        }
    }

    // Price vs the long SMA alone.
    if let Some(s200) = indicators.sma_200 {
        max_score += config.long_ma_weight;
        if price > s200 {
            score += config.long_ma_weight as i32;
        } else if price < s200 {
            score -= config.long_ma_weight as i32;
        }
    }

    // Bollinger band position.
    if let Some(bb) = &indicators.bollinger {
        max_score += config.bollinger_weight;
        if price < bb.lower {
            score += config.bollinger_weight as i32;
        } else if price > bb.upper {
            score -= config.bollinger_weight as i32;
        }
    }

    if max_score == 0 {
        debug!("all scoring factors unavailable; degenerate HOLD");
        return SignalResult {
            signal: Signal::Hold,
            confidence: Decimal::ZERO,
            score: 0,
            max_score: 0,
        };
    }

    let signal = if score >= config.buy_threshold {
        Signal::Buy
    } else if score <= config.sell_threshold {
        Signal::Sell
    } else {
        Signal::Hold
    };

    let confidence = (Decimal::from(score.unsigned_abs()) * dec!(100)
        / Decimal::from(max_score))
    .round()
    .clamp(Decimal::ZERO, dec!(100));

    debug!(score, max_score, signal = signal.as_str(), %confidence, "rule-based signal scored");

    SignalResult {
        signal,
        confidence,
        score,
        max_score,
    }
}
