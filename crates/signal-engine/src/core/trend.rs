//! Trend classification from moving-average relationships.
//!
//! A pure mapping from the indicator snapshot: no state, idempotent.

use rust_decimal::Decimal;

use crate::types::{IndicatorSet, TrendDirection, TrendResult, TrendStrength};

/// Classify the trend from price vs SMA20/50/200 comparisons.
///
/// Five comparisons are tallied: price>SMA20, price>SMA50, price>SMA200,
/// SMA20>SMA50, SMA50>SMA200. Each computable comparison contributes +1
/// when it holds and -1 when it fails; a comparison with an unavailable
/// operand contributes 0 rather than penalizing the score. Mapping:
/// score >= 4 Bullish/Strong, >= 3 Bullish/Moderate, with the bearish
/// mirror, otherwise Neutral/Weak.
pub fn classify(price: Decimal, indicators: &IndicatorSet) -> TrendResult {
    let comparisons = [
        (Some(price), indicators.sma_20),
        (Some(price), indicators.sma_50),
        (Some(price), indicators.sma_200),
        (indicators.sma_20, indicators.sma_50),
        (indicators.sma_50, indicators.sma_200),
    ];

    let mut score = 0i32;
    for (lhs, rhs) in comparisons {
        if let (Some(a), Some(b)) = (lhs, rhs) {
            score += if a > b { 1 } else { -1 };
        }
    }

    let (direction, strength) = match score {
        s if s >= 4 => (TrendDirection::Bullish, TrendStrength::Strong),
        s if s >= 3 => (TrendDirection::Bullish, TrendStrength::Moderate),
        s if s <= -4 => (TrendDirection::Bearish, TrendStrength::Strong),
        s if s <= -3 => (TrendDirection::Bearish, TrendStrength::Moderate),
        _ => (TrendDirection::Neutral, TrendStrength::Weak),
    };

    TrendResult {
        direction,
        strength,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(
        sma_20: Option<Decimal>,
        sma_50: Option<Decimal>,
        sma_200: Option<Decimal>,
    ) -> IndicatorSet {
        IndicatorSet {
            sma_20,
            sma_50,
            sma_200,
            ..IndicatorSet::default()
        }
    }

    #[test]
    fn test_full_bullish_alignment_is_strong() {
        let ind = snapshot(Some(dec!(110)), Some(dec!(105)), Some(dec!(100)));
        let trend = classify(dec!(120), &ind);
        assert_eq!(trend.score, 5);
        assert_eq!(trend.direction, TrendDirection::Bullish);
        assert_eq!(trend.strength, TrendStrength::Strong);
    }

    #[test]
    fn test_full_bearish_alignment_is_strong() {
        let ind = snapshot(Some(dec!(90)), Some(dec!(95)), Some(dec!(100)));
        let trend = classify(dec!(80), &ind);
        assert_eq!(trend.score, -5);
        assert_eq!(trend.direction, TrendDirection::Bearish);
        assert_eq!(trend.strength, TrendStrength::Strong);
    }

    #[test]
    fn test_moderate_bullish() {
        // Price above all three SMAs, but SMA20 < SMA50 < SMA200: 3 - 2 = 1...
        // use price above short/mid and short>mid with long missing: 3 votes.
        let ind = snapshot(Some(dec!(105)), Some(dec!(100)), None);
        let trend = classify(dec!(110), &ind);
        assert_eq!(trend.score, 3);
        assert_eq!(trend.direction, TrendDirection::Bullish);
        assert_eq!(trend.strength, TrendStrength::Moderate);
    }

    #[test]
    fn test_mixed_signals_neutral() {
        // Price above the short SMAs but below a high long SMA: +1+1-1+1-1.
        let ind = snapshot(Some(dec!(100)), Some(dec!(98)), Some(dec!(108)));
        let trend = classify(dec!(102), &ind);
        assert_eq!(trend.score, 1);
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.strength, TrendStrength::Weak);
    }

    #[test]
    fn test_all_unavailable_is_neutral() {
        let ind = snapshot(None, None, None);
        let trend = classify(dec!(100), &ind);
        assert_eq!(trend.score, 0);
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.strength, TrendStrength::Weak);
    }

    #[test]
    fn test_unavailable_long_sma_caps_strength() {
        // Only 3 comparisons computable: Strong (>= 4) is unreachable.
        let ind = snapshot(Some(dec!(105)), Some(dec!(100)), None);
        let trend = classify(dec!(110), &ind);
        assert_eq!(trend.strength, TrendStrength::Moderate);
    }

    #[test]
    fn test_equal_price_and_sma_votes_bearish() {
        // Strict comparison: equality does not count as above.
        let ind = snapshot(Some(dec!(100)), None, None);
        let trend = classify(dec!(100), &ind);
        assert_eq!(trend.score, -1);
    }

    #[test]
    fn test_idempotent() {
        let ind = snapshot(Some(dec!(110)), Some(dec!(105)), Some(dec!(100)));
        assert_eq!(classify(dec!(120), &ind), classify(dec!(120), &ind));
    }
}
