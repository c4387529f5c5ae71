use anyhow::{bail, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::EngineConfig;

/// Validate invariants across the config that serde alone cannot enforce.
/// Called automatically by [`super::load_config`].
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    validate_indicator_params(config, &mut errors);
    validate_scoring_config(config, &mut errors);
    validate_hybrid_config(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        let msg = format!(
            "Configuration validation failed ({} error{}):\n  - {}",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" },
            errors.join("\n  - ")
        );
        bail!("{msg}");
    }
}

// ---------------------------------------------------------------------------
// Indicator parameters
// ---------------------------------------------------------------------------

fn validate_indicator_params(config: &EngineConfig, errors: &mut Vec<String>) {
    let ind = &config.indicators;

    // SMA ordering: short < mid < long.
    if ind.sma_short == 0 {
        errors.push("indicators: sma_short must be > 0".into());
    }
    if ind.sma_short >= ind.sma_mid {
        errors.push(format!(
            "indicators: sma_short ({}) must be < sma_mid ({})",
            ind.sma_short, ind.sma_mid
        ));
    }
    if ind.sma_mid >= ind.sma_long {
        errors.push(format!(
            "indicators: sma_mid ({}) must be < sma_long ({})",
            ind.sma_mid, ind.sma_long
        ));
    }

    if ind.rsi_period == 0 {
        errors.push("indicators: rsi_period must be > 0".into());
    }
    if ind.rsi_flat_value < Decimal::ZERO || ind.rsi_flat_value > dec!(100) {
        errors.push(format!(
            "indicators: rsi_flat_value ({}) must be in [0, 100]",
            ind.rsi_flat_value
        ));
    }

    // MACD: fast < slow, signal period positive.
    if ind.macd_fast == 0 || ind.macd_fast >= ind.macd_slow {
        errors.push(format!(
            "indicators: macd_fast ({}) must be > 0 and < macd_slow ({})",
            ind.macd_fast, ind.macd_slow
        ));
    }
    if ind.macd_signal == 0 {
        errors.push("indicators: macd_signal must be > 0".into());
    }

    if ind.bb_period == 0 {
        errors.push("indicators: bb_period must be > 0".into());
    }
    if ind.bb_std <= Decimal::ZERO {
        errors.push(format!(
            "indicators: bb_std ({}) must be > 0",
            ind.bb_std
        ));
    }

    if ind.volume_trend_window == 0 {
        errors.push("indicators: volume_trend_window must be > 0".into());
    }
    // Two full windows must fit inside the averaging period.
    if ind.volume_period < 2 * ind.volume_trend_window {
        errors.push(format!(
            "indicators: volume_period ({}) must be >= 2 * volume_trend_window ({})",
            ind.volume_period, ind.volume_trend_window
        ));
    }
    if ind.volume_trend_threshold < Decimal::ZERO {
        errors.push(format!(
            "indicators: volume_trend_threshold ({}) must be >= 0",
            ind.volume_trend_threshold
        ));
    }

    if ind.level_min_bars == 0 || ind.level_min_bars > ind.level_lookback {
        errors.push(format!(
            "indicators: level_min_bars ({}) must be in [1, level_lookback ({})]",
            ind.level_min_bars, ind.level_lookback
        ));
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn validate_scoring_config(config: &EngineConfig, errors: &mut Vec<String>) {
    let sc = &config.scoring;

    let total_weight = sc.rsi_weight
        + sc.macd_weight
        + sc.ma_alignment_weight
        + sc.long_ma_weight
        + sc.bollinger_weight;
    if total_weight == 0 {
        errors.push("scoring: at least one factor weight must be > 0".into());
    }

    if sc.rsi_oversold >= sc.rsi_overbought {
        errors.push(format!(
            "scoring: rsi_oversold ({}) must be < rsi_overbought ({})",
            sc.rsi_oversold, sc.rsi_overbought
        ));
    }
    for (name, value) in [
        ("rsi_oversold", sc.rsi_oversold),
        ("rsi_overbought", sc.rsi_overbought),
    ] {
        if value < Decimal::ZERO || value > dec!(100) {
            errors.push(format!("scoring: {name} ({value}) must be in [0, 100]"));
        }
    }

    if sc.buy_threshold <= 0 {
        errors.push(format!(
            "scoring: buy_threshold ({}) must be > 0",
            sc.buy_threshold
        ));
    }
    if sc.sell_threshold >= 0 {
        errors.push(format!(
            "scoring: sell_threshold ({}) must be < 0",
            sc.sell_threshold
        ));
    }
}

// ---------------------------------------------------------------------------
// Hybrid combiner
// ---------------------------------------------------------------------------

fn validate_hybrid_config(config: &EngineConfig, errors: &mut Vec<String>) {
    let hy = &config.hybrid;

    for (name, value) in [
        ("ml_override_confidence", hy.ml_override_confidence),
        ("conflict_confidence", hy.conflict_confidence),
    ] {
        if value < Decimal::ZERO || value > dec!(100) {
            errors.push(format!("hybrid: {name} ({value}) must be in [0, 100]"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_sma_ordering_rejected() {
        let mut config = EngineConfig::default();
        config.indicators.sma_short = 50;
        config.indicators.sma_mid = 20;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("sma_short"));
    }

    #[test]
    fn test_macd_fast_not_below_slow_rejected() {
        let mut config = EngineConfig::default();
        config.indicators.macd_fast = 26;
        config.indicators.macd_slow = 26;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("macd_fast"));
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.rsi_weight = 0;
        config.scoring.macd_weight = 0;
        config.scoring.ma_alignment_weight = 0;
        config.scoring.long_ma_weight = 0;
        config.scoring.bollinger_weight = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("factor weight"));
    }

    #[test]
    fn test_rsi_bands_out_of_range_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.rsi_overbought = dec!(130);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("rsi_overbought"));
    }

    #[test]
    fn test_positive_sell_threshold_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.sell_threshold = 3;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("sell_threshold"));
    }

    #[test]
    fn test_ml_override_out_of_range_rejected() {
        let mut config = EngineConfig::default();
        config.hybrid.ml_override_confidence = dec!(101);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("ml_override_confidence"));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut config = EngineConfig::default();
        config.indicators.rsi_period = 0;
        config.scoring.buy_threshold = 0;
        let err = validate_config(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2 errors"), "expected 2 errors, got: {msg}");
    }
}
