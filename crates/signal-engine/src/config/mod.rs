pub mod types;
pub mod validate;

pub use types::*;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Load an [`EngineConfig`] from a JSON file, apply environment variable
/// overrides, and validate.
///
/// Every field is optional in the file; missing fields fall back to the
/// production defaults.
///
/// # Environment variable overrides
///
/// | Env Var                         | Config Field                   |
/// |---------------------------------|--------------------------------|
/// | `ENGINE_ML_OVERRIDE_CONFIDENCE` | `hybrid.ml_override_confidence`|
/// | `ENGINE_LOG_DIR`                | `logging.log_dir`              |
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let mut config: EngineConfig =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    apply_env_overrides(&mut config);
    validate::validate_config(&config)?;

    Ok(config)
}

// ---------------------------------------------------------------------------
// Environment variable overrides
// ---------------------------------------------------------------------------

/// Only non-empty env vars take effect. Parse failures are skipped and the
/// file/default value remains.
fn apply_env_overrides(config: &mut EngineConfig) {
    if let Some(val) = env_decimal("ENGINE_ML_OVERRIDE_CONFIDENCE") {
        info!(%val, "env override: ENGINE_ML_OVERRIDE_CONFIDENCE");
        config.hybrid.ml_override_confidence = val;
    }

    if let Some(val) = env_string("ENGINE_LOG_DIR") {
        info!("env override: ENGINE_LOG_DIR");
        config.logging.log_dir = val;
    }
}

/// Read a non-empty env var as a `String`.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Read a non-empty env var and parse it as `Decimal`.
fn env_decimal(key: &str) -> Option<Decimal> {
    env_string(key).and_then(|v| Decimal::from_str(&v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serial_test::serial;

    fn clean_engine_env() {
        for key in ["ENGINE_ML_OVERRIDE_CONFIDENCE", "ENGINE_LOG_DIR"] {
            std::env::remove_var(key);
        }
    }

    fn write_config(contents: &str) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("engine.json"), contents).unwrap();
        tmp
    }

    #[test]
    #[serial]
    fn test_load_empty_object_yields_defaults() {
        clean_engine_env();
        let tmp = write_config("{}");
        let config = load_config(&tmp.path().join("engine.json")).unwrap();
        assert_eq!(config.indicators.rsi_period, 14);
        assert_eq!(config.scoring.ma_alignment_weight, 3);
        assert_eq!(config.hybrid.ml_override_confidence, dec!(75));
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_load_partial_file() {
        clean_engine_env();
        let tmp = write_config(
            r#"{
                "indicators": { "rsi_period": 7, "rsi_flat_value": "50" },
                "hybrid": { "ml_override_confidence": "80" }
            }"#,
        );
        let config = load_config(&tmp.path().join("engine.json")).unwrap();
        assert_eq!(config.indicators.rsi_period, 7);
        assert_eq!(config.indicators.sma_long, 200);
        assert_eq!(config.hybrid.ml_override_confidence, dec!(80));
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_missing_file_errors() {
        clean_engine_env();
        let tmp = tempfile::tempdir().unwrap();
        let err = load_config(&tmp.path().join("engine.json")).unwrap_err();
        assert!(
            err.to_string().contains("failed to read config file"),
            "expected file-not-found error, got: {err}"
        );
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_invalid_file_rejected_by_validation() {
        clean_engine_env();
        let tmp = write_config(r#"{ "indicators": { "sma_short": 300 } }"#);
        let err = load_config(&tmp.path().join("engine.json")).unwrap_err();
        assert!(err.to_string().contains("sma_short"));
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_env_override_ml_confidence() {
        clean_engine_env();
        let tmp = write_config("{}");
        std::env::set_var("ENGINE_ML_OVERRIDE_CONFIDENCE", "82.5");
        let config = load_config(&tmp.path().join("engine.json")).unwrap();
        assert_eq!(config.hybrid.ml_override_confidence, dec!(82.5));
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_env_override_empty_string_ignored() {
        clean_engine_env();
        let tmp = write_config("{}");
        std::env::set_var("ENGINE_ML_OVERRIDE_CONFIDENCE", "");
        let config = load_config(&tmp.path().join("engine.json")).unwrap();
        assert_eq!(config.hybrid.ml_override_confidence, dec!(75));
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_env_override_invalid_parse_ignored() {
        clean_engine_env();
        let tmp = write_config("{}");
        std::env::set_var("ENGINE_ML_OVERRIDE_CONFIDENCE", "not_a_number");
        let config = load_config(&tmp.path().join("engine.json")).unwrap();
        assert_eq!(config.hybrid.ml_override_confidence, dec!(75));
        clean_engine_env();
    }

    #[test]
    #[serial]
    fn test_env_override_out_of_range_rejected_by_validation() {
        clean_engine_env();
        let tmp = write_config("{}");
        std::env::set_var("ENGINE_ML_OVERRIDE_CONFIDENCE", "150");
        let err = load_config(&tmp.path().join("engine.json")).unwrap_err();
        assert!(err.to_string().contains("ml_override_confidence"));
        clean_engine_env();
    }
}
