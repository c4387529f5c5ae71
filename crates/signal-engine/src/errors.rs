use thiserror::Error;

/// Typed error hierarchy for the signal engine.
///
/// Only structural series defects are fatal. Insufficient history for an
/// individual indicator is never an error; it surfaces as an absent field
/// in [`crate::types::IndicatorSet`] and is excluded from scoring.
/// Application code wraps these with `anyhow::Context` for propagation.
#[derive(Error, Debug)]
pub enum EngineError {
    // -- Series validation ----------------------------------------------------
    #[error("candle series is empty")]
    EmptySeries,

    #[error("non-monotonic timestamp at index {index}: {timestamp} follows {previous}")]
    NonMonotonicTimestamp {
        index: usize,
        timestamp: i64,
        previous: i64,
    },

    #[error("non-positive price at index {index}")]
    NonPositivePrice { index: usize },

    #[error("negative volume at index {index}")]
    NegativeVolume { index: usize },

    // -- Configuration --------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),

    // -- Forwarded errors -----------------------------------------------------
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
