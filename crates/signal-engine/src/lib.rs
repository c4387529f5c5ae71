//! Technical signal engine for a trading-dashboard backend.
//!
//! Turns a time-ordered OHLCV candle series for a single instrument into a
//! BUY / HOLD / SELL recommendation with a numeric confidence:
//!
//! 1. **Indicator library** — SMA, EMA, RSI, MACD, Bollinger Bands,
//!    volume analysis, and support/resistance, each reporting "unavailable"
//!    rather than failing when history is short.
//! 2. **Trend classifier** — moving-average relationships mapped to a
//!    direction and strength label.
//! 3. **Rule-based scorer** — weighted indicator votes against a ceiling
//!    recomputed from the factors actually available.
//! 4. **Performance summarizer** — trailing returns over fixed windows.
//! 5. **Hybrid combiner** — optional blend with an externally supplied
//!    statistical prediction, plus a deterministic text summary.
//!
//! The engine performs no I/O and holds no shared state: fetching candles
//! and invoking the statistical model are the caller's responsibility, and
//! one analysis call is a pure function of its inputs.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use signal_engine::{Candle, CandleSeries, EngineConfig, SignalEngine};
//!
//! let candles: Vec<Candle> = (0..60)
//!     .map(|i| Candle {
//!         timestamp: i,
//!         open: dec!(100),
//!         high: dec!(101),
//!         low: dec!(99),
//!         close: dec!(100) + rust_decimal::Decimal::from(i % 5),
//!         volume: dec!(1000),
//!     })
//!     .collect();
//! let series = CandleSeries::new(candles).unwrap();
//!
//! let engine = SignalEngine::new(EngineConfig::default());
//! let report = engine.analyze(&series, None);
//! println!("{} ({}%)", report.signal().as_str(), report.confidence());
//! ```

pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::EngineConfig;
pub use core::analyzer::SignalEngine;
pub use errors::EngineError;
pub use types::{
    AnalysisReport, Candle, CandleSeries, HybridResult, HybridSource, IndicatorSet, MlPrediction,
    PerformanceSummary, Signal, SignalResult, TrendDirection, TrendResult, TrendStrength,
};
