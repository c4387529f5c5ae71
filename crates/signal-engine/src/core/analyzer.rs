//! Engine entry point: one synchronous analysis pass over a candle series.
//!
//! The pipeline is one-way: candle series → indicator snapshot →
//! {trend, rule-based score, performance} → hybrid blend → report.
//! No internal concurrency, no I/O, no shared mutable state; analyses for
//! different instruments may run on parallel threads with no coordination.
//! Identical input produces identical output, so callers may cache freely.

use tracing::debug;

use crate::config::EngineConfig;
use crate::core::{hybrid, indicators, performance, scoring, trend};
use crate::types::{AnalysisReport, CandleSeries, MlPrediction};

/// Stateless analysis engine parameterized by an explicit configuration.
pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full analysis of a validated candle series.
    ///
    /// `prediction` is the externally produced statistical estimate for the
    /// same instrument and time; pass `None` when the model collaborator
    /// has nothing to offer and the result degrades to the rule-based
    /// signal alone.
    pub fn analyze(
        &self,
        series: &CandleSeries,
        prediction: Option<&MlPrediction>,
    ) -> AnalysisReport {
        let price = series.last().close;

        let indicator_set = indicators::compute_all(series, &self.config.indicators);
        debug!(
            bars = series.len(),
            rsi = ?indicator_set.rsi,
            has_macd = indicator_set.macd.is_some(),
            "indicators computed"
        );

        let trend_result = trend::classify(price, &indicator_set);
        let performance_summary = performance::summarize(series);
        let rule_result = scoring::score_signal(price, &indicator_set, &self.config.scoring);

        let hybrid_result = hybrid::combine(
            rule_result,
            prediction,
            &trend_result,
            &indicator_set,
            &self.config,
        );

        AnalysisReport {
            last_price: price,
            indicators: indicator_set,
            trend: trend_result,
            performance: performance_summary,
            hybrid: hybrid_result,
        }
    }
}
