use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// A single OHLCV candle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub open: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub close: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
}

/// A validated, time-ordered candle series (oldest to newest).
///
/// Construction is the structural-validity gate: an empty series, a
/// duplicate or out-of-order timestamp, a non-positive price, or a negative
/// volume is rejected with [`EngineError`] and nothing is computed. Once
/// built, the series is immutable and every downstream computation may rely
/// on its invariants.
#[derive(Debug, Clone, Serialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Validate and wrap a candle vector.
    ///
    /// The series is rejected as a whole on the first structural defect;
    /// there is no partial acceptance.
    pub fn new(candles: Vec<Candle>) -> Result<Self, EngineError> {
        if candles.is_empty() {
            return Err(EngineError::EmptySeries);
        }

        for (index, candle) in candles.iter().enumerate() {
            let prices = [candle.open, candle.high, candle.low, candle.close];
            if prices.iter().any(|p| *p <= Decimal::ZERO) {
                return Err(EngineError::NonPositivePrice { index });
            }
            if candle.volume < Decimal::ZERO {
                return Err(EngineError::NegativeVolume { index });
            }
            if index > 0 {
                let previous = candles[index - 1].timestamp;
                if candle.timestamp <= previous {
                    return Err(EngineError::NonMonotonicTimestamp {
                        index,
                        timestamp: candle.timestamp,
                        previous,
                    });
                }
            }
        }

        Ok(Self { candles })
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false by construction; kept for slice-like ergonomics.
        self.candles.is_empty()
    }

    /// The most recent candle. Safe: the series is never empty.
    pub fn last(&self) -> &Candle {
        self.candles.last().expect("series is non-empty by construction")
    }

    /// Closing prices, oldest to newest.
    pub fn closes(&self) -> Vec<Decimal> {
        self.candles.iter().map(|c| c.close).collect()
    }
}
