//! Trailing-return summarizer over fixed lookback windows.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{CandleSeries, PerformanceSummary};

/// Bar counts approximating calendar periods on daily candles.
const WEEK_BARS: usize = 5;
const MONTH_BARS: usize = 20;
const QUARTER_BARS: usize = 60;
const HALF_YEAR_BARS: usize = 120;
const YEAR_BARS: usize = 250;

/// Compute trailing percent returns and the trailing-year high/low band.
///
/// A window needs `window + 1` bars; an uncovered window is omitted from
/// the result rather than reported as 0%.
pub fn summarize(series: &CandleSeries) -> PerformanceSummary {
    let candles = series.candles();
    let last_close = series.last().close;

    let trailing = |window: usize| -> Option<Decimal> {
        if candles.len() < window + 1 {
            return None;
        }
        let base = candles[candles.len() - 1 - window].close;
        Some((last_close - base) / base * dec!(100))
    };

    let (week_52_high, week_52_low) = if candles.len() >= YEAR_BARS {
        let year = &candles[candles.len() - YEAR_BARS..];
        (
            year.iter().map(|c| c.high).max(),
            year.iter().map(|c| c.low).min(),
        )
    } else {
        (None, None)
    };

    PerformanceSummary {
        week_return: trailing(WEEK_BARS),
        month_return: trailing(MONTH_BARS),
        quarter_return: trailing(QUARTER_BARS),
        half_year_return: trailing(HALF_YEAR_BARS),
        year_return: trailing(YEAR_BARS),
        week_52_high,
        week_52_low,
    }
}
