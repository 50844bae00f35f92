use crate::analyzer::price_analysis::average_volume;
use crate::model::{HistoricalStats, TimeSeries};

/// Summarizes the whole series: last price, period change, range and average volume.
pub fn build_historical_stats(series: &TimeSeries) -> HistoricalStats {
    let prices = series.prices();
    let first = prices[0];
    let current_price = series.current_price();
    let (low, high) = prices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    HistoricalStats {
        // Series spans `len - 1` days back to today.
        days: series.len() - 1,
        current_price,
        change_percent: (current_price - first) / first * 100.0,
        high,
        low,
        avg_volume: average_volume(series.volumes()),
    }
}
