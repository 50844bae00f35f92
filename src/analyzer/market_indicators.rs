use crate::model::{Momentum, Trend, Volatility};
use crate::utils::mean;

pub struct MarketIndicators;

impl MarketIndicators {
    /// Percent move from the first to the last price of the window.
    pub fn trend_percent(window: &[f64]) -> f64 {
        match (window.first(), window.last()) {
            (Some(&first), Some(&last)) if first != 0.0 => (last - first) / first * 100.0,
            _ => 0.0,
        }
    }

    pub fn classify_trend(percent: f64) -> Trend {
        if percent > 5.0 {
            Trend::StrongUptrend
        } else if percent > 2.0 {
            Trend::Uptrend
        } else if percent < -5.0 {
            Trend::StrongDowntrend
        } else if percent < -2.0 {
            Trend::Downtrend
        } else {
            Trend::Neutral
        }
    }

    /// Percent change of the last 5 prices' mean against the 5 before them.
    pub fn momentum_change(prices: &[f64]) -> f64 {
        if prices.len() < 10 {
            return 0.0;
        }
        let n = prices.len();
        let older = mean(&prices[n - 10..n - 5]);
        let recent = mean(&prices[n - 5..]);
        if older == 0.0 {
            return 0.0;
        }
        (recent - older) / older * 100.0
    }

    pub fn classify_momentum(change: f64) -> Momentum {
        if change > 3.0 {
            Momentum::StrongPositive
        } else if change > 1.0 {
            Momentum::Positive
        } else if change < -3.0 {
            Momentum::StrongNegative
        } else if change < -1.0 {
            Momentum::Negative
        } else {
            Momentum::Neutral
        }
    }

    /// Simple returns between consecutive prices.
    pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
        prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
    }

    /// Population standard deviation of simple returns, in percent.
    pub fn return_std_dev(prices: &[f64]) -> f64 {
        let returns = Self::simple_returns(prices);
        if returns.is_empty() {
            return 0.0;
        }
        let avg = mean(&returns);
        let variance = returns.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / returns.len() as f64;
        variance.sqrt() * 100.0
    }

    pub fn classify_volatility(std_dev: f64) -> Volatility {
        if std_dev > 3.0 {
            Volatility::High
        } else if std_dev > 1.5 {
            Volatility::Medium
        } else {
            Volatility::Low
        }
    }

    /// (min, max) of the window.
    pub fn support_resistance(window: &[f64]) -> (f64, f64) {
        window
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| (lo.min(p), hi.max(p)))
    }
}
