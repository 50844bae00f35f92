use crate::analyzer::market_indicators::MarketIndicators;
use crate::model::{AnalysisResult, Momentum, TimeSeries, Trend, Volatility};
use crate::utils::format_volume_millions;
use tracing::debug;

/// Average daily volume above which liquidity is described as strong.
const STRONG_LIQUIDITY_VOLUME: f64 = 5_000_000.0;

/// Trait defining the interface for a price series analyzer.
pub trait Analyzer {
    fn analyze(&self, series: &TimeSeries) -> AnalysisResult;
}

/// Heuristic analyzer over the trailing 30-day window.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for AnalyzerImpl {
    /// Classifies trend, momentum and volatility of the window and derives support/resistance.
    fn analyze(&self, series: &TimeSeries) -> AnalysisResult {
        let window = series.window();

        let trend_percent = MarketIndicators::trend_percent(window);
        let trend = MarketIndicators::classify_trend(trend_percent);

        let momentum_change = MarketIndicators::momentum_change(window);
        let momentum = MarketIndicators::classify_momentum(momentum_change);

        let std_dev = MarketIndicators::return_std_dev(window);
        let volatility = MarketIndicators::classify_volatility(std_dev);

        let (support, resistance) = MarketIndicators::support_resistance(window);

        debug!(
            "{}: trend {:.2}% momentum {:.2}% std_dev {:.2}%",
            series.symbol(),
            trend_percent,
            momentum_change,
            std_dev
        );

        let avg_volume = average_volume(series.volumes());
        let insights = build_insights(trend, momentum, volatility, avg_volume);

        AnalysisResult {
            trend,
            momentum,
            volatility,
            support,
            resistance,
            insights,
        }
    }
}

pub fn average_volume(volumes: &[u64]) -> f64 {
    if volumes.is_empty() {
        return 0.0;
    }
    volumes.iter().map(|&v| v as f64).sum::<f64>() / volumes.len() as f64
}

fn build_insights(
    trend: Trend,
    momentum: Momentum,
    volatility: Volatility,
    avg_volume: f64,
) -> Vec<String> {
    let mut insights = Vec::with_capacity(4);

    let trend_text = trend.label().to_lowercase();
    if trend.is_up() {
        insights.push(format!(
            "The stock is showing a {} with consistent price appreciation over the past 30 days.",
            trend_text
        ));
    } else if trend.is_down() {
        insights.push(format!(
            "The stock is experiencing a {}, indicating selling pressure in recent trading sessions.",
            trend_text
        ));
    }

    let momentum_text = momentum.label().to_lowercase();
    if momentum.is_positive() {
        insights.push(format!(
            "Momentum indicators suggest {} buying pressure, which could continue in the short term.",
            momentum_text
        ));
    } else if momentum.is_negative() {
        insights.push(format!(
            "Momentum has turned {}, suggesting potential further downside risk.",
            momentum_text
        ));
    }

    let volatility_note = match volatility {
        Volatility::High => "indicating significant price swings and higher risk",
        Volatility::Medium => "showing moderate price fluctuations",
        Volatility::Low => "suggesting stable price movement",
    };
    insights.push(format!(
        "Volatility is {}, {}.",
        volatility.label().to_lowercase(),
        volatility_note
    ));

    let liquidity = if avg_volume > STRONG_LIQUIDITY_VOLUME {
        "strong"
    } else {
        "moderate"
    };
    insights.push(format!(
        "Average daily volume is {} shares, indicating {} liquidity.",
        format_volume_millions(avg_volume),
        liquidity
    ));

    insights
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn series_from(prices: Vec<f64>, volume: u64) -> TimeSeries {
        let len = prices.len();
        TimeSeries::new(
            "TEST",
            (0..len).map(|i| format!("1/{}/2026", i + 1)).collect(),
            prices,
            vec![volume; len],
        )
        .expect("valid test series")
    }

    /// 31 points; the trailing 30 rise linearly from 100 to 110.
    pub(crate) fn rising_series() -> TimeSeries {
        let mut prices = vec![99.0];
        prices.extend((0..30).map(|i| 100.0 + 10.0 * i as f64 / 29.0));
        series_from(prices, 2_000_000)
    }

    /// Alternates between 100 and 110, ending on 100.
    pub(crate) fn choppy_series() -> TimeSeries {
        let prices = (0..31).map(|i| if i % 2 == 0 { 100.0 } else { 110.0 }).collect();
        series_from(prices, 8_000_000)
    }

    #[test]
    fn test_flat_series_is_calm() {
        let result = AnalyzerImpl::new().analyze(&series_from(vec![50.0; 31], 1_000_000));
        assert_eq!(result.trend, Trend::Neutral);
        assert_eq!(result.momentum, Momentum::Neutral);
        assert_eq!(result.volatility, Volatility::Low);
        assert_eq!(result.support, 50.0);
        assert_eq!(result.resistance, 50.0);
        assert_eq!(
            result.insights,
            vec![
                "Volatility is low, suggesting stable price movement.".to_string(),
                "Average daily volume is 1.00M shares, indicating moderate liquidity.".to_string(),
            ]
        );
    }

    #[test]
    fn test_linear_rise_is_strong_uptrend() {
        let result = AnalyzerImpl::new().analyze(&rising_series());
        assert_eq!(result.trend, Trend::StrongUptrend);
        assert_eq!(result.momentum, Momentum::Positive);
        assert_eq!(result.volatility, Volatility::Low);
        assert_eq!(result.support, 100.0);
        assert!((result.resistance - 110.0).abs() < 1e-9);
        assert_eq!(
            result.insights[0],
            "The stock is showing a strong uptrend with consistent price appreciation over the past 30 days."
        );
        assert_eq!(
            result.insights[1],
            "Momentum indicators suggest positive buying pressure, which could continue in the short term."
        );
    }

    #[test]
    fn test_strictly_increasing_over_five_percent() {
        let prices: Vec<f64> = (0..45).map(|i| 20.0 * 1.01_f64.powi(i)).collect();
        let result = AnalyzerImpl::new().analyze(&series_from(prices, 1_000_000));
        assert_eq!(result.trend, Trend::StrongUptrend);
    }

    #[test]
    fn test_choppy_series_is_volatile_and_falling() {
        let series = choppy_series();
        let result = AnalyzerImpl::new().analyze(&series);
        assert_eq!(result.trend, Trend::StrongDowntrend);
        assert_eq!(result.momentum, Momentum::Negative);
        assert_eq!(result.volatility, Volatility::High);
        assert_eq!(
            result.insights,
            vec![
                "The stock is experiencing a strong downtrend, indicating selling pressure in recent trading sessions.".to_string(),
                "Momentum has turned negative, suggesting potential further downside risk.".to_string(),
                "Volatility is high, indicating significant price swings and higher risk.".to_string(),
                "Average daily volume is 8.00M shares, indicating strong liquidity.".to_string(),
            ]
        );
    }

    #[test]
    fn test_window_lies_between_support_and_resistance() {
        for series in [rising_series(), choppy_series()] {
            let result = AnalyzerImpl::new().analyze(&series);
            for &price in series.window() {
                assert!(result.support <= price && price <= result.resistance);
            }
        }
    }

    #[test]
    fn test_only_trailing_window_is_analyzed() {
        // A crash before the window must not affect support.
        let mut prices = vec![1.0; 10];
        prices.extend(vec![60.0; 30]);
        let result = AnalyzerImpl::new().analyze(&series_from(prices, 1_000_000));
        assert_eq!(result.support, 60.0);
        assert_eq!(result.trend, Trend::Neutral);
    }
}
