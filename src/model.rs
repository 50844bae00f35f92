// Core structs: TimeSeries, AnalysisResult, Prediction, Suggestion, RiskAssessment
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Trailing window used by every analysis heuristic.
pub const ANALYSIS_WINDOW: usize = 30;
/// Window plus one prior point for the momentum lookback.
pub const MIN_SERIES_LEN: usize = ANALYSIS_WINDOW + 1;

/// Price/volume history for one symbol. Only constructible through [`TimeSeries::new`],
/// so every instance satisfies the length and positivity invariants.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeries {
    symbol: String,
    dates: Vec<String>,
    prices: Vec<f64>,
    volumes: Vec<u64>,
}

impl TimeSeries {
    pub fn new(
        symbol: impl Into<String>,
        dates: Vec<String>,
        prices: Vec<f64>,
        volumes: Vec<u64>,
    ) -> Result<Self, SeriesError> {
        if dates.len() != prices.len() || prices.len() != volumes.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                prices: prices.len(),
                volumes: volumes.len(),
            });
        }
        if prices.len() < MIN_SERIES_LEN {
            return Err(SeriesError::TooShort {
                len: prices.len(),
                min: MIN_SERIES_LEN,
            });
        }
        if let Some((index, &price)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p <= 0.0)
        {
            return Err(SeriesError::NonPositivePrice { index, price });
        }

        Ok(Self {
            symbol: symbol.into(),
            dates,
            prices,
            volumes,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn volumes(&self) -> &[u64] {
        &self.volumes
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Last price of the full series.
    pub fn current_price(&self) -> f64 {
        // Non-empty by construction.
        self.prices[self.prices.len() - 1]
    }

    /// Trailing analysis window.
    pub fn window(&self) -> &[f64] {
        &self.prices[self.prices.len() - ANALYSIS_WINDOW..]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    #[serde(rename = "Strong Uptrend")]
    StrongUptrend,
    Uptrend,
    Neutral,
    Downtrend,
    #[serde(rename = "Strong Downtrend")]
    StrongDowntrend,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::StrongUptrend => "Strong Uptrend",
            Trend::Uptrend => "Uptrend",
            Trend::Neutral => "Neutral",
            Trend::Downtrend => "Downtrend",
            Trend::StrongDowntrend => "Strong Downtrend",
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Trend::StrongUptrend | Trend::Uptrend)
    }

    pub fn is_down(self) -> bool {
        matches!(self, Trend::StrongDowntrend | Trend::Downtrend)
    }

    pub fn is_strong(self) -> bool {
        matches!(self, Trend::StrongUptrend | Trend::StrongDowntrend)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Momentum {
    #[serde(rename = "Strong Positive")]
    StrongPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Strong Negative")]
    StrongNegative,
}

impl Momentum {
    pub fn label(self) -> &'static str {
        match self {
            Momentum::StrongPositive => "Strong Positive",
            Momentum::Positive => "Positive",
            Momentum::Neutral => "Neutral",
            Momentum::Negative => "Negative",
            Momentum::StrongNegative => "Strong Negative",
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Momentum::StrongPositive | Momentum::Positive)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Momentum::StrongNegative | Momentum::Negative)
    }

    pub fn is_strong(self) -> bool {
        matches!(self, Momentum::StrongPositive | Momentum::StrongNegative)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Volatility {
    High,
    Medium,
    Low,
}

impl Volatility {
    pub fn label(self) -> &'static str {
        match self {
            Volatility::High => "High",
            Volatility::Medium => "Medium",
            Volatility::Low => "Low",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Trend, Momentum, Volatility, PredictionPeriod, RiskLevel);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub trend: Trend,
    pub momentum: Momentum,
    pub volatility: Volatility,
    pub support: f64,
    pub resistance: f64,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionPeriod {
    #[serde(rename = "1 Week")]
    OneWeek,
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "3 Months")]
    ThreeMonths,
}

impl PredictionPeriod {
    pub const ALL: [PredictionPeriod; 3] = [
        PredictionPeriod::OneWeek,
        PredictionPeriod::OneMonth,
        PredictionPeriod::ThreeMonths,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PredictionPeriod::OneWeek => "1 Week",
            PredictionPeriod::OneMonth => "1 Month",
            PredictionPeriod::ThreeMonths => "3 Months",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub period: PredictionPeriod,
    pub price: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            RiskLevel::Low
        } else if score > 65 {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactor {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
}

/// Summary of the full series shown next to the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalStats {
    pub days: usize,
    pub current_price: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub avg_volume: f64,
}

/// Everything the presentation layer needs for one request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub series: TimeSeries,
    pub stats: HistoricalStats,
    pub analysis: AnalysisResult,
    pub predictions: Vec<Prediction>,
    pub suggestions: Vec<Suggestion>,
    pub risk: RiskAssessment,
}

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("series columns differ in length: {dates} dates, {prices} prices, {volumes} volumes")]
    LengthMismatch {
        dates: usize,
        prices: usize,
        volumes: usize,
    },
    #[error("series has {len} points, analysis needs at least {min}")]
    TooShort { len: usize, min: usize },
    #[error("price at index {index} is not positive: {price}")]
    NonPositivePrice { index: usize, price: f64 },
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid series: {0}")]
    InvalidSeries(#[from] SeriesError),
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Please enter a stock symbol")]
    EmptySymbol,
    #[error("analysis for {0} is still running")]
    Busy(String),
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(len: usize, price: f64) -> (Vec<String>, Vec<f64>, Vec<u64>) {
        (
            (0..len).map(|i| format!("day {}", i)).collect(),
            vec![price; len],
            vec![1_000_000; len],
        )
    }

    #[test]
    fn test_series_rejects_short_input() {
        let (dates, prices, volumes) = columns(30, 10.0);
        let err = TimeSeries::new("AAPL", dates, prices, volumes).unwrap_err();
        assert_eq!(err, SeriesError::TooShort { len: 30, min: 31 });
    }

    #[test]
    fn test_series_rejects_mismatched_columns() {
        let (dates, prices, mut volumes) = columns(40, 10.0);
        volumes.pop();
        let err = TimeSeries::new("AAPL", dates, prices, volumes).unwrap_err();
        assert!(matches!(err, SeriesError::LengthMismatch { volumes: 39, .. }));
    }

    #[test]
    fn test_series_rejects_non_positive_price() {
        let (dates, mut prices, volumes) = columns(31, 10.0);
        prices[7] = 0.0;
        let err = TimeSeries::new("AAPL", dates, prices, volumes).unwrap_err();
        assert_eq!(err, SeriesError::NonPositivePrice { index: 7, price: 0.0 });
    }

    #[test]
    fn test_window_is_trailing_thirty() {
        let (dates, _, volumes) = columns(40, 1.0);
        let prices: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let series = TimeSeries::new("MSFT", dates, prices, volumes).unwrap();
        assert_eq!(series.window().len(), ANALYSIS_WINDOW);
        assert_eq!(series.window()[0], 11.0);
        assert_eq!(series.current_price(), 40.0);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(65), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(66), RiskLevel::High);
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&Trend::StrongDowntrend).unwrap();
        assert_eq!(json, "\"Strong Downtrend\"");
        assert_eq!(Momentum::StrongPositive.to_string(), "Strong Positive");
        let json = serde_json::to_string(&SuggestionCategory::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }
}
