// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod history;
pub mod market_indicators;
pub mod prediction;
pub mod price_analysis;
pub mod risk;
pub mod suggestion;

use crate::model::{AnalysisReport, TimeSeries};
use price_analysis::Analyzer;
use rand::Rng;
use tracing::info;

// Re-export the main Analyzer implementation for ease of use.
pub use price_analysis::AnalyzerImpl;

/// Runs every derivation over one series. Randomness only enters through `rng`.
pub fn run_pipeline<A, R>(analyzer: &A, series: TimeSeries, rng: &mut R) -> AnalysisReport
where
    A: Analyzer + ?Sized,
    R: Rng + ?Sized,
{
    let stats = history::build_historical_stats(&series);
    let analysis = analyzer.analyze(&series);
    info!(
        "{}: {} | {} momentum | {} volatility",
        series.symbol(),
        analysis.trend,
        analysis.momentum,
        analysis.volatility
    );

    let current_price = series.current_price();
    let predictions = prediction::generate_predictions(current_price, analysis.trend, rng);
    let suggestions = suggestion::generate_suggestions(current_price, &analysis);
    let risk = risk::assess_risk(&analysis);
    info!("{}: risk {}/100 ({})", series.symbol(), risk.score, risk.level);

    AnalysisReport {
        symbol: series.symbol().to_string(),
        series,
        stats,
        analysis,
        predictions,
        suggestions,
        risk,
    }
}
