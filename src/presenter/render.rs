// Text and JSON rendering of an analysis report
use crate::model::{AnalysisReport, Prediction, RiskAssessment, Suggestion, SuggestionCategory};
use crate::utils::{format_money, format_signed_percent, format_volume_millions};
use std::fmt::Write;

const RISK_BAR_CELLS: usize = 20;

pub fn render_loading() -> String {
    [
        "Analyzing data...",
        "Generating predictions...",
        "Creating suggestions...",
        "Assessing risk...",
    ]
    .join("\n")
}

pub fn render_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render_report(report: &AnalysisReport, sparkline: Option<&str>) -> String {
    let mut out = String::new();
    let stats = &report.stats;
    let analysis = &report.analysis;

    let dates = report.series.dates();
    let _ = writeln!(
        out,
        "=== {} ({} - {}) ===",
        report.symbol,
        dates.first().map(String::as_str).unwrap_or_default(),
        dates.last().map(String::as_str).unwrap_or_default()
    );
    if let Some(sparkline) = sparkline {
        let _ = writeln!(out, "{}", sparkline);
    }
    let _ = writeln!(
        out,
        "Current Price: {} | {}-Day Change: {} | {}-Day High: {} | {}-Day Low: {} | Avg Volume: {}",
        format_money(stats.current_price),
        stats.days,
        format_signed_percent(stats.change_percent),
        stats.days,
        format_money(stats.high),
        stats.days,
        format_money(stats.low),
        format_volume_millions(stats.avg_volume)
    );

    let _ = writeln!(out, "\nAI Analysis");
    let _ = writeln!(
        out,
        "Trend: {} | Momentum: {} | Volatility: {}",
        analysis.trend, analysis.momentum, analysis.volatility
    );
    let _ = writeln!(
        out,
        "Support Level: {} | Resistance Level: {}",
        format_money(analysis.support),
        format_money(analysis.resistance)
    );
    let _ = writeln!(out, "Key Insights:");
    for insight in &analysis.insights {
        let _ = writeln!(out, "  • {}", insight);
    }

    let _ = writeln!(out, "\nPredictions");
    for prediction in &report.predictions {
        let _ = writeln!(out, "  {}", render_prediction(prediction));
    }

    let _ = writeln!(out, "\nSuggestions");
    for suggestion in &report.suggestions {
        let _ = writeln!(out, "  {}", render_suggestion(suggestion));
    }

    let _ = writeln!(out, "\nRisk Assessment");
    out.push_str(&render_risk(&report.risk));
    out
}

pub fn render_prediction(prediction: &Prediction) -> String {
    let arrow = if prediction.change_percent >= 0.0 { '↗' } else { '↘' };
    format!(
        "{:<9} {:>10}  {} {}",
        prediction.period.label(),
        format_money(prediction.price),
        arrow,
        format_signed_percent(prediction.change_percent)
    )
}

fn category_tag(category: SuggestionCategory) -> &'static str {
    match category {
        SuggestionCategory::Success => "success",
        SuggestionCategory::Warning => "warning",
        SuggestionCategory::Danger => "danger",
    }
}

pub fn render_suggestion(suggestion: &Suggestion) -> String {
    format!(
        "{} [{}] {}: {}",
        suggestion.icon,
        category_tag(suggestion.category),
        suggestion.title,
        suggestion.description
    )
}

pub fn render_risk(risk: &RiskAssessment) -> String {
    let filled = (risk.score as usize * RISK_BAR_CELLS + 50) / 100;
    let bar: String = "█".repeat(filled) + &"░".repeat(RISK_BAR_CELLS - filled);
    let factors: Vec<String> = risk
        .factors
        .iter()
        .map(|f| format!("{}: {}", f.name, f.value))
        .collect();
    format!(
        "  {} Risk [{}] {}/100\n  {}\n",
        risk.level,
        bar,
        risk.score,
        factors.join(" | ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::price_analysis::tests::rising_series;
    use crate::analyzer::{AnalyzerImpl, run_pipeline};
    use crate::model::{PredictionPeriod, RiskFactor, RiskLevel};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_prediction_line() {
        let up = Prediction {
            period: PredictionPeriod::OneMonth,
            price: 104.5,
            change_percent: 4.5,
        };
        assert_eq!(render_prediction(&up), "1 Month      $104.50  ↗ +4.50%");
        let down = Prediction {
            period: PredictionPeriod::ThreeMonths,
            price: 92.0,
            change_percent: -8.0,
        };
        assert!(render_prediction(&down).ends_with("↘ -8.00%"));
    }

    #[test]
    fn test_risk_meter() {
        let risk = RiskAssessment {
            score: 45,
            level: RiskLevel::Medium,
            factors: vec![RiskFactor {
                name: "Market Conditions",
                value: "Moderate".to_string(),
            }],
        };
        let text = render_risk(&risk);
        assert!(text.starts_with("  Medium Risk [█████████░░░░░░░░░░░] 45/100"));
        assert!(text.contains("Market Conditions: Moderate"));
    }

    #[test]
    fn test_full_report_sections() {
        let report = run_pipeline(&AnalyzerImpl::new(), rising_series(), &mut StdRng::seed_from_u64(4));
        let text = render_report(&report, Some("▁▅█"));
        assert!(text.starts_with("=== TEST (1/1/2026 - 1/31/2026) ===\n▁▅█\n"));
        assert!(text.contains("Current Price: $110.00 | 30-Day Change: +11.11%"));
        assert!(text.contains("Avg Volume: 2.00M"));
        assert!(text.contains("Trend: Strong Uptrend | Momentum: Positive | Volatility: Low"));
        assert!(text.contains("Support Level: $100.00 | Resistance Level: $110.00"));
        assert!(text.contains("📈 [success] Buy Signal: "));
        assert!(text.contains("45/100"));
    }

    #[test]
    fn test_json_report() {
        let report = run_pipeline(&AnalyzerImpl::new(), rising_series(), &mut StdRng::seed_from_u64(4));
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["analysis"]["trend"], "Strong Uptrend");
        assert_eq!(json["predictions"][0]["period"], "1 Week");
        assert_eq!(json["risk"]["level"], "Medium");
        assert_eq!(json["symbol"], "TEST");
        assert_eq!(json["series"]["symbol"], "TEST");
    }
}
