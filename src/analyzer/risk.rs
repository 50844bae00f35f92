use crate::model::{AnalysisResult, RiskAssessment, RiskFactor, RiskLevel, Volatility};

const BASE_SCORE: i32 = 50;

/// Combines volatility and signal strength into a 0-100 score.
pub fn assess_risk(analysis: &AnalysisResult) -> RiskAssessment {
    let mut score = BASE_SCORE;
    score += match analysis.volatility {
        Volatility::High => 25,
        Volatility::Medium => 0,
        Volatility::Low => -15,
    };
    if analysis.trend.is_strong() {
        score += 10;
    }
    if analysis.momentum.is_strong() {
        score += 10;
    }
    let score = score.clamp(0, 100) as u8;

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        factors: vec![
            RiskFactor {
                name: "Volatility Risk",
                value: analysis.volatility.to_string(),
            },
            RiskFactor {
                name: "Trend Strength",
                value: analysis.trend.to_string(),
            },
            RiskFactor {
                name: "Momentum",
                value: analysis.momentum.to_string(),
            },
            RiskFactor {
                name: "Market Conditions",
                value: "Moderate".to_string(),
            },
        ],
    }
}
