use crate::model::{AnalysisResult, Suggestion, SuggestionCategory, Volatility};
use crate::utils::format_money;

const TARGET_MULTIPLIER: f64 = 1.08;
const STOP_LOSS_MULTIPLIER: f64 = 0.95;

/// Maps the analysis state to ordered trading suggestions (3, or 4 under high volatility).
pub fn generate_suggestions(current_price: f64, analysis: &AnalysisResult) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(4);

    if analysis.trend.is_up() && analysis.momentum.is_positive() {
        suggestions.push(Suggestion {
            category: SuggestionCategory::Success,
            icon: "📈",
            title: "Buy Signal",
            description: format!(
                "Strong upward momentum detected. Consider entering a long position. Target price: {}, Stop loss: {}",
                format_money(current_price * TARGET_MULTIPLIER),
                format_money(current_price * STOP_LOSS_MULTIPLIER)
            ),
        });
    } else if analysis.trend.is_down() && analysis.momentum.is_negative() {
        suggestions.push(Suggestion {
            category: SuggestionCategory::Danger,
            icon: "📉",
            title: "Sell Signal",
            description: format!(
                "Downward pressure increasing. Consider reducing position or setting tight stop losses. Support level at {}",
                format_money(analysis.support)
            ),
        });
    } else {
        suggestions.push(Suggestion {
            category: SuggestionCategory::Warning,
            icon: "⏸️",
            title: "Hold Position",
            description: format!(
                "Mixed signals detected. Wait for clearer trend confirmation before making significant moves. Monitor support at {} and resistance at {}",
                format_money(analysis.support),
                format_money(analysis.resistance)
            ),
        });
    }

    if analysis.volatility == Volatility::High {
        suggestions.push(Suggestion {
            category: SuggestionCategory::Warning,
            icon: "⚡",
            title: "High Volatility Alert",
            description: "Consider using options strategies or reducing position size due to elevated volatility. Implement strict risk management.".to_string(),
        });
    }

    suggestions.push(Suggestion {
        category: SuggestionCategory::Success,
        icon: "🎯",
        title: "Key Levels",
        description: format!(
            "Watch for breakout above {} for bullish continuation or breakdown below {} for bearish signal.",
            format_money(analysis.resistance),
            format_money(analysis.support)
        ),
    });

    suggestions.push(Suggestion {
        category: SuggestionCategory::Warning,
        icon: "💼",
        title: "Portfolio Management",
        description: "Maintain proper position sizing (2-5% of portfolio) and diversification across sectors to manage risk effectively.".to_string(),
    });

    suggestions
}
