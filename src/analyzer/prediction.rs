use crate::model::{Prediction, PredictionPeriod, Trend};
use crate::utils::round2;
use rand::Rng;

impl PredictionPeriod {
    /// Half-open range of the unbiased percentage draw.
    pub fn change_range(self) -> (f64, f64) {
        match self {
            PredictionPeriod::OneWeek => (-2.0, 4.0),
            PredictionPeriod::OneMonth => (-4.0, 8.0),
            PredictionPeriod::ThreeMonths => (-6.0, 14.0),
        }
    }

    /// Magnitude of the trend bias added to the draw.
    pub fn trend_bias(self) -> f64 {
        match self {
            PredictionPeriod::OneWeek => 2.0,
            PredictionPeriod::OneMonth => 4.0,
            PredictionPeriod::ThreeMonths => 6.0,
        }
    }
}

fn bias_for(period: PredictionPeriod, trend: Trend) -> f64 {
    if trend.is_up() {
        period.trend_bias()
    } else if trend.is_down() {
        -period.trend_bias()
    } else {
        0.0
    }
}

/// Projects the current price over each period with a random, trend-biased change.
///
/// The change is rounded to two decimals first and the price is derived from that rounded
/// change, so `price == round2(current_price * (1 + change_percent / 100))` holds exactly.
pub fn generate_predictions<R: Rng + ?Sized>(
    current_price: f64,
    trend: Trend,
    rng: &mut R,
) -> Vec<Prediction> {
    PredictionPeriod::ALL
        .iter()
        .map(|&period| {
            let (low, high) = period.change_range();
            let change = round2(rng.random_range(low..high) + bias_for(period, trend));
            Prediction {
                period,
                price: round2(current_price * (1.0 + change / 100.0)),
                change_percent: change,
            }
        })
        .collect()
}
