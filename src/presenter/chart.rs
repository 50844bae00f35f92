// Single "currently displayed chart" resource
use crate::model::TimeSeries;
use tracing::debug;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug)]
pub struct Chart {
    pub id: u64,
    pub symbol: String,
    pub sparkline: String,
}

impl Chart {
    pub fn from_series(id: u64, series: &TimeSeries) -> Self {
        Self {
            id,
            symbol: series.symbol().to_string(),
            sparkline: sparkline(series.prices()),
        }
    }
}

impl Drop for Chart {
    fn drop(&mut self) {
        debug!("Released chart #{} for {}", self.id, self.symbol);
    }
}

pub fn sparkline(values: &[f64]) -> String {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = hi - lo;
    values
        .iter()
        .map(|&v| {
            if span <= 0.0 {
                return LEVELS[0];
            }
            let idx = ((v - lo) / span * (LEVELS.len() - 1) as f64).round() as usize;
            LEVELS[idx.min(LEVELS.len() - 1)]
        })
        .collect()
}

/// Holds at most one chart; a new chart always releases the previous one first.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<Chart>,
    created: u64,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, series: &TimeSeries) -> &Chart {
        drop(self.current.take());
        self.created += 1;
        self.current.insert(Chart::from_series(self.created, series))
    }

    pub fn current(&self) -> Option<&Chart> {
        self.current.as_ref()
    }

    pub fn created(&self) -> u64 {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::price_analysis::tests::{rising_series, series_from};

    #[test]
    fn test_replace_keeps_only_latest_chart() {
        let mut slot = ChartSlot::new();
        assert!(slot.current().is_none());

        slot.replace(&series_from(vec![10.0; 31], 1));
        let chart = slot.replace(&rising_series());
        assert_eq!(chart.id, 2);
        assert_eq!(chart.symbol, "TEST");
        assert_eq!(slot.created(), 2);
        assert_eq!(slot.current().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_sparkline_spans_levels() {
        assert_eq!(sparkline(&[1.0, 2.0, 3.0]), "▁▅█");
        assert_eq!(sparkline(&[5.0, 5.0]), "▁▁");
        assert_eq!(sparkline(&rising_series().prices()[1..]).chars().count(), 30);
    }
}
