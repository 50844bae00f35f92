// Synthetic price history for the demo dashboard
use crate::model::{SourceError, TimeSeries};
use crate::source::traits::TimeSeriesSource;
use crate::utils::round2;
use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::info;

pub struct MockSource {
    rng: Mutex<StdRng>,
    history_days: u32,
}

impl MockSource {
    pub fn new(rng: StdRng, history_days: u32) -> Self {
        Self {
            rng: Mutex::new(rng),
            history_days,
        }
    }

    pub fn seeded(seed: u64, history_days: u32) -> Self {
        Self::new(StdRng::seed_from_u64(seed), history_days)
    }

    /// Random walk with a slight upward drift, floored at 70% of the starting price.
    fn generate<R: Rng + ?Sized>(&self, symbol: &str, today: NaiveDate, rng: &mut R) -> Result<TimeSeries, SourceError> {
        let points = self.history_days as usize + 1;
        let base_price = rng.random::<f64>() * 200.0 + 50.0;
        let floor = base_price * 0.7;

        let mut dates = Vec::with_capacity(points);
        let mut prices = Vec::with_capacity(points);
        let mut volumes = Vec::with_capacity(points);
        let mut price = base_price;

        for days_back in (0..=self.history_days as i64).rev() {
            let date = today - Duration::days(days_back);
            dates.push(date.format("%-m/%-d/%Y").to_string());

            let change = (rng.random::<f64>() - 0.48) * 5.0;
            price = (price + change).max(floor);
            prices.push(round2(price));

            volumes.push((rng.random::<f64>() * 10_000_000.0 + 1_000_000.0).floor() as u64);
        }

        Ok(TimeSeries::new(symbol, dates, prices, volumes)?)
    }
}

#[async_trait::async_trait]
impl TimeSeriesSource for MockSource {
    async fn fetch(&self, symbol: &str) -> Result<TimeSeries, SourceError> {
        let today = Local::now().date_naive();
        let mut rng = self.rng.lock().await;
        let series = self.generate(symbol, today, &mut *rng)?;
        info!("Generated {} days of history for {}", series.len(), symbol);
        Ok(series)
    }
}
