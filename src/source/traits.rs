use crate::model::{SourceError, TimeSeries};

#[async_trait::async_trait]
pub trait TimeSeriesSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<TimeSeries, SourceError>;
}
