pub mod chart;
pub mod command_handler;
pub mod listener;
pub mod render;

use crate::analyzer::{AnalyzerImpl, run_pipeline};
use crate::config::AppConfig;
use crate::model::{AnalysisReport, RequestError};
use crate::normalizer::normalize_symbol;
use crate::source::TimeSeriesSource;
use chart::ChartSlot;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

/// One interactive session: at most one analysis in flight and one chart on screen.
pub struct Dashboard {
    pub source: Arc<dyn TimeSeriesSource>,
    pub config: Arc<AppConfig>,
    pub start_time: Instant,
    analyzer: AnalyzerImpl,
    rng: Mutex<StdRng>,
    pub chart: Mutex<ChartSlot>,
    busy: AtomicBool,
    last_symbol: Mutex<Option<String>>,
}

/// A finished request together with the chart it put on screen.
#[derive(Debug)]
pub struct DashboardView {
    pub report: AnalysisReport,
    pub chart_id: u64,
    pub sparkline: String,
}

/// Clears the busy flag when the request ends, on every exit path.
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl Dashboard {
    pub fn new(source: Arc<dyn TimeSeriesSource>, config: Arc<AppConfig>, rng: StdRng) -> Self {
        Self {
            source,
            config,
            start_time: Instant::now(),
            analyzer: AnalyzerImpl::new(),
            rng: Mutex::new(rng),
            chart: Mutex::new(ChartSlot::new()),
            busy: AtomicBool::new(false),
            last_symbol: Mutex::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub async fn last_symbol(&self) -> Option<String> {
        self.last_symbol.lock().await.clone()
    }

    pub fn begin_request(&self, symbol: &str) -> Result<BusyGuard<'_>, RequestError> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| RequestError::Busy(symbol.to_string()))?;
        Ok(BusyGuard { flag: &self.busy })
    }

    /// Validates the symbol, waits the artificial delay and runs the whole pipeline.
    /// The chart is captured while the request still holds the busy guard.
    pub async fn analyze(&self, raw_symbol: &str) -> Result<DashboardView, RequestError> {
        let symbol = normalize_symbol(raw_symbol)?;
        let _guard = self.begin_request(&symbol).inspect_err(|e| warn!("Rejected request: {}", e))?;

        info!("Analyzing {}...", symbol);
        println!("{}", render::render_loading());
        sleep(Duration::from_millis(self.config.render_delay_ms)).await;

        let series = self.source.fetch(&symbol).await?;
        let report = {
            let mut rng = self.rng.lock().await;
            run_pipeline(&self.analyzer, series, &mut *rng)
        };

        let (chart_id, sparkline) = {
            let mut slot = self.chart.lock().await;
            let chart = slot.replace(&report.series);
            (chart.id, chart.sparkline.clone())
        };
        *self.last_symbol.lock().await = Some(symbol);
        Ok(DashboardView {
            report,
            chart_id,
            sparkline,
        })
    }
}
