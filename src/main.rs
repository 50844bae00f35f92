mod analyzer;
mod config;
mod model;
mod normalizer;
mod presenter;
mod source;
mod utils;

use config::{AppConfig, load_config};
use presenter::Dashboard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use source::{MockSource, TimeSeriesSource};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    // The filter lives in the config, so loading logs through a plain bootstrap subscriber
    let loaded = tracing::subscriber::with_default(tracing_subscriber::fmt().finish(), || {
        load_config(CONFIG_PATH)
    });
    let config: Arc<AppConfig> = match loaded {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Config load error: {}", e);
            return;
        }
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    // Independent streams for the series generator and the predictions
    let (source, prediction_rng) = match config.rng_seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            (
                MockSource::seeded(seed, config.history_days),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            )
        }
        None => (
            MockSource::new(StdRng::from_os_rng(), config.history_days),
            StdRng::from_os_rng(),
        ),
    };

    let source: Arc<dyn TimeSeriesSource> = Arc::new(source);
    let dashboard = Arc::new(Dashboard::new(source, config.clone(), prediction_rng));

    info!("AI Trading Analysis Platform Ready!");
    println!("Enter a stock symbol to analyze (/help for commands).");
    presenter::listener::listen_for_commands(dashboard).await;
    info!("Session ended.");
}
