// presenter/command_handler.rs

use crate::config::OutputFormat;
use crate::model::RequestError;
use crate::presenter::Dashboard;
use crate::presenter::render::{render_json, render_report};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub enum Action {
    Continue(Option<JoinHandle<()>>),
    Quit,
}

const HELP: &str = "📋 Available commands:\n\
    <SYMBOL> — analyze a stock symbol (e.g. AAPL)\n\
    /status — session status\n\
    /help — command list\n\
    /quit — exit";

/// Handles one line of input; anything that is not a command is a symbol request.
pub async fn handle_command(line: &str, dashboard: Arc<Dashboard>) -> Action {
    match line.trim() {
        "/help" => {
            println!("{}", HELP);
            Action::Continue(None)
        }
        "/status" => {
            let uptime = dashboard.start_time.elapsed().as_secs();
            let state = if dashboard.is_busy() { "busy" } else { "idle" };
            let last = dashboard
                .last_symbol()
                .await
                .unwrap_or_else(|| "none".to_string());
            let chart = dashboard
                .chart
                .lock()
                .await
                .current()
                .map(|c| format!("#{} {}", c.id, c.symbol))
                .unwrap_or_else(|| "none".to_string());
            println!(
                "📊 Dashboard is {} | last symbol: {} | chart: {} | uptime {:02}:{:02}:{:02}",
                state,
                last,
                chart,
                uptime / 3600,
                (uptime % 3600) / 60,
                uptime % 60
            );
            Action::Continue(None)
        }
        "/quit" | "/exit" => Action::Quit,
        cmd if cmd.starts_with('/') => {
            println!("🤖 Unknown command. Type /help for a list of commands.");
            Action::Continue(None)
        }
        symbol => {
            let symbol = symbol.to_string();
            let handle = tokio::spawn(async move { run_request(&symbol, &dashboard).await });
            Action::Continue(Some(handle))
        }
    }
}

async fn run_request(symbol: &str, dashboard: &Dashboard) {
    match dashboard.analyze(symbol).await {
        Ok(view) => {
            let report = &view.report;
            let output = match dashboard.config.output_format {
                OutputFormat::Text => Ok(render_report(report, Some(view.sparkline.as_str()))),
                OutputFormat::Json => render_json(report),
            };
            match output {
                Ok(text) => println!("{}", text),
                Err(e) => warn!("Failed to serialize report: {}", e),
            }
            info!("Finished {} (chart #{})", report.symbol, view.chart_id);
        }
        Err(RequestError::EmptySymbol) => println!("⚠️ {}", RequestError::EmptySymbol),
        Err(e @ RequestError::Busy(_)) => println!("⏳ {}, please wait.", e),
        Err(e) => warn!("Analysis failed: {}", e),
    }
}
