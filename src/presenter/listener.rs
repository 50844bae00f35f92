// presenter/listener.rs

use crate::presenter::Dashboard;
use crate::presenter::command_handler::{Action, handle_command};
use futures::future::join_all;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Reads requests from stdin until EOF or /quit, then waits for pending analyses.
pub async fn listen_for_commands(dashboard: Arc<Dashboard>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Vec::new();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("stdin read error: {}", e);
                break;
            }
        };
        match handle_command(&line, dashboard.clone()).await {
            Action::Continue(Some(handle)) => pending.push(handle),
            Action::Continue(None) => {}
            Action::Quit => break,
        }
        pending.retain(|h| !h.is_finished());
    }

    info!("Waiting for {} pending request(s)...", pending.len());
    for result in join_all(pending).await {
        if let Err(e) = result {
            warn!("Request task failed: {}", e);
        }
    }
}
