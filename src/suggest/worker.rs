//! Request worker thread
//!
//! Runs recommendation requests on a background thread so the UI never
//! blocks. Each request becomes its own tokio task, so overlapping submits
//! run concurrently and their outcomes arrive in resolution order.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::{CareerClient, SuggestError};
use super::suggest_state::{SuggestRequest, SuggestResponse};

/// Spawn the request worker thread
///
/// The thread exits when it receives [`SuggestRequest::Shutdown`] or when
/// every request sender has been dropped.
pub fn spawn_worker(
    client: CareerClient,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || worker_loop(client, request_rx, response_tx))
}

/// Main worker loop - processes requests until shutdown
fn worker_loop(
    client: CareerClient,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start request runtime: {}", e);
            reject_requests(request_rx, response_tx);
            return;
        }
    };

    log::debug!("Request worker started for {}", client.endpoint());

    let cancel_token = CancellationToken::new();

    runtime.block_on(async {
        while let Some(request) = request_rx.recv().await {
            match request {
                SuggestRequest::Fetch {
                    interests,
                    request_id,
                } => {
                    tokio::spawn(run_fetch(
                        client.clone(),
                        interests,
                        request_id,
                        cancel_token.clone(),
                        response_tx.clone(),
                    ));
                }
                SuggestRequest::Shutdown => break,
            }
        }
        cancel_token.cancel();
    });

    log::debug!("Request worker shutting down");
}

/// Perform one fetch and report its outcome
///
/// Nothing is reported if the worker is shut down first.
async fn run_fetch(
    client: CareerClient,
    interests: String,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: Sender<SuggestResponse>,
) {
    tokio::select! {
        biased;
        _ = cancel_token.cancelled() => {
            log::debug!("Dropped request {} at shutdown", request_id);
        }
        result = client.fetch(&interests) => {
            let response = match result {
                Ok(suggestions) => SuggestResponse::Suggestions {
                    suggestions,
                    request_id,
                },
                Err(error) => SuggestResponse::Failed { error, request_id },
            };
            // Main thread may already be gone
            let _ = response_tx.send(response);
        }
    }
}

/// Answer every request with a failure when no runtime could be built
fn reject_requests(
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    while let Some(request) = request_rx.blocking_recv() {
        match request {
            SuggestRequest::Fetch { request_id, .. } => {
                let _ = response_tx.send(SuggestResponse::Failed {
                    error: SuggestError::WorkerUnavailable,
                    request_id,
                });
            }
            SuggestRequest::Shutdown => break,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
