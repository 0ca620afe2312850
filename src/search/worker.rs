//! Suggestion worker thread
//!
//! Runs the suggestion engine off the UI thread. Each request waits out the
//! simulated fetch latency before computing, the way a network-backed
//! catalog would. Requests that queued up behind the current one are
//! collapsed to the newest; the UI still filters responses by request id.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::suggest::{Suggestion, SuggestionEngine};

/// Query sent to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Monotonically increasing; used to drop stale responses
    pub request_id: u64,
}

/// Computed suggestions for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub request_id: u64,
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

/// Spawn the worker thread
///
/// The thread exits when the request channel closes or the response
/// receiver is dropped.
pub fn spawn_worker(
    engine: Arc<SuggestionEngine>,
    latency: Duration,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(&engine, latency, request_rx, response_tx);
    })
}

fn worker_loop(
    engine: &SuggestionEngine,
    latency: Duration,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let request = newest_pending(request, &request_rx);

        if !latency.is_zero() {
            std::thread::sleep(latency);
        }

        let suggestions = engine.compute(&request.query);
        let response = SearchResponse {
            request_id: request.request_id,
            query: request.query,
            suggestions,
        };

        if response_tx.send(response).is_err() {
            // UI side is gone
            break;
        }
    }

    log::debug!("Search worker thread shutting down");
}

/// Skip over requests that were superseded while this one waited
fn newest_pending(mut request: SearchRequest, request_rx: &Receiver<SearchRequest>) -> SearchRequest {
    loop {
        match request_rx.try_recv() {
            Ok(newer) => {
                log::debug!(
                    "Skipping request {} superseded by {}",
                    request.request_id,
                    newer.request_id
                );
                request = newer;
            }
            // A disconnect is noticed by the next blocking recv
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return request,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
