//! Message protocol between the engine and its host.
//!
//! The host talks to a dedicated search thread through two channels:
//! `INIT` is answered with `READY` once the Zobrist table exists, `SEARCH`
//! with `SEARCH_RESULT`, and `ABORT` stops the search in flight. Responses
//! arrive in request order. Every request carries its own copy of the
//! position, so nothing is shared with the host apart from a per-search
//! stop flag.

use super::search::{iterative_deepening_search, SearchLimits};
use crate::game_repr::wire::{WireMove, WirePosition};
use crate::game_repr::{zobrist, Position, PositionKey};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub position: WirePosition,
    pub max_depth: u8,
    /// Milliseconds; `None` searches to `max_depth` regardless of time
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
    /// Keys of the positions the game went through, oldest first
    #[serde(default)]
    pub history: Vec<PositionKey>,
    #[serde(default)]
    pub no_progress_plies: u32,
}

/// Outcome of one search. `score` is White-relative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "move")]
    pub best_move: Option<WireMove>,
    pub score: i32,
    /// Moves to mate, positive when White mates
    pub mate_in: Option<i32>,
    pub depth: u8,
    pub nodes: u64,
    pub nps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    Init,
    Search(SearchRequest),
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Response {
    Ready,
    SearchResult(SearchResponse),
}

/// Run one search request to completion on the calling thread.
///
/// A position that fails validation yields an empty response.
pub fn run_search(request: &SearchRequest, stop: Arc<AtomicBool>) -> SearchResponse {
    let pos = match Position::try_from(&request.position) {
        Ok(pos) => pos,
        Err(err) => {
            log::warn!("rejecting search request: {}", err);
            return SearchResponse::default();
        }
    };

    let mut history = request.history.clone();
    let root = pos.key();
    if history.last() != Some(&root) {
        history.push(root);
    }

    let mut limits = SearchLimits::depth(request.max_depth).with_stop_flag(stop);
    limits.time_limit_ms = request.time_limit_ms;

    let result = iterative_deepening_search(&pos, &history, request.no_progress_plies, &limits);
    let score = result.white_relative(pos.side_to_move);

    SearchResponse {
        best_move: result.best_move.as_ref().map(WireMove::from),
        score,
        mate_in: super::negamax::mate_in(score),
        depth: result.depth,
        nodes: result.nodes,
        nps: result.nps,
    }
}

/// Answer a single request. `Abort` has no response of its own; it acts
/// through the stop flag of the searches it cancels.
pub fn handle_request(request: &Request, stop: &Arc<AtomicBool>) -> Option<Response> {
    match request {
        Request::Init => {
            zobrist::init();
            log::debug!("worker ready");
            Some(Response::Ready)
        }
        Request::Search(search) => {
            log::debug!(
                "search started: depth {} time {:?}",
                search.max_depth,
                search.time_limit_ms
            );
            let response = run_search(search, Arc::clone(stop));
            log::debug!("search finished: depth {} nodes {}", response.depth, response.nodes);
            Some(Response::SearchResult(response))
        }
        Request::Abort => {
            log::debug!("abort is delivered through stop flags, nothing to answer");
            None
        }
    }
}

/// A queued request with the stop flag that belongs to it
type Job = (Request, Arc<AtomicBool>);

/// Handle to the search thread
///
/// Each request gets its own stop flag. `abort` raises the flags of every
/// search sent so far, so a search sent afterwards is not affected.
pub struct EngineWorker {
    requests: Option<Sender<Job>>,
    responses: Receiver<Response>,
    /// Flags of searches that may still be queued or running
    issued: Mutex<Vec<Arc<AtomicBool>>>,
    handle: Option<JoinHandle<()>>,
}

impl EngineWorker {
    pub fn spawn() -> io::Result<Self> {
        let (request_tx, request_rx) = unbounded::<Job>();
        let (response_tx, response_rx) = unbounded::<Response>();

        let handle = thread::Builder::new()
            .name("draughts-search".to_string())
            .spawn(move || {
                for (request, stop) in request_rx.iter() {
                    let Some(response) = handle_request(&request, &stop) else {
                        continue;
                    };
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }
                log::debug!("worker thread exiting");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            issued: Mutex::new(Vec::new()),
            handle: Some(handle),
        })
    }

    fn issued(&self) -> MutexGuard<'_, Vec<Arc<AtomicBool>>> {
        self.issued.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a request. Returns false once the worker has shut down.
    pub fn send(&self, request: Request) -> bool {
        if let Request::Abort = request {
            self.abort();
            return self.requests.is_some();
        }

        let stop = Arc::new(AtomicBool::new(false));
        if let Request::Search(_) = request {
            let mut issued = self.issued();
            // Flags the worker thread has dropped belong to finished searches
            issued.retain(|flag| Arc::strong_count(flag) > 1);
            issued.push(Arc::clone(&stop));
        }

        self.requests
            .as_ref()
            .is_some_and(|tx| tx.send((request, stop)).is_ok())
    }

    /// Block until the next response
    pub fn recv(&self) -> Option<Response> {
        self.responses.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<Response> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop every search sent so far. Each still answers with its last
    /// completed depth.
    pub fn abort(&self) {
        let issued: Vec<_> = self.issued().drain(..).collect();
        log::debug!("abort requested for {} search(es)", issued.len());
        for flag in issued {
            flag.store(true, Ordering::Relaxed);
        }
    }

    /// Abort any search, close the request channel and join the thread
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.abort();
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("search thread panicked");
            }
        }
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        self.close();
    }
}
