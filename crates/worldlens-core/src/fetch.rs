// crates/worldlens-core/src/fetch.rs

//! # Remote Dataset Fetcher
//!
//! Retrieves the full country collection in one GET and guards the shared
//! loading/error/data state with a "last request issued wins" rule: each
//! `fetch()` is tagged with a monotonically increasing sequence number and
//! runs on its own thread; when a request settles, its outcome is applied
//! only if the tag is still the most recently issued one. A superseded
//! settlement is discarded before the success/failure branch, so it can
//! never surface as an error and never flips the loading flag — the only
//! user-visible errors are real ones.

use crate::error::{FetchError, Result};
use crate::model::Country;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

#[cfg(feature = "remote")]
use once_cell::sync::Lazy;

/// The fixed public endpoint serving the whole collection in one call.
pub const DATASET_URL: &str = "https://restcountries.com/v3.1/all";

/// Raw transport response: status plus body, interpretation left to the
/// fetcher.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The HTTP GET seam. Implementations only move bytes; mapping onto the
/// fetch error taxonomy happens in [`DatasetFetcher`]. Tests substitute a
/// scripted impl instead of the network.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Response>;
}

#[cfg(feature = "remote")]
static HTTP: Lazy<reqwest::blocking::Client> = Lazy::new(|| {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("worldlens/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::blocking::Client::new())
});

/// Production transport over a shared blocking HTTP client.
#[cfg(feature = "remote")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[cfg(feature = "remote")]
impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Response> {
        let response = HTTP
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| FetchError::Network(e.to_string()))?
            .to_vec();
        Ok(Response { status, body })
    }
}

/// Observable fetch state, as the view layer sees it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// The latest issued request has not settled.
    Loading,
    /// The latest issued request failed; the message is user-facing.
    Failed(String),
    /// The latest issued request delivered a full snapshot.
    Ready(Vec<Country>),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&[Country]> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    state: FetchState,
    superseded: u64,
}

/// Single-flight fetcher for the country collection.
pub struct DatasetFetcher {
    transport: Arc<dyn Transport>,
    url: String,
    latest: Arc<AtomicU64>,
    shared: Arc<Mutex<Shared>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl DatasetFetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_url(transport, DATASET_URL)
    }

    pub fn with_url(transport: Arc<dyn Transport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
            latest: Arc::new(AtomicU64::new(0)),
            shared: Arc::new(Mutex::new(Shared::default())),
            workers: Mutex::new(Vec::new()),
        }
    }

    /// Issue a fetch, superseding any request still in flight. Also the
    /// manual-retry entry point: a later success clears a prior error.
    pub fn fetch(&self) {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        lock(&self.shared).state = FetchState::Loading;

        let transport = Arc::clone(&self.transport);
        let url = self.url.clone();
        let latest = Arc::clone(&self.latest);
        let shared = Arc::clone(&self.shared);
        let handle = thread::spawn(move || {
            let outcome = run_request(transport.as_ref(), &url);
            let mut shared = lock(&shared);
            if latest.load(Ordering::SeqCst) != ticket {
                // A newer request owns the state now; drop this settlement
                // whether it succeeded or failed.
                shared.superseded += 1;
                return;
            }
            shared.state = match outcome {
                Ok(data) => FetchState::Ready(data),
                Err(e) => FetchState::Failed(e.to_string()),
            };
        });
        lock(&self.workers).push(handle);
    }

    /// Block until every issued request has settled or been discarded.
    pub fn wait(&self) {
        let handles: Vec<JoinHandle<()>> = lock(&self.workers).drain(..).collect();
        for handle in handles {
            handle.join().ok();
        }
    }

    /// Snapshot of the current observable state.
    pub fn state(&self) -> FetchState {
        lock(&self.shared).state.clone()
    }

    /// Settlements discarded because a newer request had been issued.
    /// Kept distinct from the error path so the silent discard is
    /// observable in tests.
    pub fn superseded(&self) -> u64 {
        lock(&self.shared).superseded
    }
}

/// One request end to end: transport, status check, payload decode.
/// No partial data — any failure rejects the whole attempt.
fn run_request(transport: &dyn Transport, url: &str) -> Result<Vec<Country>> {
    let response = transport.get(url)?;
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_slice::<Vec<Country>>(&response.body)
        .map_err(|e| FetchError::Payload(e.to_string()))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
