//! Fetch lifecycle controller for the movie list.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use marquee_core::{FetchState, Movie};

use crate::client::CatalogClient;
use crate::error::ApiError;

/// Completed request outcome, tagged with the cycle that started it.
#[derive(Debug)]
struct FetchOutcome {
    generation: u64,
    result: Result<Vec<Movie>, ApiError>,
}

/// Drives the movie-list fetch lifecycle.
///
/// Each [`trigger`] starts one fetch cycle: the previous in-flight request
/// task is aborted, the generation counter advances, and the state moves
/// to `Loading` (clearing any previous error). Request tasks report over
/// a channel; [`poll`] applies an outcome only while its generation is
/// still current, so a superseded request can never overwrite newer state.
///
/// [`trigger`]: FetchController::trigger
/// [`poll`]: FetchController::poll
#[derive(Debug)]
pub struct FetchController {
    client: CatalogClient,
    state: FetchState,
    generation: u64,
    inflight: Option<JoinHandle<()>>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl FetchController {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            state: FetchState::Idle,
            generation: 0,
            inflight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Start a new fetch cycle, superseding any cycle still in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self) {
        if let Some(handle) = self.inflight.take() {
            log::debug!("aborting superseded fetch (generation {})", self.generation);
            handle.abort();
        }

        self.generation += 1;
        self.state = FetchState::Loading;

        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        self.inflight = Some(tokio::spawn(async move {
            let result = client.fetch_movies().await;
            // The receiver lives as long as the controller; a failed send
            // means the controller is gone and the outcome is moot.
            tx.send(FetchOutcome { generation, result }).ok();
        }));
    }

    /// Apply any completed outcomes without blocking.
    ///
    /// Outcomes from superseded cycles are discarded. Returns `true` when
    /// the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Run one full fetch cycle and wait for it to settle.
    ///
    /// Convenience for one-shot callers with no event loop. The returned
    /// state is `Loaded` or `Failed`, never `Loading`.
    pub async fn refresh(&mut self) -> &FetchState {
        self.trigger();
        while let Some(outcome) = self.outcome_rx.recv().await {
            if self.apply(outcome) {
                break;
            }
        }
        &self.state
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            log::debug!(
                "discarding stale fetch outcome (generation {}, current {})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        self.inflight = None;
        self.state = match outcome.result {
            Ok(movies) => {
                log::info!("fetched {} movies", movies.len());
                FetchState::Loaded(movies)
            }
            Err(err) => {
                log::warn!("fetch failed: {}", err);
                FetchState::Failed(err.to_string())
            }
        };
        true
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        // A request must not outlive its view.
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}
