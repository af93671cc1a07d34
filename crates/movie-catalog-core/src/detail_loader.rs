use movie_catalog_client::CatalogSource;
use movie_catalog_models::{MovieDetails, MovieId};
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::failure_message;

const DETAIL_FALLBACK_ERROR: &str = "Failed to load movie details";

/// Loading state of the detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub movie_id: Option<MovieId>,
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<MovieDetails>,
    generation: u64,
}

impl DetailState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    fn fail(&mut self, err: &dyn Display) {
        self.loading = false;
        self.data = None;
        self.error = Some(failure_message(err, DETAIL_FALLBACK_ERROR));
    }
}

/// Fetches one movie's details, dropping answers for ids no longer requested
pub struct DetailLoader<S: CatalogSource + ?Sized> {
    source: Arc<S>,
    state: watch::Sender<DetailState>,
}

impl<S: CatalogSource + ?Sized> DetailLoader<S> {
    pub fn new(source: Arc<S>) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self { source, state }
    }

    pub fn snapshot(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    /// Load from a raw route parameter, rejecting missing or non-numeric ids locally
    pub async fn load_route(&self, raw_id: Option<&str>) -> DetailState {
        let raw_id = raw_id.map(str::trim).filter(|id| !id.is_empty());
        match raw_id.map(|id| id.parse::<MovieId>().map_err(|_| id)) {
            Some(Ok(movie_id)) => self.load(movie_id).await,
            Some(Err(raw)) => self.fail_locally(format!("Invalid movie ID: {}", raw)),
            None => self.fail_locally("Movie ID is required".to_string()),
        }
    }

    /// Fetch `movie_id`, discarding any previously shown movie first
    pub async fn load(&self, movie_id: MovieId) -> DetailState {
        let generation = self.begin(Some(movie_id), true, None);
        debug!("Loading details for movie {} (generation {})", movie_id, generation);

        let result = self.source.fetch_details(movie_id).await;
        let applied = self.state.send_if_modified(|state| {
            if state.generation != generation {
                debug!(
                    "Discarding stale details for movie {} (generation {}, current {})",
                    movie_id, generation, state.generation
                );
                return false;
            }
            match result {
                Ok(details) => {
                    state.loading = false;
                    state.data = Some(details);
                }
                Err(e) => {
                    warn!("Error loading movie details for {}: {}", movie_id, e);
                    state.fail(&e);
                }
            }
            true
        });

        if !applied {
            debug!("Movie {} was superseded before its details arrived", movie_id);
        }
        self.snapshot()
    }

    fn fail_locally(&self, message: String) -> DetailState {
        warn!("{}", message);
        self.begin(None, false, Some(message));
        self.snapshot()
    }

    fn begin(&self, movie_id: Option<MovieId>, loading: bool, error: Option<String>) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = state.generation + 1;
            *state = DetailState {
                movie_id,
                loading,
                error,
                data: None,
                generation,
            };
        });
        generation
    }
}
