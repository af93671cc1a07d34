use futures::future::join_all;
use movie_catalog_client::CatalogSource;
use movie_catalog_models::{Category, Movie};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::failure_message;

/// Number of movies kept per category
pub const CATEGORY_PAGE_SIZE: usize = 20;

const CATEGORY_FALLBACK_ERROR: &str = "Failed to load movies";

/// Loading state of one category on the home view
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLoadState {
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CategoryLoadState {
    pub fn pending() -> Self {
        Self {
            movies: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(mut movies: Vec<Movie>) -> Self {
        movies.truncate(CATEGORY_PAGE_SIZE);
        Self {
            movies,
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            movies: Vec::new(),
            loading: false,
            error: Some(message),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

/// Per-category state of one activation of the home view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPageState {
    generation: u64,
    categories: HashMap<String, CategoryLoadState>,
}

impl CategoryPageState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, category_id: &str) -> Option<&CategoryLoadState> {
        self.categories.get(category_id)
    }

    /// True once every category has resolved to success or failure
    pub fn is_settled(&self) -> bool {
        self.categories.values().all(CategoryLoadState::is_settled)
    }

    pub fn settled_count(&self) -> usize {
        self.categories.values().filter(|c| c.is_settled()).count()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Loads every category concurrently, each one settling on its own
///
/// Each activation gets a new generation number; responses that arrive for
/// an older generation are dropped instead of overwriting newer state.
pub struct CategoryLoader<S: CatalogSource + ?Sized> {
    source: Arc<S>,
    categories: Vec<Category>,
    state: watch::Sender<CategoryPageState>,
}

impl<S: CatalogSource + ?Sized> CategoryLoader<S> {
    pub fn new(source: Arc<S>, categories: &[Category]) -> Self {
        let (state, _) = watch::channel(CategoryPageState::default());
        Self {
            source,
            categories: categories.to_vec(),
            state,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Current state, including partially loaded activations
    pub fn snapshot(&self) -> CategoryPageState {
        self.state.borrow().clone()
    }

    /// Receive every state change, one per settled category
    pub fn subscribe(&self) -> watch::Receiver<CategoryPageState> {
        self.state.subscribe()
    }

    /// Reset all categories to loading and fetch them concurrently
    ///
    /// Resolves once every request of this activation has completed; the
    /// returned state is whatever is current at that point.
    pub async fn activate(&self) -> CategoryPageState {
        let generation = self.begin();
        info!(
            "Loading {} categories from {} (generation {})",
            self.categories.len(),
            self.source.source_name(),
            generation
        );

        let loads = self
            .categories
            .iter()
            .map(|category| self.load_category(generation, category));
        join_all(loads).await;

        let snapshot = self.snapshot();
        info!(
            "Category load settled: {}/{} categories (generation {})",
            snapshot.settled_count(),
            snapshot.len(),
            generation
        );
        snapshot
    }

    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.categories = self
                .categories
                .iter()
                .map(|c| (c.id.to_string(), CategoryLoadState::pending()))
                .collect();
        });
        generation
    }

    async fn load_category(&self, generation: u64, category: &Category) {
        let next = match self.source.fetch_by_category(category.endpoint).await {
            Ok(movies) => {
                debug!("Loaded {} movies for {}", movies.len(), category.id);
                CategoryLoadState::loaded(movies)
            }
            Err(e) => {
                warn!("Error loading {}: {}", category.name, e);
                CategoryLoadState::failed(failure_message(&e, CATEGORY_FALLBACK_ERROR))
            }
        };
        self.apply(generation, category.id, next);
    }

    fn apply(&self, generation: u64, category_id: &str, next: CategoryLoadState) -> bool {
        self.state.send_if_modified(|state| {
            if state.generation != generation {
                debug!(
                    "Discarding stale response for {} (generation {}, current {})",
                    category_id, generation, state.generation
                );
                return false;
            }
            state.categories.insert(category_id.to_string(), next);
            true
        })
    }
}
