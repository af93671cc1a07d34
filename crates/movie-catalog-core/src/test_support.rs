use async_trait::async_trait;
use movie_catalog_client::{CatalogError, CatalogSource};
use movie_catalog_models::{CategoryEndpoint, Movie, MovieDetails, MovieId};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub fn create_movie(id: MovieId, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("Overview of {}", title),
        poster_path: Some(format!("/poster{}.jpg", id)),
        release_date: Some("2020-01-01".to_string()),
        vote_average: 7.5,
    }
}

pub fn create_movies(start: MovieId, count: usize) -> Vec<Movie> {
    (0..count as MovieId)
        .map(|offset| create_movie(start + offset, &format!("Movie {}", start + offset)))
        .collect()
}

pub fn create_details(id: MovieId, title: &str) -> MovieDetails {
    MovieDetails {
        movie: create_movie(id, title),
        runtime_minutes: Some(120),
        genres: Vec::new(),
        budget: 0,
        revenue: 0,
        status: "Released".to_string(),
        production_companies: Vec::new(),
        tagline: None,
        backdrop_path: None,
        vote_count: 100,
    }
}

/// Response a scripted call resolves to; errors are given as HTTP status codes
type Scripted<T> = Result<T, u16>;

fn into_result<T>(scripted: Option<Scripted<T>>) -> Result<T, CatalogError> {
    match scripted {
        Some(Ok(value)) => Ok(value),
        Some(Err(status)) => Err(CatalogError::Remote {
            status,
            reason: "Scripted failure".to_string(),
        }),
        None => Err(CatalogError::Remote {
            status: 404,
            reason: "Not scripted".to_string(),
        }),
    }
}

/// Catalog whose answers are queued per request and can be held back by gates
#[derive(Default)]
pub struct ScriptedSource {
    lists: Mutex<HashMap<CategoryEndpoint, VecDeque<Scripted<Vec<Movie>>>>>,
    list_gates: Mutex<HashMap<CategoryEndpoint, VecDeque<oneshot::Receiver<()>>>>,
    details: Mutex<HashMap<MovieId, VecDeque<Scripted<MovieDetails>>>>,
    detail_gates: Mutex<HashMap<MovieId, VecDeque<oneshot::Receiver<()>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(self, endpoint: CategoryEndpoint, response: Scripted<Vec<Movie>>) -> Self {
        self.lists
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(response);
        self
    }

    pub fn details(self, movie_id: MovieId, response: Scripted<MovieDetails>) -> Self {
        self.details
            .lock()
            .unwrap()
            .entry(movie_id)
            .or_default()
            .push_back(response);
        self
    }

    /// Hold back the next list call for `endpoint` until the returned sender fires
    pub fn gate_list(&self, endpoint: CategoryEndpoint) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.list_gates
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn gate_details(&self, movie_id: MovieId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.detail_gates
            .lock()
            .unwrap()
            .entry(movie_id)
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    fn source_name(&self) -> &str {
        "scripted"
    }

    async fn fetch_by_category(&self, endpoint: CategoryEndpoint) -> Result<Vec<Movie>, CatalogError> {
        self.calls.lock().unwrap().push(format!("list:{}", endpoint));
        let response = self.lists.lock().unwrap().get_mut(&endpoint).and_then(|q| q.pop_front());
        let gate = self.list_gates.lock().unwrap().get_mut(&endpoint).and_then(|q| q.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        into_result(response)
    }

    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, CatalogError> {
        self.calls.lock().unwrap().push(format!("details:{}", movie_id));
        let response = self.details.lock().unwrap().get_mut(&movie_id).and_then(|q| q.pop_front());
        let gate = self.detail_gates.lock().unwrap().get_mut(&movie_id).and_then(|q| q.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        into_result(response)
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        self.calls.lock().unwrap().push(format!("search:{}", query));
        Ok(Vec::new())
    }
}
