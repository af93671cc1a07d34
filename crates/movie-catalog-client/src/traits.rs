use async_trait::async_trait;
use movie_catalog_models::{CategoryEndpoint, Movie, MovieDetails, MovieId};

use crate::error::CatalogError;

/// Read-only access to a movie catalog
///
/// Calls are independent of each other: implementations share nothing
/// mutable between concurrent requests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Full `results` list of a named listing, in catalog order
    async fn fetch_by_category(&self, endpoint: CategoryEndpoint) -> Result<Vec<Movie>, CatalogError>;

    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, CatalogError>;

    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;
}
