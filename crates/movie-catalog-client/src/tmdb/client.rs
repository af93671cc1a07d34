use async_trait::async_trait;
use movie_catalog_config::CatalogConfig;
use movie_catalog_models::{CategoryEndpoint, Movie, MovieDetails, MovieId};
use reqwest::Client;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::images::ImageResolver;
use crate::tmdb::api::{self, ApiContext};
use crate::traits::CatalogSource;

/// Catalog client for The Movie Database (v3 API, api_key authentication)
#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    ctx: ApiContext,
    images: ImageResolver,
}

impl TmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            ctx: ApiContext {
                base_url: base_url.into(),
                api_key: api_key.into(),
                language: None,
            },
            images: ImageResolver::default(),
        }
    }

    pub fn from_config(config: &CatalogConfig, api_key: impl Into<String>) -> Self {
        let mut client = Self::new(config.base_url.clone(), api_key);
        client.ctx.language = config.language.clone();
        client.images = ImageResolver::new(config.image_base_url.clone());
        client
    }

    pub fn images(&self) -> &ImageResolver {
        &self.images
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    fn source_name(&self) -> &str {
        "tmdb"
    }

    async fn fetch_by_category(&self, endpoint: CategoryEndpoint) -> Result<Vec<Movie>, CatalogError> {
        api::get_movie_list(&self.client, &self.ctx, endpoint).await
    }

    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, CatalogError> {
        api::get_movie_details(&self.client, &self.ctx, movie_id).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        api::search_movies(&self.client, &self.ctx, query).await
    }
}
