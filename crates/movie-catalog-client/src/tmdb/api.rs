use movie_catalog_models::{CategoryEndpoint, Movie, MovieDetails, MovieId, MovieListResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Connection parameters shared by every request
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub base_url: String,
    pub api_key: String,
    pub language: Option<String>,
}

/// Build the full request URL: base + endpoint + `api_key` (and optional `language`)
pub fn build_url(ctx: &ApiContext, endpoint: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    let mut url = format!(
        "{}{}{}api_key={}",
        ctx.base_url.trim_end_matches('/'),
        endpoint,
        separator,
        urlencoding::encode(&ctx.api_key)
    );
    if let Some(language) = ctx.language.as_deref().filter(|l| !l.is_empty()) {
        url.push_str("&language=");
        url.push_str(&urlencoding::encode(language));
    }
    url
}

/// Issue a GET against the catalog and decode the JSON body
async fn fetch_from_api<T: DeserializeOwned>(
    client: &Client,
    ctx: &ApiContext,
    endpoint: &str,
) -> Result<T, CatalogError> {
    let url = build_url(ctx, endpoint);
    debug!("Catalog request: GET {}", endpoint);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let err = CatalogError::remote(status);
        warn!("Catalog request {} failed: {}", endpoint, err);
        return Err(err);
    }

    // Read the body first so malformed payloads surface as decode errors
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("Catalog response for {} could not be decoded: {}", endpoint, e);
        CatalogError::Decode(e)
    })
}

pub async fn get_movie_list(
    client: &Client,
    ctx: &ApiContext,
    endpoint: CategoryEndpoint,
) -> Result<Vec<Movie>, CatalogError> {
    let response: MovieListResponse =
        fetch_from_api(client, ctx, &format!("/movie/{}", endpoint.name())).await?;
    debug!("Fetched {} movies from {}", response.results.len(), endpoint);
    Ok(response.results)
}

pub async fn get_movie_details(
    client: &Client,
    ctx: &ApiContext,
    movie_id: MovieId,
) -> Result<MovieDetails, CatalogError> {
    fetch_from_api(client, ctx, &format!("/movie/{}", movie_id)).await
}

pub async fn search_movies(
    client: &Client,
    ctx: &ApiContext,
    query: &str,
) -> Result<Vec<Movie>, CatalogError> {
    let endpoint = format!("/search/movie?query={}", urlencoding::encode(query));
    let response: MovieListResponse = fetch_from_api(client, ctx, &endpoint).await?;
    Ok(response.results)
}

#[cfg(test)]
mod url_tests {
    use super::*;

    fn ctx(language: Option<&str>) -> ApiContext {
        ApiContext {
            base_url: "https://api.themoviedb.org/3/".to_string(),
            api_key: "k&y".to_string(),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_build_url_appends_api_key() {
        assert_eq!(
            build_url(&ctx(None), "/movie/popular"),
            "https://api.themoviedb.org/3/movie/popular?api_key=k%26y"
        );
    }

    #[test]
    fn test_build_url_with_existing_query() {
        assert_eq!(
            build_url(&ctx(Some("en-US")), "/search/movie?query=alien"),
            "https://api.themoviedb.org/3/search/movie?query=alien&api_key=k%26y&language=en-US"
        );
    }
}
