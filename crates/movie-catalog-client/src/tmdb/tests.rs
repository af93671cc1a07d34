use super::*;
use crate::error::CatalogError;
use crate::traits::CatalogSource;
use mockito::{Matcher, Server};
use movie_catalog_config::CatalogConfig;
use movie_catalog_models::CategoryEndpoint;
use serde_json::json;

const API_KEY: &str = "test-key";

fn create_list_response(count: u64) -> serde_json::Value {
    let results: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Movie {}", id),
                "overview": "Overview",
                "poster_path": format!("/poster{}.jpg", id),
                "release_date": "2024-01-01",
                "vote_average": 7.0
            })
        })
        .collect();

    json!({
        "page": 1,
        "results": results,
        "total_pages": 1,
        "total_results": count
    })
}

fn create_client(server: &Server) -> TmdbClient {
    TmdbClient::new(server.url(), API_KEY)
}

#[tokio::test]
async fn test_fetch_by_category_returns_results() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _m = server
        .mock("GET", "/movie/top_rated")
        .match_query(Matcher::UrlEncoded("api_key".into(), API_KEY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(create_list_response(3).to_string())
        .create_async()
        .await;

    let movies = client.fetch_by_category(CategoryEndpoint::TopRated).await.unwrap();

    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[2].title, "Movie 3");
}

#[tokio::test]
async fn test_non_success_status_is_remote_error() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _m = server
        .mock("GET", "/movie/popular")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status_code":7,"status_message":"Invalid API key"}"#)
        .create_async()
        .await;

    let err = client.fetch_by_category(CategoryEndpoint::Popular).await.unwrap_err();

    assert!(matches!(err, CatalogError::Remote { status: 401, .. }));
    assert_eq!(err.to_string(), "API Error: 401 - Unauthorized");
}

#[tokio::test]
async fn test_malformed_payload_is_decode_error() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _m = server
        .mock("GET", "/movie/upcoming")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page": 1, "items": []}"#)
        .create_async()
        .await;

    let err = client.fetch_by_category(CategoryEndpoint::Upcoming).await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_details() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _m = server
        .mock("GET", "/movie/27205")
        .match_query(Matcher::UrlEncoded("api_key".into(), API_KEY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 27205,
                "title": "Inception",
                "overview": "Dreams within dreams.",
                "runtime": 148,
                "genres": [{"id": 28, "name": "Action"}],
                "budget": 160000000,
                "revenue": 825532764,
                "status": "Released",
                "production_companies": [{"name": "Legendary Pictures"}],
                "vote_average": 8.4,
                "vote_count": 34495
            })
            .to_string(),
        )
        .create_async()
        .await;

    let details = client.fetch_details(27205).await.unwrap();

    assert_eq!(details.title(), "Inception");
    assert_eq!(details.runtime_minutes, Some(148));
    assert_eq!(details.genres.len(), 1);
    assert_eq!(details.vote_count, 34495);
}

#[tokio::test]
async fn test_fetch_details_not_found() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _m = server
        .mock("GET", "/movie/999999")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = client.fetch_details(999999).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_search_encodes_query_and_language() {
    let mut server = Server::new_async().await;
    let config = CatalogConfig {
        base_url: server.url(),
        language: Some("en-US".to_string()),
        ..CatalogConfig::default()
    };
    let client = TmdbClient::from_config(&config, API_KEY);

    let _m = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "the matrix & co".into()),
            Matcher::UrlEncoded("api_key".into(), API_KEY.into()),
            Matcher::UrlEncoded("language".into(), "en-US".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(create_list_response(1).to_string())
        .create_async()
        .await;

    let movies = client.search("the matrix & co").await.unwrap();
    assert_eq!(movies.len(), 1);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Reserve a local port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TmdbClient::new(format!("http://{}", addr), API_KEY);
    let err = client.fetch_details(550).await.unwrap_err();

    assert!(matches!(err, CatalogError::Transport(_)), "unexpected error: {:?}", err);
    assert_eq!(err.status(), None);
    assert!(!err.to_string().is_empty());
}
