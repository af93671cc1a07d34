use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Catalog-assigned movie identifier
pub type MovieId = u64;

/// Summary record returned by the catalog list endpoints
///
/// Field names follow the catalog's wire format so that the same shape is
/// used for decoding responses and for persisting wishlist snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Year of release, if the catalog sent a parseable date
    ///
    /// Upcoming titles frequently carry an empty `release_date`.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.year())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionCompany {
    pub name: String,
}

/// Full record returned by `/movie/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(rename = "runtime", default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_count: u64,
}

impl MovieDetails {
    /// Summary snapshot of this movie, as stored in the wishlist
    pub fn summary(&self) -> Movie {
        self.movie.clone()
    }

    pub fn id(&self) -> MovieId {
        self.movie.id
    }

    pub fn title(&self) -> &str {
        &self.movie.title
    }

    /// Tagline, treating the catalog's empty string as absent
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref().filter(|t| !t.is_empty())
    }
}

/// Envelope of the list endpoints (`popular`, `top_rated`, `upcoming`, search)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub page: Option<u32>,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}
