pub mod error;
pub mod images;
pub mod tmdb;
pub mod traits;

pub use error::CatalogError;
pub use images::{ImageResolver, ImageSize, BACKDROP_PLACEHOLDER_URL, POSTER_PLACEHOLDER_URL};
pub use tmdb::TmdbClient;
pub use traits::CatalogSource;
