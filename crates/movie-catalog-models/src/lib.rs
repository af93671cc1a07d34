pub mod category;
pub mod movie;
pub mod wishlist;

pub use category::{ButtonStyle, Category, CategoryEndpoint, MOVIE_CATEGORIES};
pub use movie::{Genre, Movie, MovieDetails, MovieId, MovieListResponse, ProductionCompany};
pub use wishlist::{WishlistEntry, WishlistEnvelope, WishlistState};
