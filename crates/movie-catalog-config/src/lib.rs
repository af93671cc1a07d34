pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{CatalogConfig, Config, WishlistConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_STORAGE_KEY};
pub use credentials::{CredentialStore, API_KEY_ENV_VAR};
pub use paths::{container_base_path, PathManager};
