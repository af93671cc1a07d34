pub mod config;
pub mod home;
mod home_ui;
pub mod movie;
mod prompts;
pub mod wishlist;

use crate::output::Output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use comfy_table::{presets, modifiers, Attribute, Cell, Color, Table};
use movie_catalog_client::TmdbClient;
use movie_catalog_config::{Config, CredentialStore, PathManager, API_KEY_ENV_VAR};
use movie_catalog_core::{FileStorage, WishlistStore};
use owo_colors::OwoColorize;
use std::sync::Arc;

/// Paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config
            .validate()
            .map_err(|e| eyre!("Invalid config in {}: {}", config_file.display(), e))?;
        Ok(Self { paths, config })
    }

    pub fn credentials(&self) -> Result<CredentialStore> {
        let credentials_file = self.paths.credentials_file();
        let mut store = CredentialStore::new(credentials_file.clone());
        store
            .load()
            .map_err(|e| eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e))?;
        Ok(store)
    }

    pub fn catalog_client(&self) -> Result<Arc<TmdbClient>> {
        let api_key = self.credentials()?.resolve_api_key().ok_or_else(|| {
            eyre!(
                "No TMDB API key configured. Run 'moviebrowser config api-key' or set {}",
                API_KEY_ENV_VAR
            )
        })?;
        Ok(Arc::new(TmdbClient::from_config(&self.config.catalog, api_key)))
    }

    pub fn open_wishlist(&self) -> Result<WishlistStore<FileStorage>> {
        let storage_dir = self.paths.storage_dir();
        std::fs::create_dir_all(&storage_dir)
            .wrap_err_with(|| format!("Failed to create storage directory {}", storage_dir.display()))?;
        Ok(WishlistStore::open(
            FileStorage::new(storage_dir),
            self.config.wishlist.storage_key.clone(),
        ))
    }
}

/// App title with the wishlist count once there is something in it
pub fn print_header(wishlist_count: usize, output: &Output) {
    if !output.is_human() {
        return;
    }
    let title = "🎬 MovieBrowser".bright_cyan().bold().to_string();
    if wishlist_count > 0 {
        println!("{}  {} {}", title, "Wishlist".bright_white(), format!("({})", wishlist_count).yellow());
    } else {
        println!("{}", title);
    }
    println!();
}

pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
    table
}
