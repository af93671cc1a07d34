use chrono::Utc;
use movie_catalog_models::{Category, Movie, MovieId, WishlistEntry, WishlistEnvelope};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

use crate::storage::{KeyValueStorage, PersistenceError};

/// Wishlist entries that were saved from the same category
#[derive(Debug)]
pub struct WishlistGroup<'a> {
    pub category_id: &'a str,
    pub category: Option<&'static Category>,
    pub entries: Vec<&'a WishlistEntry>,
}

impl WishlistGroup<'_> {
    pub fn display_name(&self) -> &str {
        self.category.map(|c| c.name).unwrap_or("Unknown Category")
    }
}

/// The user's wishlist: an insertion-ordered set of movies keyed by movie id
///
/// The whole collection is written back to storage after every mutation.
/// A failed write is logged and otherwise ignored; the in-memory collection
/// stays authoritative for the rest of the session.
pub struct WishlistStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    items: Vec<WishlistEntry>,
}

impl<S: KeyValueStorage> WishlistStore<S> {
    /// Create the store and hydrate it from storage
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = Self::load(&storage, &key);
        Self { storage, key, items }
    }

    fn load(storage: &S, key: &str) -> Vec<WishlistEntry> {
        let raw = match storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored wishlist under '{}', starting empty", key);
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read wishlist from storage: {}. Starting empty.", e);
                return Vec::new();
            }
        };

        let envelope: WishlistEnvelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                // Keep the unreadable value around for manual recovery
                let backup_key = format!("{}.corrupt", key);
                match storage.set_item(&backup_key, &raw) {
                    Ok(()) => warn!(
                        "Stored wishlist is corrupt ({}). Backed it up under '{}' and starting empty.",
                        e, backup_key
                    ),
                    Err(backup_err) => warn!(
                        "Stored wishlist is corrupt ({}) and could not be backed up ({}). Starting empty.",
                        e, backup_err
                    ),
                }
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(envelope.state.items.len());
        for entry in envelope.into_items() {
            if seen.insert(entry.movie.id) {
                items.push(entry);
            } else {
                warn!("Dropping duplicate wishlist entry for movie {}", entry.movie.id);
            }
        }

        info!("Loaded wishlist: {} entries", items.len());
        items
    }

    fn try_persist(&self) -> Result<(), PersistenceError> {
        let envelope = WishlistEnvelope::new(self.items.clone());
        let json = serde_json::to_string(&envelope).map_err(|source| PersistenceError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set_item(&self.key, &json)
    }

    fn persist(&self) {
        match self.try_persist() {
            Ok(()) => debug!("Wishlist saved ({} entries)", self.items.len()),
            Err(e) => error!("Error saving wishlist to storage: {}", e),
        }
    }

    /// Add a movie unless it is already present; returns whether it was added
    ///
    /// An existing entry keeps its original category and timestamp.
    pub fn add(&mut self, movie: Movie, category_id: &str) -> bool {
        if self.contains(movie.id) {
            debug!("Movie {} already in wishlist", movie.id);
            return false;
        }

        info!("Adding movie {} ({}) to wishlist under {}", movie.id, movie.title, category_id);
        self.items.push(WishlistEntry {
            movie,
            category: category_id.to_string(),
            added_at: Utc::now(),
        });
        self.persist();
        true
    }

    /// Remove the entry for `movie_id`; returns whether anything was removed
    ///
    /// The collection is written back even when nothing matched.
    pub fn remove(&mut self, movie_id: MovieId) -> bool {
        let before = self.items.len();
        self.items.retain(|entry| entry.movie.id != movie_id);
        let removed = self.items.len() != before;
        if removed {
            info!("Removed movie {} from wishlist", movie_id);
        } else {
            debug!("Movie {} not in wishlist", movie_id);
        }
        self.persist();
        removed
    }

    /// Add when absent, remove when present; returns the new membership
    pub fn toggle(&mut self, movie: Movie, category_id: &str) -> bool {
        if self.contains(movie.id) {
            self.remove(movie.id);
            false
        } else {
            self.add(movie, category_id)
        }
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.items.iter().any(|entry| entry.movie.id == movie_id)
    }

    pub fn get(&self, movie_id: MovieId) -> Option<&WishlistEntry> {
        self.items.iter().find(|entry| entry.movie.id == movie_id)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[WishlistEntry] {
        &self.items
    }

    pub fn clear(&mut self) {
        info!("Clearing wishlist ({} entries)", self.items.len());
        self.items.clear();
        self.persist();
    }

    /// Entries grouped by category, groups in order of first appearance
    pub fn grouped_by_category(&self) -> Vec<WishlistGroup<'_>> {
        let mut groups: Vec<WishlistGroup<'_>> = Vec::new();
        for entry in &self.items {
            match groups.iter_mut().find(|g| g.category_id == entry.category) {
                Some(group) => group.entries.push(entry),
                None => groups.push(WishlistGroup {
                    category_id: &entry.category,
                    category: Category::find(&entry.category),
                    entries: vec![entry],
                }),
            }
        }
        groups
    }
}
