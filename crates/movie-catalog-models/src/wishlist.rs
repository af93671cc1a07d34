use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// A movie the user saved, with the category it was saved from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistEntry {
    pub movie: Movie,
    pub category: String,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WishlistState {
    pub items: Vec<WishlistEntry>,
}

/// Persisted shape of the wishlist: `{"state": {"items": [...]}, "version": 0}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WishlistEnvelope {
    pub state: WishlistState,
    #[serde(default)]
    pub version: u32,
}

impl WishlistEnvelope {
    pub fn new(items: Vec<WishlistEntry>) -> Self {
        Self {
            state: WishlistState { items },
            version: 0,
        }
    }

    pub fn into_items(self) -> Vec<WishlistEntry> {
        self.state.items
    }
}
