pub mod category_loader;
pub mod detail_loader;
pub mod display;
pub mod storage;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod test_support;

pub use category_loader::{CategoryLoadState, CategoryLoader, CategoryPageState, CATEGORY_PAGE_SIZE};
pub use detail_loader::{DetailLoader, DetailState};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, PersistenceError};
pub use wishlist::{WishlistGroup, WishlistStore};

/// Message for a failed load, falling back when the failure carries no text
pub(crate) fn failure_message(err: &dyn std::fmt::Display, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
