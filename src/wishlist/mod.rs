//! Favorite products, persisted through a pluggable key-value [`Storage`].

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{WISHLIST_STORAGE_KEY, WishlistStore};
