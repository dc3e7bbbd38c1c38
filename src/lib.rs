//! Library entry for ShopUp exposing the storefront core for the binary and
//! integration tests.
//!
//! - [`catalog`]: static product catalog and lookups
//! - [`search`]: debounced query input and the catalog search engine
//! - [`wishlist`]: favorites persisted through key-value storage
//! - [`app`]: root composition of the above

pub mod app;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod search;
pub mod wishlist;
