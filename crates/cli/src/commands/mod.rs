//! Command implementations.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod import;
pub mod order;
pub mod quiz;
pub mod seed;

use std::sync::Arc;

use lumiere_storefront::config::storage_path_from_env;
use lumiere_storefront::store::{JsonFileStore, Store};

/// Open the durable store at the configured storage path.
pub(crate) fn open_store() -> Store {
    let path = storage_path_from_env();
    Store::open(Arc::new(JsonFileStore::new(path)))
}
