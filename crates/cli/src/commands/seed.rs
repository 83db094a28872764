//! Seed the persisted state file with the default catalog.

use lumiere_storefront::config::storage_path_from_env;
use lumiere_storefront::store::{JsonFileStore, StateStore, StoreState};

/// Write the default seeded state to the storage file.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn seed(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = storage_path_from_env();

    if path.exists() && !force {
        return Err(format!(
            "Storage file already exists: {} (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    let state = StoreState::default();
    let backend = JsonFileStore::new(&path);
    backend.save(&state)?;

    tracing::info!("Seeded default catalog to {}", path.display());
    println!("Seeded {} products to {}", state.products.len(), path.display());

    Ok(())
}
