//! Store access wired through the configuration

use std::path::PathBuf;

use ensayo_store::EnsayoStore;
use ensayo_types::Result;

use crate::config::Config;

/// Open the store at the configured location
pub fn open_store(config: &Config) -> Result<EnsayoStore> {
    EnsayoStore::open(config.store_dir()?)
}

/// Open a store at an explicit directory (used by tests and `--store-dir`)
pub fn open_store_at(dir: PathBuf) -> Result<EnsayoStore> {
    EnsayoStore::open(dir)
}
