//! Shared command context.

use anyhow::{Context as _, Result};
use flora_commerce::catalog::Catalog;
use flora_commerce::session::CartSession;
use flora_store::Store;

use crate::config::CliConfig;
use crate::output::Output;

/// Everything a command needs: config, catalog, the live cart session, and
/// the output handler.
pub struct Context {
    pub config: CliConfig,
    pub catalog: Catalog,
    pub session: CartSession,
    pub output: Output,
}

impl Context {
    /// Load config, catalog, and the persisted cart.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = CliConfig::load(config_path)?;

        let catalog = Catalog::from_path(&config.catalog_path).with_context(|| {
            format!("Failed to load catalog from {}", config.catalog_path.display())
        })?;
        output.debug(&format!(
            "catalog: {} flowers, {} accessories",
            catalog.flowers.len(),
            catalog.accessories.len()
        ));

        let store = Store::open(&config.data_dir)
            .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
        let session = CartSession::open(store, &config.profile);

        Ok(Self {
            config,
            catalog,
            session,
            output,
        })
    }
}
