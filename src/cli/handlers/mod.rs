mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeParams, handle_serve};

use crate::config::BookshelfConfig;
use crate::storage::Library;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self { config }
    }

    /// A fresh store loaded from the configured seed.
    pub fn library(&self) -> Result<Arc<Library>> {
        let library = Library::from_seed(&self.config.seed).context("Failed to load seed data")?;
        Ok(Arc::new(library))
    }
}
