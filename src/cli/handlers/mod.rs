mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::storage::Store;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub store: Arc<Store>,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self {
            config,
            store: Arc::new(Store::seeded()),
        }
    }

    pub fn schema(&self) -> BookshelfSchema {
        build_schema(Arc::clone(&self.store))
    }
}
