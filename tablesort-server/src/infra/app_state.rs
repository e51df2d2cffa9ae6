use std::sync::Arc;

use minijinja::Environment;
use tablesort_core::SortIcons;

use super::config::Config;
use crate::{catalog::MediaItem, templates::listing_environment};

/// Shared, read-only application state. Nothing request-scoped lives here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Vec<MediaItem>>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Build the state, compiling the listing templates.
    pub fn new(config: Config, catalog: Vec<MediaItem>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            templates: Arc::new(listing_environment()?),
        })
    }

    pub fn icons(&self) -> &SortIcons {
        &self.config.sorting
    }
}
