//! Layered configuration: TOML file, `.env` file, then process environment.

pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{Config, ConfigMetadata, ConfigWarning, ConfigWarnings, ServerConfig};
pub use sources::{EnvConfig, FileConfig, FileServerConfig, FileSortingConfig};
