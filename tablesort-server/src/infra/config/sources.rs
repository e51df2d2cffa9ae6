use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub sorting: FileSortingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileSortingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_up_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_down_icon: Option<String>,
}

/// Values gathered from the process environment.
///
/// Unparseable values are kept as raw strings so the loader can report them.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<String>,
    pub sort_up_icon: Option<String>,
    pub sort_down_icon: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: std::env::var("TABLESORT_CONFIG_PATH").ok().map(PathBuf::from),
            server_host: std::env::var("TABLESORT_HOST").ok(),
            server_port: std::env::var("TABLESORT_PORT").ok(),
            sort_up_icon: std::env::var("TABLESORT_SORT_UP_ICON").ok(),
            sort_down_icon: std::env::var("TABLESORT_SORT_DOWN_ICON").ok(),
        }
    }
}
