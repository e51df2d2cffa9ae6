use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tablesort_core::SortIcons;
use thiserror::Error;

use super::{
    models::{Config, ConfigMetadata, ConfigWarnings, ServerConfig},
    sources::{EnvConfig, FileConfig},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("tablesort.toml"),
        PathBuf::from("config/tablesort.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Load `.env` into the process environment. An explicit path must
    /// exist; the implicit `./.env` is optional.
    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        match &self.options.env_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingEnvFile { path: path.clone() });
                }
                dotenvy::from_path(path)?;
                Ok(true)
            }
            None => match dotenvy::dotenv() {
                Ok(_) => Ok(true),
                Err(dotenvy::Error::Io(_)) => Ok(false),
                Err(err) => Err(err.into()),
            },
        }
    }

    /// Resolve configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) = compose_config(file_config, env, config_path, env_file_loaded)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let mut source = ConfigPathSource::default();

        if let Some(explicit) = &self.options.config_path {
            source.explicit = Some(explicit.clone());
        } else if let Some(from_env) = &env.config_path {
            source.env = Some(from_env.clone());
        } else {
            source.default = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
        }

        let Some((path, provenance)) = source.resolved_path() else {
            return Ok((None, None));
        };

        if !path.exists() {
            if provenance.is_explicit() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No tablesort.toml detected; using environment variables and defaults",
            "Create tablesort.toml or pass --config to pin settings",
        );
    }

    let FileConfig {
        server: file_server,
        sorting: file_sorting,
    } = file_config.unwrap_or_default();

    let env_port = env
        .server_port
        .as_deref()
        .map(|raw| {
            raw.trim().parse::<u16>().map_err(|_| ConfigLoadError::InvalidEnv {
                key: "TABLESORT_PORT",
                value: raw.to_string(),
            })
        })
        .transpose()?;

    let defaults = ServerConfig::default();
    let server = ServerConfig {
        host: env.server_host.or(file_server.host).unwrap_or(defaults.host),
        port: env_port.or(file_server.port).unwrap_or(defaults.port),
    };

    let default_icons = SortIcons::default();
    let sorting = SortIcons {
        up: resolve_icon(
            "sort-up-icon",
            env.sort_up_icon.or(file_sorting.sort_up_icon),
            default_icons.up,
            &mut warnings,
        ),
        down: resolve_icon(
            "sort-down-icon",
            env.sort_down_icon.or(file_sorting.sort_down_icon),
            default_icons.down,
            &mut warnings,
        ),
    };

    let config = Config {
        server,
        sorting,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    Ok((config, warnings))
}

fn resolve_icon(
    name: &str,
    configured: Option<String>,
    default: String,
    warnings: &mut ConfigWarnings,
) -> String {
    match configured {
        Some(icon) if icon.trim().is_empty() => {
            warnings.push(format!("{name} is empty; using the default glyph"));
            default
        }
        Some(icon) => icon,
        None => default,
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("env file missing: {path}")]
    MissingEnvFile { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Default)]
struct ConfigPathSource {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl ConfigPathSource {
    fn resolved_path(&self) -> Option<(PathBuf, ConfigPathProvenance)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigPathProvenance::Explicit));
        }
        if let Some(path) = &self.env {
            return Some((path.clone(), ConfigPathProvenance::Env));
        }
        if let Some(path) = &self.default {
            return Some((path.clone(), ConfigPathProvenance::Default));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigPathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigPathProvenance {
    fn is_explicit(self) -> bool {
        matches!(self, ConfigPathProvenance::Explicit | ConfigPathProvenance::Env)
    }
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
