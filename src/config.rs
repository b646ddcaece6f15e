use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GreeterError, Result};

/// Name greeted when neither the command line nor a config file supplies one.
pub const DEFAULT_NAME: &str = "World";

/// Greeter configuration read from a TOML file given with `--config`.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GreeterConfig {
    pub name: Option<String>,
}

impl GreeterConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Conventional config location, `~/.config/greeter/config.toml` on Linux.
///
/// Only shown in help output. The binary never reads it unless it is passed
/// explicitly with `--config`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("greeter").join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<GreeterConfig> {
    if !path.exists() {
        return Err(GreeterError::ConfigNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| GreeterError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    GreeterConfig::from_toml_str(&content).map_err(|source| GreeterError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the greeted name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Flag,
    ConfigFile,
    Default,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSource::Flag => write!(f, "flag"),
            NameSource::ConfigFile => write!(f, "config file"),
            NameSource::Default => write!(f, "default"),
        }
    }
}

/// Pick the name to greet: `--name`, then the config file, then [`DEFAULT_NAME`].
pub fn resolve_name(
    cli_name: Option<String>,
    config: Option<&GreeterConfig>,
) -> (String, NameSource) {
    if let Some(name) = cli_name {
        return (name, NameSource::Flag);
    }
    if let Some(name) = config.and_then(|c| c.name.clone()) {
        return (name, NameSource::ConfigFile);
    }
    (DEFAULT_NAME.to_string(), NameSource::Default)
}
