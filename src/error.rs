use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error types for greeter operations.
/// Greeting itself never fails; these come from loading configuration.
#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, GreeterError>;
