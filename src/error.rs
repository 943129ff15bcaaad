use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConstructError {
    #[error("Unknown newsletter provider '{name}' (known providers: {})", .known.join(", "))]
    InvalidProvider { name: String, known: Vec<&'static str> },

    #[error("'{operation}' is not implemented yet")]
    NotImplemented { operation: String },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ConstructError {
    pub fn invalid_provider(name: impl Into<String>, known: &[&'static str]) -> Self {
        Self::InvalidProvider {
            name: name.into(),
            known: known.to_vec(),
        }
    }

    pub fn not_implemented(operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }

    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ConstructError> = std::result::Result<T, E>;
