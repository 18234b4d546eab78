use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the profile store
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Name contains characters outside `[a-z0-9_]` after lowercasing
    #[error("invalid profile name '{name}': use letters, digits, or underscore")]
    InvalidName { name: String },

    #[error("unable to determine config directory: {0}")]
    ConfigDir(String),

    #[error("failed to parse profiles file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize profiles")]
    Serialize(#[from] toml::ser::Error),

    #[error("i/o error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
