//! Error types for fragment construction and manifest loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::fragment::FragmentKind;

pub type Result<T> = std::result::Result<T, PartsError>;

#[derive(Debug, Error)]
pub enum PartsError {
    // Producer parameter errors
    #[error("{kind} fragment needs at least one path pattern")]
    EmptyPathSet { kind: FragmentKind },

    #[error("invalid dev-server host: {host:?}")]
    InvalidHost { host: String },

    #[error("invalid dev-server port: {port}")]
    InvalidPort { port: u16 },

    #[error("invalid free variable '{key}': {reason}")]
    InvalidFreeVariable { key: String, reason: String },

    #[error("bundle name cannot be empty")]
    EmptyBundleName,

    #[error("bundle '{name}' has no entries")]
    NoBundleEntries { name: String },

    #[error("shared chunk name cannot be empty")]
    EmptyChunkName,

    #[error("shared chunk name '{name}' must differ from the bundle name")]
    ChunkNameConflict { name: String },

    #[error("clean path cannot be empty")]
    EmptyCleanPath,

    #[error("working directory must be absolute: {}", path.display())]
    RelativeWorkingDir { path: PathBuf },

    #[error("failed to serialize value for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    // Manifest errors
    #[error("no parts manifest found in {}", root.display())]
    ManifestNotFound { root: PathBuf },

    #[error("unknown target '{name}' (available: {})", available.join(", "))]
    UnknownTarget {
        name: String,
        available: Vec<String>,
    },

    #[error("no target selected and the manifest defines {count} targets")]
    NoTarget { count: usize },

    #[error("invalid manifest value for '{field}': {message}")]
    InvalidManifest { field: String, message: String },

    #[error("failed to load manifest: {0}")]
    Load(#[from] Box<figment::Error>),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartsError {
    /// Attach the location of a manifest part to a producer error.
    pub(crate) fn in_part(self, target: &str, index: usize) -> Self {
        match self {
            PartsError::InvalidManifest { .. } => self,
            other => PartsError::InvalidManifest {
                field: format!("targets.{target}.parts[{index}]"),
                message: other.to_string(),
            },
        }
    }
}
