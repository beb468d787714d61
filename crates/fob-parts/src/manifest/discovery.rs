//! File-based manifest discovery for CLI use
//!
//! Handles finding and loading parts manifests from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde_json::Value;
use tracing::info;

use super::Manifest;
use crate::error::{PartsError, Result};

/// Environment variables with this prefix override manifest keys
pub const ENV_PREFIX: &str = "FOB_PARTS_";

const PACKAGE_FIELD: &str = "parts";

/// File-based manifest discovery
///
/// Searches for a parts manifest in conventional locations and loads it.
/// Library users can build a [`Manifest`] with `Manifest::from_value()`
/// instead.
///
/// # Example
///
/// ```no_run
/// use fob_parts::ManifestDiscovery;
///
/// let manifest = ManifestDiscovery::new(".").load().unwrap();
/// ```
pub struct ManifestDiscovery {
    root: PathBuf,
}

impl ManifestDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a manifest in the root directory
    ///
    /// Searches in this order:
    /// 1. parts.toml
    /// 2. parts.json
    /// 3. package.json (parts field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in ["parts.toml", "parts.json"] {
            let path = self.root.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        let parsed = fs::read_to_string(&pkg_path)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load the discovered manifest
    ///
    /// # Errors
    ///
    /// Returns `PartsError::ManifestNotFound` if no manifest is found.
    pub fn load(&self) -> Result<Manifest> {
        let path = self.find().ok_or_else(|| PartsError::ManifestNotFound {
            root: self.root.clone(),
        })?;
        Self::load_from(&path)
    }

    /// Load a manifest from a specific file
    pub fn load_from(path: &Path) -> Result<Manifest> {
        if !path.is_file() {
            return Err(PartsError::ManifestNotFound {
                root: path.to_path_buf(),
            });
        }

        let figment = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            Figment::from(Serialized::defaults(Self::package_field(path)?))
        } else if path.extension() == Some(std::ffi::OsStr::new("json")) {
            Figment::from(Json::file(path))
        } else {
            Figment::from(Toml::file(path))
        };

        let manifest: Manifest = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&["default_target"]))
            .extract()
            .map_err(Box::new)?;

        info!(
            path = %path.display(),
            targets = manifest.targets.len(),
            "loaded parts manifest"
        );
        Ok(manifest)
    }

    fn package_field(path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| PartsError::InvalidManifest {
                field: "package.json".to_string(),
                message: format!("Invalid JSON: {e}"),
            })?;

        match parsed.get(PACKAGE_FIELD) {
            Some(Value::Object(map)) => Ok(Value::Object(map.clone())),
            Some(_) => Err(PartsError::InvalidManifest {
                field: PACKAGE_FIELD.to_string(),
                message: "the 'parts' field must be an object".to_string(),
            }),
            None => Err(PartsError::InvalidManifest {
                field: PACKAGE_FIELD.to_string(),
                message: "add a 'parts' field to your package.json".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(ManifestDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_prefers_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("parts.toml"), "").unwrap();
        fs::write(dir.path().join("parts.json"), "{}").unwrap();

        let found = ManifestDiscovery::new(dir.path()).find().unwrap();
        assert_eq!(found, dir.path().join("parts.toml"));
    }

    #[test]
    fn find_ignores_package_json_without_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();
        assert!(ManifestDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found() {
        let dir = TempDir::new().unwrap();
        let result = ManifestDiscovery::new(dir.path()).load();
        assert!(matches!(result, Err(PartsError::ManifestNotFound { .. })));
    }

    #[test]
    fn load_rejects_non_object_package_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{ "parts": ["minify"] }"#).unwrap();
        let result = ManifestDiscovery::load_from(&path);
        assert!(matches!(result, Err(PartsError::InvalidManifest { .. })));
    }
}
