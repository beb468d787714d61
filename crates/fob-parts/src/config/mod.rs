//! Merged bundler configuration types.

mod dev;
mod helpers;
mod plugin;
mod rule;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use dev::{DevServerOptions, StatsPreset};
pub use helpers::{DEFAULT_DEV_PORT, DEFAULT_MANIFEST_CHUNK, EXTRACTED_CSS_FILENAME};
pub use plugin::{CompressOptions, Plugin, PostCssPlugin};
pub use rule::{Extraction, Loader, ModuleOptions, ModuleRule};

pub(crate) use helpers::{AUTOPREFIXER_BROWSERS, CSS_TEST, JS_TEST, default_manifest_chunk};

use crate::error::{PartsError, Result};
use crate::fragment::Part;
use crate::merge::{Merge, merge_entry_lists};

/// The configuration object handed to the bundler.
///
/// Produced by merging an ordered sequence of fragments. Keys the typed model
/// does not know about (`output`, `resolve`, ...) are carried in `extra` and
/// serialized alongside the typed sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Entry-point mapping from bundle name to its constituent entries
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry: IndexMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,

    #[serde(default, skip_serializing_if = "ModuleOptions::is_empty")]
    pub module: ModuleOptions,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postcss: Vec<PostCssPlugin>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,

    /// Passthrough keys forwarded to the bundler untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BuildConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use fob_parts::BuildConfig;
    /// use serde_json::json;
    ///
    /// let config = BuildConfig::from_value(json!({
    ///     "entry": { "app": ["./app"] },
    ///     "output": { "path": "build" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.entry["app"], vec!["./app".to_string()]);
    /// assert_eq!(config.extra["output"]["path"], "build");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| PartsError::InvalidManifest {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| PartsError::InvalidManifest {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Fold a single fragment part into this configuration.
    ///
    /// List-valued sections grow, scalar fields are overwritten.
    pub fn apply(&mut self, part: Part) {
        match part {
            Part::Entry { name, entries } => {
                let mut incoming = IndexMap::with_capacity(1);
                incoming.insert(name, entries);
                merge_entry_lists(&mut self.entry, incoming);
            }
            Part::DevServer(options) => match &mut self.dev_server {
                Some(current) => current.merge(options),
                None => self.dev_server = Some(options),
            },
            Part::Rule(rule) => self.module.rules.push(rule),
            Part::PostCss(plugin) => self.postcss.push(plugin),
            Part::Plugin(plugin) => self.plugins.push(plugin),
        }
    }

    /// Plugin names in application order
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }
}
