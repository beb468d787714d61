//! Development server options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dev-server section of the merged configuration.
///
/// Every field is optional so fragments can be merged field by field: a later
/// `Some` replaces an earlier value, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Serve the index page for unknown routes (HTML5 History API routing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_api_fallback: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,

    /// Console output verbosity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsPreset>,

    /// Bind host; the bundler falls back to its own default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Options without a typed field (`proxy`, `contentBase`, ...), passed
    /// through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dev-server log verbosity presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsPreset {
    /// Only report errors
    #[default]
    ErrorsOnly,
    Minimal,
    Normal,
    Verbose,
}
