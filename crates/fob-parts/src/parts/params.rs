use serde::{Deserialize, Serialize};

use crate::config::default_manifest_chunk;

/// Parameters for [`dev_server`](super::dev_server)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerParams {
    #[serde(default)]
    pub host: Option<String>,

    /// Defaults to [`DEFAULT_DEV_PORT`](crate::DEFAULT_DEV_PORT)
    #[serde(default)]
    pub port: Option<u16>,
}

impl DevServerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

/// Parameters for [`extract_bundle`](super::extract_bundle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleExtraction {
    /// Name of the extracted bundle (e.g. `vendor`)
    pub name: String,

    /// Entry identifiers that make up the bundle
    pub entries: Vec<String>,

    /// Name of the shared runtime chunk emitted next to the bundle
    #[serde(default = "default_manifest_chunk")]
    pub manifest: String,
}

impl BundleExtraction {
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries.into_iter().map(Into::into).collect(),
            manifest: default_manifest_chunk(),
        }
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }
}
