//! Parts manifest: named targets, each an ordered list of fragments.
//!
//! A manifest replaces the hand-written build script that picks fragments
//! based on the npm lifecycle event. For file loading, see the `discovery`
//! module.

mod discovery;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::error::{PartsError, Result};
use crate::fragment::{Fragment, FragmentKind};
use crate::merge::merge_values;
use crate::parts::{self, BundleExtraction, DevServerParams};
use crate::paths::PathSet;

pub use discovery::{ENV_PREFIX, ManifestDiscovery};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Target used when none is requested explicitly
    #[serde(default)]
    pub default_target: Option<String>,

    /// Shared configuration every target starts from
    #[serde(default)]
    pub common: BuildConfig,

    #[serde(default)]
    pub targets: IndexMap<String, Target>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Fragments applied in order on top of `common`
    #[serde(default)]
    pub parts: Vec<PartSpec>,

    /// Raw configuration deep-merged after all parts
    #[serde(default)]
    pub overrides: Value,
}

/// Declarative form of a producer call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "kebab-case")]
pub enum PartSpec {
    DevServer(DevServerParams),
    SetupCss {
        paths: PathSet,
    },
    Minify,
    FreeVariable {
        key: String,
        value: Value,
    },
    ExtractBundle(BundleExtraction),
    Clean {
        path: PathBuf,
    },
    ExtractCss {
        paths: PathSet,
    },
    PurifyCss {
        paths: PathSet,
    },
    ProcessJs {
        paths: PathSet,
    },
}

impl PartSpec {
    pub fn kind(&self) -> FragmentKind {
        match self {
            PartSpec::DevServer(_) => FragmentKind::DevServer,
            PartSpec::SetupCss { .. } => FragmentKind::SetupCss,
            PartSpec::Minify => FragmentKind::Minify,
            PartSpec::FreeVariable { .. } => FragmentKind::FreeVariable,
            PartSpec::ExtractBundle(_) => FragmentKind::ExtractBundle,
            PartSpec::Clean { .. } => FragmentKind::Clean,
            PartSpec::ExtractCss { .. } => FragmentKind::ExtractCss,
            PartSpec::PurifyCss { .. } => FragmentKind::PurifyCss,
            PartSpec::ProcessJs { .. } => FragmentKind::ProcessJs,
        }
    }

    /// Run the matching producer.
    pub fn build(&self, cwd: &Path) -> Result<Fragment> {
        match self {
            PartSpec::DevServer(params) => parts::dev_server(params),
            PartSpec::SetupCss { paths } => parts::setup_css(paths),
            PartSpec::Minify => Ok(parts::minify()),
            PartSpec::FreeVariable { key, value } => parts::set_free_variable(key, value),
            PartSpec::ExtractBundle(options) => parts::extract_bundle(options),
            PartSpec::Clean { path } => parts::clean(path, cwd),
            PartSpec::ExtractCss { paths } => parts::extract_css(paths),
            PartSpec::PurifyCss { paths } => parts::purify_css(paths, cwd),
            PartSpec::ProcessJs { paths } => parts::process_js(paths),
        }
    }
}

impl Manifest {
    /// Create from serde_json::Value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| PartsError::InvalidManifest {
            field: "manifest".to_string(),
            message: e.to_string(),
        })
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.targets.keys().map(String::as_str).collect()
    }

    /// Pick the target to compose.
    ///
    /// Order: explicit request, then the npm lifecycle event, then
    /// `default_target`, then the only target when exactly one exists.
    /// The lifecycle event is ignored when it does not name a target, since
    /// npm sets it for every script.
    pub fn resolve_target<'a>(
        &'a self,
        requested: Option<&'a str>,
        lifecycle_event: Option<&'a str>,
    ) -> Result<&'a str> {
        if let Some(name) = requested {
            return self.ensure_target(name);
        }

        if let Some(event) = lifecycle_event.filter(|e| self.targets.contains_key(*e)) {
            return Ok(event);
        }

        if let Some(name) = self.default_target.as_deref() {
            return self.ensure_target(name);
        }

        match self.targets.len() {
            1 => Ok(self.targets.keys().next().map(String::as_str).unwrap_or_default()),
            count => Err(PartsError::NoTarget { count }),
        }
    }

    fn ensure_target<'a>(&self, name: &'a str) -> Result<&'a str> {
        if self.targets.contains_key(name) {
            Ok(name)
        } else {
            Err(PartsError::UnknownTarget {
                name: name.to_string(),
                available: self.targets.keys().cloned().collect(),
            })
        }
    }

    /// Build every fragment of `target` and merge them over `common`.
    ///
    /// Fails on the first part whose parameters are malformed, naming its
    /// position in the manifest.
    pub fn compose(&self, target: &str, cwd: &Path) -> Result<BuildConfig> {
        let spec = self
            .targets
            .get(target)
            .ok_or_else(|| PartsError::UnknownTarget {
                name: target.to_string(),
                available: self.targets.keys().cloned().collect(),
            })?;

        let fragments = spec
            .parts
            .iter()
            .enumerate()
            .map(|(index, part)| part.build(cwd).map_err(|e| e.in_part(target, index)))
            .collect::<Result<Vec<_>>>()?;

        let mut config = crate::merge::compose(self.common.clone(), fragments);

        if !spec.overrides.is_null() {
            debug!(target_name = target, "applying target overrides");
            let mut merged = config.to_value()?;
            merge_values(&mut merged, spec.overrides.clone());
            config = BuildConfig::from_value(merged).map_err(|e| PartsError::InvalidManifest {
                field: format!("targets.{target}.overrides"),
                message: e.to_string(),
            })?;
        }

        info!(
            target_name = target,
            parts = spec.parts.len(),
            plugins = config.plugins.len(),
            "composed target"
        );
        Ok(config)
    }
}
