use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths::PathSet;

/// A bundler plugin entry.
///
/// Plugins are tagged by a `"plugin"` field so the bundler-side loader can
/// instantiate the matching implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Plugin {
    /// Hot module replacement runtime
    HotModuleReplacement {
        /// Multi-pass compilation for larger projects
        multi_step: bool,
    },

    /// Dead-code and whitespace compression
    Minify { compress: CompressOptions },

    /// Build-time substitution of free variables. Values are JSON source text.
    Define { definitions: IndexMap<String, String> },

    /// Factor shared modules out into common chunks
    CommonsChunk { names: Vec<String> },

    /// Remove paths before each build
    Clean { paths: Vec<PathBuf>, root: PathBuf },

    /// Write extracted CSS to its own file
    ExtractCss { filename: String },

    /// Drop CSS rules not referenced by the given paths
    PurgeCss { base_path: PathBuf, paths: PathSet },
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::HotModuleReplacement { .. } => "hot-module-replacement",
            Plugin::Minify { .. } => "minify",
            Plugin::Define { .. } => "define",
            Plugin::CommonsChunk { .. } => "commons-chunk",
            Plugin::Clean { .. } => "clean",
            Plugin::ExtractCss { .. } => "extract-css",
            Plugin::PurgeCss { .. } => "purge-css",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompressOptions {
    #[serde(default)]
    pub warnings: bool,
}

/// A CSS post-processor run by the `postcss` loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PostCssPlugin {
    /// Vendor prefixing for the given browserslist queries
    Autoprefixer { browsers: Vec<String> },
}
