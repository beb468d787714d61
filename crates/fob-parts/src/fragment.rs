//! Configuration fragments: immutable, tagged pieces of a build configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{BuildConfig, DevServerOptions, ModuleRule, Plugin, PostCssPlugin};

/// Which producer built a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    DevServer,
    SetupCss,
    Minify,
    FreeVariable,
    ExtractBundle,
    Clean,
    ExtractCss,
    PurifyCss,
    ProcessJs,
}

impl FragmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentKind::DevServer => "dev-server",
            FragmentKind::SetupCss => "setup-css",
            FragmentKind::Minify => "minify",
            FragmentKind::FreeVariable => "free-variable",
            FragmentKind::ExtractBundle => "extract-bundle",
            FragmentKind::Clean => "clean",
            FragmentKind::ExtractCss => "extract-css",
            FragmentKind::PurifyCss => "purify-css",
            FragmentKind::ProcessJs => "process-js",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contribution to a configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "kebab-case")]
pub enum Part {
    /// Entry-point mapping for a named bundle
    Entry { name: String, entries: Vec<String> },
    DevServer(DevServerOptions),
    Rule(ModuleRule),
    PostCss(PostCssPlugin),
    Plugin(Plugin),
}

/// A named subset of build behavior.
///
/// Fragments hold no references to each other and are never mutated after
/// construction; two fragments built from the same parameters compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    kind: FragmentKind,
    parts: Vec<Part>,
}

impl Fragment {
    pub(crate) fn new(kind: FragmentKind, parts: Vec<Part>) -> Self {
        Self { kind, parts }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}

impl From<Fragment> for BuildConfig {
    fn from(fragment: Fragment) -> Self {
        let mut config = BuildConfig::default();
        for part in fragment.into_parts() {
            config.apply(part);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompressOptions;

    #[test]
    fn fragment_converts_into_config() {
        let fragment = Fragment::new(
            FragmentKind::Minify,
            vec![Part::Plugin(Plugin::Minify {
                compress: CompressOptions { warnings: false },
            })],
        );
        let config = BuildConfig::from(fragment);
        assert_eq!(config.plugin_names(), vec!["minify"]);
        assert!(config.dev_server.is_none());
    }

    #[test]
    fn kind_display_matches_serde_name() {
        let value = serde_json::to_value(FragmentKind::PurifyCss).unwrap();
        assert_eq!(value, FragmentKind::PurifyCss.to_string());
    }
}
