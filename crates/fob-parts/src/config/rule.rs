use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::paths::PathSet;

/// `module` section of the merged configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ModuleRule>,

    /// Untyped module options such as `noParse`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModuleOptions {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.extra.is_empty()
    }
}

/// A module rule routing matching files through a loader pipeline.
///
/// Loader lists are kept in bundler declaration order: the last loader runs
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Regular expression source matched against module paths (e.g. `\.css$`)
    pub test: String,

    /// Loader chain applied in place
    #[serde(rename = "use", default, skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<Loader>,

    /// Loader chain whose output is extracted into a separate file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<Extraction>,

    /// Paths the rule is scoped to
    #[serde(default, skip_serializing_if = "PathSet::is_empty")]
    pub include: PathSet,

    /// Rule conditions and shorthands without a typed field (`exclude`,
    /// `loader`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModuleRule {
    pub fn new(test: impl Into<String>, include: PathSet) -> Self {
        Self {
            test: test.into(),
            loaders: Vec::new(),
            extract: None,
            include,
            extra: Map::new(),
        }
    }

    pub fn with_loaders(mut self, loaders: impl IntoIterator<Item = Loader>) -> Self {
        self.loaders.extend(loaders);
        self
    }

    pub fn with_extract(mut self, extract: Extraction) -> Self {
        self.extract = Some(extract);
        self
    }
}

/// Extraction pipeline handed to the CSS-extraction plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Loader used when the content cannot be extracted
    pub fallback: Loader,

    #[serde(rename = "use")]
    pub loaders: Vec<Loader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loader {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl Loader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            loader: name.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for Loader {
    fn from(name: &str) -> Self {
        Loader::new(name)
    }
}
