//! Fragment producers.
//!
//! Every producer is a pure function from its parameters to a [`Fragment`].
//! Parameters are checked at the boundary so a malformed fragment never
//! reaches the merge step.

mod css;
mod params;

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Map;

use crate::config::{
    CompressOptions, DEFAULT_DEV_PORT, DevServerOptions, JS_TEST, Loader, ModuleRule, Plugin,
    StatsPreset,
};
use crate::error::{PartsError, Result};
use crate::fragment::{Fragment, FragmentKind, Part};
use crate::paths::PathSet;
use crate::validation::{
    require_absolute, require_paths, validate_free_variable, validate_host, validate_port,
};

pub use css::{extract_css, purify_css, setup_css};
pub use params::{BundleExtraction, DevServerParams};

/// Dev-server wiring with hot module replacement.
///
/// # Example
///
/// ```
/// use fob_parts::{parts, BuildConfig, DevServerParams};
///
/// let fragment = parts::dev_server(&DevServerParams::new().host("localhost")).unwrap();
/// let config = BuildConfig::from(fragment);
/// let server = config.dev_server.unwrap();
/// assert_eq!(server.host.as_deref(), Some("localhost"));
/// assert_eq!(server.port, Some(7070));
/// ```
pub fn dev_server(params: &DevServerParams) -> Result<Fragment> {
    if let Some(host) = &params.host {
        validate_host(host)?;
    }
    let port = params.port.unwrap_or(DEFAULT_DEV_PORT);
    validate_port(port)?;

    let options = DevServerOptions {
        history_api_fallback: Some(true),
        hot: Some(true),
        inline: Some(true),
        stats: Some(StatsPreset::ErrorsOnly),
        host: params.host.clone(),
        port: Some(port),
        extra: Map::new(),
    };

    Ok(Fragment::new(
        FragmentKind::DevServer,
        vec![
            Part::DevServer(options),
            Part::Plugin(Plugin::HotModuleReplacement { multi_step: true }),
        ],
    ))
}

/// Dead-code and whitespace compression with warnings suppressed.
pub fn minify() -> Fragment {
    Fragment::new(
        FragmentKind::Minify,
        vec![Part::Plugin(Plugin::Minify {
            compress: CompressOptions { warnings: false },
        })],
    )
}

/// Substitute `key` with the JSON text of `value` at build time.
///
/// Strings therefore end up quoted: `"1.0"` becomes the source text `"1.0"`,
/// not the bare token `1.0`.
pub fn set_free_variable<T>(key: &str, value: &T) -> Result<Fragment>
where
    T: Serialize + ?Sized,
{
    validate_free_variable(key)?;

    let literal = serde_json::to_string(value).map_err(|source| PartsError::Serialization {
        key: key.to_string(),
        source,
    })?;

    let mut definitions = IndexMap::with_capacity(1);
    definitions.insert(key.to_string(), literal);

    Ok(Fragment::new(
        FragmentKind::FreeVariable,
        vec![Part::Plugin(Plugin::Define { definitions })],
    ))
}

/// Split `options.entries` into their own bundle plus a shared manifest
/// chunk.
pub fn extract_bundle(options: &BundleExtraction) -> Result<Fragment> {
    let name = options.name.trim();
    if name.is_empty() {
        return Err(PartsError::EmptyBundleName);
    }
    if options.entries.is_empty() {
        return Err(PartsError::NoBundleEntries {
            name: name.to_string(),
        });
    }
    let manifest = options.manifest.trim();
    if manifest.is_empty() {
        return Err(PartsError::EmptyChunkName);
    }
    if manifest == name {
        return Err(PartsError::ChunkNameConflict {
            name: manifest.to_string(),
        });
    }

    Ok(Fragment::new(
        FragmentKind::ExtractBundle,
        vec![
            Part::Entry {
                name: name.to_string(),
                entries: options.entries.clone(),
            },
            Part::Plugin(Plugin::CommonsChunk {
                names: vec![name.to_string(), manifest.to_string()],
            }),
        ],
    ))
}

/// Remove `path` (relative to `cwd`) before every build.
pub fn clean(path: impl AsRef<Path>, cwd: &Path) -> Result<Fragment> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(PartsError::EmptyCleanPath);
    }
    require_absolute(cwd)?;

    Ok(Fragment::new(
        FragmentKind::Clean,
        vec![Part::Plugin(Plugin::Clean {
            paths: vec![path.to_path_buf()],
            root: cwd.to_path_buf(),
        })],
    ))
}

/// Transpile scripts under `paths` with loader caching enabled.
pub fn process_js(paths: &PathSet) -> Result<Fragment> {
    require_paths(FragmentKind::ProcessJs, paths)?;

    let rule = ModuleRule::new(JS_TEST, paths.clone())
        .with_loaders([Loader::new("babel").with_option("cacheDirectory", true)]);

    Ok(Fragment::new(FragmentKind::ProcessJs, vec![Part::Rule(rule)]))
}
