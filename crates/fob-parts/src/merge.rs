//! Typed merge combinator.
//!
//! Policy: list-valued fields concatenate in input order, scalar fields take
//! the value from the later fragment. Conflicts are never an error.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{BuildConfig, DevServerOptions, ModuleOptions};
use crate::fragment::Fragment;

/// Combine `later` into `self`.
pub trait Merge {
    fn merge(&mut self, later: Self);
}

impl Merge for BuildConfig {
    fn merge(&mut self, later: Self) {
        merge_entry_lists(&mut self.entry, later.entry);

        if let Some(incoming) = later.dev_server {
            match &mut self.dev_server {
                Some(current) => current.merge(incoming),
                None => self.dev_server = Some(incoming),
            }
        }

        self.module.merge(later.module);
        self.postcss.extend(later.postcss);
        self.plugins.extend(later.plugins);
        merge_maps(&mut self.extra, later.extra);
    }
}

impl Merge for DevServerOptions {
    fn merge(&mut self, later: Self) {
        last_wins(&mut self.history_api_fallback, later.history_api_fallback);
        last_wins(&mut self.hot, later.hot);
        last_wins(&mut self.inline, later.inline);
        last_wins(&mut self.stats, later.stats);
        last_wins(&mut self.host, later.host);
        last_wins(&mut self.port, later.port);
        merge_maps(&mut self.extra, later.extra);
    }
}

impl Merge for ModuleOptions {
    fn merge(&mut self, later: Self) {
        self.rules.extend(later.rules);
        merge_maps(&mut self.extra, later.extra);
    }
}

fn last_wins<T>(slot: &mut Option<T>, later: Option<T>) {
    if later.is_some() {
        *slot = later;
    }
}

/// Untyped passthrough keys follow [`merge_values`].
fn merge_maps(target: &mut Map<String, Value>, later: Map<String, Value>) {
    for (key, value) in later {
        match target.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Entry lists for the same bundle name are concatenated; new names are
/// appended in input order.
pub(crate) fn merge_entry_lists(
    target: &mut IndexMap<String, Vec<String>>,
    later: IndexMap<String, Vec<String>>,
) {
    for (name, entries) in later {
        target.entry(name).or_default().extend(entries);
    }
}

/// Merge an ordered sequence of fragments into one configuration.
///
/// # Example
///
/// ```
/// use fob_parts::{merge, parts};
///
/// let config = merge([parts::minify(), parts::minify()]);
/// assert_eq!(config.plugin_names(), vec!["minify", "minify"]);
/// ```
pub fn merge<I>(fragments: I) -> BuildConfig
where
    I: IntoIterator<Item = Fragment>,
{
    compose(BuildConfig::default(), fragments)
}

/// Merge fragments on top of an existing configuration.
pub fn compose<I>(base: BuildConfig, fragments: I) -> BuildConfig
where
    I: IntoIterator<Item = Fragment>,
{
    let mut config = base;
    for fragment in fragments {
        debug!(
            fragment = %fragment.kind(),
            parts = fragment.parts().len(),
            "applying fragment"
        );
        for part in fragment.into_parts() {
            config.apply(part);
        }
    }
    config
}

/// Deep-merge untyped JSON following the same policy as the typed merge.
///
/// Objects merge key by key, arrays concatenate, anything else is replaced by
/// the later value.
pub fn merge_values(target: &mut Value, update: Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target_items), Value::Array(update_items)) => {
            target_items.extend(update_items);
        }
        (target_slot, update) => {
            *target_slot = update;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Plugin, StatsPreset};
    use serde_json::json;

    fn dev(port: Option<u16>, host: Option<&str>) -> BuildConfig {
        BuildConfig {
            dev_server: Some(DevServerOptions {
                port,
                host: host.map(str::to_string),
                ..DevServerOptions::default()
            }),
            ..BuildConfig::default()
        }
    }

    #[test]
    fn scalar_conflict_takes_last() {
        let mut config = dev(Some(7070), None);
        config.merge(dev(Some(8080), None));
        assert_eq!(config.dev_server.unwrap().port, Some(8080));
    }

    #[test]
    fn unset_scalar_keeps_earlier_value() {
        let mut config = dev(Some(7070), Some("localhost"));
        config.merge(dev(None, Some("0.0.0.0")));
        let server = config.dev_server.unwrap();
        assert_eq!(server.port, Some(7070));
        assert_eq!(server.host.as_deref(), Some("0.0.0.0"));
    }

    #[test]
    fn dev_server_fills_empty_slot() {
        let mut config = BuildConfig::default();
        let mut later = dev(Some(9000), None);
        later.dev_server.as_mut().unwrap().stats = Some(StatsPreset::Minimal);
        config.merge(later);
        assert_eq!(
            config.dev_server.unwrap().stats,
            Some(StatsPreset::Minimal)
        );
    }

    #[test]
    fn plugin_lists_concatenate() {
        let mut first = BuildConfig::default();
        first.plugins.push(Plugin::HotModuleReplacement { multi_step: true });
        let mut second = BuildConfig::default();
        second.plugins.push(Plugin::ExtractCss {
            filename: "app.css".to_string(),
        });

        first.merge(second);
        assert_eq!(first.plugin_names(), vec!["hot-module-replacement", "extract-css"]);
    }

    #[test]
    fn merge_values_concatenates_arrays() {
        let mut target = json!({ "resolve": { "extensions": [".js"] }, "devtool": "eval" });
        merge_values(
            &mut target,
            json!({ "resolve": { "extensions": [".jsx"] }, "devtool": "source-map" }),
        );
        assert_eq!(
            target,
            json!({ "resolve": { "extensions": [".js", ".jsx"] }, "devtool": "source-map" })
        );
    }

    #[test]
    fn merge_values_replaces_mismatched_shapes() {
        let mut target = json!({ "output": "build" });
        merge_values(&mut target, json!({ "output": { "path": "dist" } }));
        assert_eq!(target, json!({ "output": { "path": "dist" } }));
    }

    #[test]
    fn nested_passthrough_keys_merge() {
        let mut base = BuildConfig::from_value(json!({
            "devServer": { "proxy": { "/api": "http://localhost:3000" }, "port": 1 },
            "module": { "noParse": "jquery" }
        }))
        .unwrap();
        let later = BuildConfig::from_value(json!({
            "devServer": { "proxy": { "/auth": "http://localhost:4000" }, "contentBase": "build" },
            "module": { "noParse": "lodash" }
        }))
        .unwrap();
        base.merge(later);

        assert_eq!(
            base.to_value().unwrap(),
            json!({
                "devServer": {
                    "port": 1,
                    "proxy": { "/api": "http://localhost:3000", "/auth": "http://localhost:4000" },
                    "contentBase": "build"
                },
                "module": { "noParse": "lodash" }
            })
        );
    }

    #[test]
    fn extra_keys_deep_merge() {
        let mut base = BuildConfig::from_value(json!({ "output": { "path": "build" } })).unwrap();
        let later =
            BuildConfig::from_value(json!({ "output": { "filename": "[name].js" } })).unwrap();
        base.merge(later);
        assert_eq!(
            base.extra["output"],
            json!({ "path": "build", "filename": "[name].js" })
        );
    }
}
