//! Loading manifests from disk and composing their targets.

use fob_parts::{BundleExtraction, ManifestDiscovery, PartSpec, PartsError, Plugin};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
default_target = "start"

[common.entry]
app = ["./app"]

[common.output]
path = "build"
filename = "[name].js"

[[targets.start.parts]]
part = "dev-server"
host = "localhost"

[[targets.start.parts]]
part = "setup-css"
paths = ["app"]

[[targets.build.parts]]
part = "clean"
path = "build"

[[targets.build.parts]]
part = "extract-bundle"
name = "vendor"
entries = ["react", "lodash"]

[[targets.build.parts]]
part = "free-variable"
key = "process.env.NODE_ENV"
value = "production"

[[targets.build.parts]]
part = "extract-css"
paths = ["app"]

[[targets.build.parts]]
part = "purify-css"
paths = ["app"]

[targets.build.overrides.output]
filename = "[name].[chunkhash].js"
"#;

fn project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("parts.toml"), MANIFEST).expect("write manifest");
    dir
}

#[test]
fn loads_toml_manifest() {
    let dir = project();
    let manifest = ManifestDiscovery::new(dir.path()).load().expect("load");

    assert_eq!(manifest.default_target.as_deref(), Some("start"));
    assert_eq!(manifest.targets.len(), 2);
    assert_eq!(
        manifest.targets["build"].parts[1],
        PartSpec::ExtractBundle(BundleExtraction::new("vendor", ["react", "lodash"]))
    );
}

#[test]
fn composes_default_target() {
    let dir = project();
    let manifest = ManifestDiscovery::new(dir.path()).load().expect("load");

    let target = manifest.resolve_target(None, None).expect("target");
    assert_eq!(target, "start");

    let config = manifest.compose(target, dir.path()).expect("compose");
    assert_eq!(config.plugin_names(), vec!["hot-module-replacement"]);
    assert_eq!(config.module.rules.len(), 1);
    assert_eq!(config.extra["output"]["filename"], "[name].js");
}

#[test]
fn composes_build_target_with_cwd() {
    let dir = project();
    let manifest = ManifestDiscovery::new(dir.path()).load().expect("load");

    let config = manifest.compose("build", dir.path()).expect("compose");
    assert_eq!(
        config.plugin_names(),
        vec!["clean", "commons-chunk", "define", "extract-css", "purge-css"]
    );

    match &config.plugins[0] {
        Plugin::Clean { root, .. } => assert_eq!(root, dir.path()),
        other => panic!("unexpected plugin: {other:?}"),
    }

    let value = config.to_value().expect("value");
    assert_eq!(value["entry"]["vendor"], json!(["react", "lodash"]));
    assert_eq!(value["output"]["filename"], "[name].[chunkhash].js");
    assert_eq!(value["output"]["path"], "build");
    assert_eq!(value["postcss"][0]["browsers"], json!(["last 2 versions"]));
}

#[test]
fn loads_package_json_field() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "app",
            "parts": {
                "targets": {
                    "build": { "parts": [{ "part": "minify" }] }
                }
            }
        }"#,
    )
    .expect("write package.json");

    let manifest = ManifestDiscovery::new(dir.path()).load().expect("load");
    let target = manifest.resolve_target(None, None).expect("only target");
    let config = manifest.compose(target, dir.path()).expect("compose");
    assert_eq!(config.plugin_names(), vec!["minify"]);
}

#[test]
fn relative_cwd_is_rejected() {
    let dir = project();
    let manifest = ManifestDiscovery::new(dir.path()).load().expect("load");

    let err = manifest
        .compose("build", std::path::Path::new("relative"))
        .unwrap_err();
    match err {
        PartsError::InvalidManifest { field, message } => {
            assert_eq!(field, "targets.build.parts[0]");
            assert!(message.contains("absolute"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_manifest_reports_load_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("parts.toml"),
        r#"
[[targets.build.parts]]
part = "dev-server"
port = "not-a-number"
"#,
    )
    .expect("write manifest");

    let result = ManifestDiscovery::new(dir.path()).load();
    assert!(matches!(result, Err(PartsError::Load(_))));
}
