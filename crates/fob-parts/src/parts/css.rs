//! Stylesheet fragments for development and production builds.

use std::path::Path;

use crate::config::{
    AUTOPREFIXER_BROWSERS, CSS_TEST, EXTRACTED_CSS_FILENAME, Extraction, Loader, ModuleRule,
    Plugin, PostCssPlugin,
};
use crate::error::Result;
use crate::fragment::{Fragment, FragmentKind, Part};
use crate::paths::PathSet;
use crate::validation::{require_absolute, require_paths};

/// CSS for development: styles are injected into the page at runtime.
pub fn setup_css(paths: &PathSet) -> Result<Fragment> {
    require_paths(FragmentKind::SetupCss, paths)?;

    let rule = ModuleRule::new(CSS_TEST, paths.clone()).with_loaders([
        Loader::new("style"),
        Loader::new("css"),
        Loader::new("stylus"),
    ]);

    Ok(Fragment::new(FragmentKind::SetupCss, vec![Part::Rule(rule)]))
}

/// CSS for production: styles are extracted into a hashed file and
/// autoprefixed.
pub fn extract_css(paths: &PathSet) -> Result<Fragment> {
    require_paths(FragmentKind::ExtractCss, paths)?;

    let rule = ModuleRule::new(CSS_TEST, paths.clone()).with_extract(Extraction {
        fallback: Loader::new("style"),
        loaders: vec![Loader::new("css"), Loader::new("postcss"), Loader::new("stylus")],
    });

    let autoprefixer = PostCssPlugin::Autoprefixer {
        browsers: AUTOPREFIXER_BROWSERS.iter().map(|b| b.to_string()).collect(),
    };

    Ok(Fragment::new(
        FragmentKind::ExtractCss,
        vec![
            Part::Rule(rule),
            Part::PostCss(autoprefixer),
            Part::Plugin(Plugin::ExtractCss {
                filename: EXTRACTED_CSS_FILENAME.to_string(),
            }),
        ],
    ))
}

/// Drop CSS rules that none of `paths` reference.
///
/// `cwd` anchors relative patterns and must be absolute.
pub fn purify_css(paths: &PathSet, cwd: &Path) -> Result<Fragment> {
    require_paths(FragmentKind::PurifyCss, paths)?;
    require_absolute(cwd)?;

    Ok(Fragment::new(
        FragmentKind::PurifyCss,
        vec![Part::Plugin(Plugin::PurgeCss {
            base_path: cwd.to_path_buf(),
            paths: paths.clone(),
        })],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use serde_json::json;

    #[test]
    fn extract_css_contributes_three_sections() {
        let config = BuildConfig::from(extract_css(&PathSet::from("app")).unwrap());
        assert_eq!(
            config.to_value().unwrap(),
            json!({
                "module": {
                    "rules": [{
                        "test": "\\.css$",
                        "extract": {
                            "fallback": { "loader": "style" },
                            "use": [
                                { "loader": "css" },
                                { "loader": "postcss" },
                                { "loader": "stylus" }
                            ]
                        },
                        "include": ["app"]
                    }]
                },
                "postcss": [{ "plugin": "autoprefixer", "browsers": ["last 2 versions"] }],
                "plugins": [{ "plugin": "extract-css", "filename": "[name].[chunkhash].css" }]
            })
        );
    }

    #[test]
    fn purify_css_requires_absolute_cwd() {
        let result = purify_css(&PathSet::from("app"), Path::new("."));
        assert!(result.is_err());
    }
}
