/// Dev-server port used when none is supplied
pub const DEFAULT_DEV_PORT: u16 = 7070;

/// Default name of the shared runtime/manifest chunk
pub const DEFAULT_MANIFEST_CHUNK: &str = "manifest";

/// Output pattern for extracted stylesheets
pub const EXTRACTED_CSS_FILENAME: &str = "[name].[chunkhash].css";

pub(crate) const CSS_TEST: &str = r"\.css$";
pub(crate) const JS_TEST: &str = r"\.js$";

pub(crate) const AUTOPREFIXER_BROWSERS: &[&str] = &["last 2 versions"];

// Helper defaults
pub(crate) fn default_manifest_chunk() -> String {
    DEFAULT_MANIFEST_CHUNK.to_string()
}
