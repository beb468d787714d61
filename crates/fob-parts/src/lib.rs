//! Composable bundler configuration fragments.
//!
//! Each producer in [`parts`] returns a [`Fragment`] describing one concern of a
//! build (dev server wiring, CSS handling, minification, ...). Fragments are
//! combined with [`merge`] into a single [`BuildConfig`] that is handed to the
//! external bundler as JSON.
//!
//! ```
//! use fob_parts::{merge, parts, DevServerParams};
//! use std::path::Path;
//!
//! let fragments = vec![
//!     parts::dev_server(&DevServerParams::new().host("localhost")).unwrap(),
//!     parts::minify(),
//!     parts::clean("build", Path::new("/srv/app")).unwrap(),
//! ];
//!
//! let config = merge(fragments);
//! assert_eq!(config.plugins.len(), 3);
//! assert_eq!(config.dev_server.unwrap().port, Some(7070));
//! ```

pub mod config;
pub mod error;
pub mod fragment;
pub mod manifest;
pub mod merge;
pub mod parts;
pub mod paths;
mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use fragment::{Fragment, FragmentKind, Part};
pub use manifest::{Manifest, ManifestDiscovery, PartSpec, Target};
pub use merge::{Merge, compose, merge, merge_values};
pub use parts::{BundleExtraction, DevServerParams};
pub use paths::PathSet;
