//! Command implementations.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking the parsed arguments.

pub mod check;
pub mod compose;
pub mod targets;

pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
pub use targets::execute as targets_execute;

use std::path::{Path, PathBuf};

use fob_parts::{Manifest, ManifestDiscovery};
use tracing::debug;

use crate::cli::ManifestArgs;
use crate::error::Result;

/// Load the manifest named on the command line or discover one in the
/// current directory.
pub(crate) fn load_manifest(args: &ManifestArgs) -> Result<Manifest> {
    let manifest = match &args.manifest {
        Some(path) => ManifestDiscovery::load_from(path)?,
        None => ManifestDiscovery::new(std::env::current_dir()?).load()?,
    };
    Ok(manifest)
}

/// Resolve the working directory handed to cwd-anchored fragments.
///
/// Relative paths are joined onto the process working directory so the
/// library always receives an absolute path.
pub(crate) fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    let resolved = match cwd {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => current.join(path),
        None => current,
    };
    debug!(cwd = %resolved.display(), "resolved working directory");
    Ok(resolved)
}
