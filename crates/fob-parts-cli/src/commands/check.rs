//! Check command implementation.
//!
//! Composes every target without printing the result, so malformed part
//! parameters surface before the bundler ever runs.

use fob_parts::PartsError;
use tracing::warn;

use crate::cli::CheckArgs;
use crate::commands::{load_manifest, resolve_cwd};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns `CliError::CheckFailed` when at least one target fails to compose.
pub fn execute(args: CheckArgs) -> Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    let cwd = resolve_cwd(args.cwd.as_deref())?;

    if manifest.targets.is_empty() {
        warn!("manifest defines no targets");
    }

    let total = manifest.targets.len();
    let mut failed = 0;
    for name in manifest.target_names() {
        match manifest.compose(name, &cwd) {
            Ok(config) => ui::success(&format!(
                "{name}: {} plugins, {} rules",
                config.plugins.len(),
                config.module.rules.len()
            )),
            Err(err) => {
                failed += 1;
                ui::error(&format!("{name}: {err}"));
            }
        }
    }

    if let Some(default) = manifest.default_target.as_deref() {
        if !manifest.targets.contains_key(default) {
            ui::error(&format!("default_target '{default}' is not defined"));
            return Err(PartsError::UnknownTarget {
                name: default.to_string(),
                available: manifest.targets.keys().cloned().collect(),
            }
            .into());
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed { failed, total });
    }

    ui::info(&format!("{total} targets composed"));
    Ok(())
}
