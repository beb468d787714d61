//! Compose command implementation.

use std::fs;

use tracing::info;

use crate::cli::ComposeArgs;
use crate::commands::{load_manifest, resolve_cwd};
use crate::error::{CliError, Result};
use crate::ui;

/// npm exports the running script name under this variable
const LIFECYCLE_EVENT_VAR: &str = "npm_lifecycle_event";

/// Execute the compose command.
///
/// Loads the manifest, picks a target, merges its fragments and writes the
/// configuration as JSON to stdout or `--output`.
pub fn execute(args: ComposeArgs) -> Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    let cwd = resolve_cwd(args.cwd.as_deref())?;

    let lifecycle_event = std::env::var(LIFECYCLE_EVENT_VAR).ok();
    let target = manifest.resolve_target(args.target.as_deref(), lifecycle_event.as_deref())?;
    info!(target_name = target, "composing target");

    let config = manifest.compose(target, &cwd)?;
    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            ui::success(&format!("Wrote '{target}' configuration to {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
