//! Targets command implementation.

use crate::cli::ManifestArgs;
use crate::commands::load_manifest;
use crate::error::Result;

/// Execute the targets command.
///
/// Prints one line per target to stdout: the name, a `*` marker for the
/// default target, and the parts it applies in order.
pub fn execute(args: ManifestArgs) -> Result<()> {
    let manifest = load_manifest(&args)?;

    for (name, target) in &manifest.targets {
        let marker = if manifest.default_target.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        let parts = target
            .parts
            .iter()
            .map(|part| part.kind().as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{marker} {name}: {parts}");
    }

    Ok(())
}
