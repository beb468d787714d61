//! Error handling for the fob-parts CLI.
//!
//! Library failures arrive as [`PartsError`] and are wrapped in [`CliError`];
//! `main` turns the result into a miette report.

use std::path::PathBuf;

use fob_parts::PartsError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest loading and fragment construction errors
    #[error(transparent)]
    Parts(#[from] PartsError),

    /// One or more targets failed `check`
    #[error("{failed} of {total} targets failed to compose")]
    CheckFailed { failed: usize, total: usize },

    /// Failed to write the composed configuration
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Parts(PartsError::ManifestNotFound { root }) => miette::miette!(
            help = "Create a parts.toml or pass --manifest <FILE>",
            "No parts manifest found in {}",
            root.display()
        ),
        CliError::Parts(PartsError::NoTarget { count }) => miette::miette!(
            help = "Pass --target <NAME> or set default_target in the manifest",
            "No target selected ({count} targets defined)"
        ),
        CliError::Parts(e) => miette::miette!("Configuration error: {}", e),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_error_converts() {
        let err: CliError = PartsError::EmptyBundleName.into();
        assert!(matches!(err, CliError::Parts(_)));
        assert_eq!(err.to_string(), "bundle name cannot be empty");
    }

    #[test]
    fn check_failed_message() {
        let err = CliError::CheckFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 targets failed to compose");
    }

    #[test]
    fn miette_report_keeps_message() {
        let report = cli_error_to_miette(CliError::Parts(PartsError::NoTarget { count: 2 }));
        assert!(report.to_string().contains("2 targets defined"));
    }
}
