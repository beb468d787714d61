//! Parameter shape checks run at each producer boundary.
//!
//! Nothing here touches the filesystem: path patterns are opaque and are only
//! checked for presence.

use std::path::Path;

use crate::error::{PartsError, Result};
use crate::fragment::FragmentKind;
use crate::paths::PathSet;

pub(crate) fn require_paths(kind: FragmentKind, paths: &PathSet) -> Result<()> {
    if paths.is_empty() || paths.iter().all(|p| p.trim().is_empty()) {
        return Err(PartsError::EmptyPathSet { kind });
    }
    Ok(())
}

pub(crate) fn require_absolute(cwd: &Path) -> Result<()> {
    if !cwd.is_absolute() {
        return Err(PartsError::RelativeWorkingDir {
            path: cwd.to_path_buf(),
        });
    }
    Ok(())
}

pub(crate) fn validate_host(host: &str) -> Result<()> {
    if host.trim().is_empty() || host.chars().any(char::is_whitespace) {
        return Err(PartsError::InvalidHost {
            host: host.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(PartsError::InvalidPort { port });
    }
    Ok(())
}

/// Free-variable keys are dotted identifier paths such as
/// `process.env.NODE_ENV`.
pub(crate) fn validate_free_variable(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PartsError::InvalidFreeVariable {
            key: key.to_string(),
            reason: "key cannot be empty".to_string(),
        });
    }

    for segment in key.split('.') {
        if !is_identifier(segment) {
            return Err(PartsError::InvalidFreeVariable {
                key: key.to_string(),
                reason: format!("'{segment}' is not a valid identifier"),
            });
        }
    }

    Ok(())
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
