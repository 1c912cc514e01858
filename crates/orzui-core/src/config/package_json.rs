//! `package.json` dependency merging

use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PACKAGE_JSON: &str = "package.json";

/// Runtime packages the generated components import through the `cn` helper
pub const UTILITY_DEPENDENCIES: &[(&str, &str)] =
    &[("clsx", "^2.1.0"), ("tailwind-merge", "^2.2.0")];

#[derive(Debug, Error)]
pub enum PackageJsonError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize package.json")]
    Serialize(#[from] serde_json::Error),
}

/// Merge `deps` into the `dependencies` table of the project's package.json.
///
/// Existing entries with the same name are replaced; everything else (including
/// key order) is preserved. Returns `Ok(false)` when there is no package.json.
pub fn add_dependencies(
    project_root: &Path,
    deps: &[(&str, &str)],
) -> Result<bool, PackageJsonError> {
    let path = project_root.join(PACKAGE_JSON);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no package.json, skipping dependency update");
        return Ok(false);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| PackageJsonError::Read {
        path: path.clone(),
        source,
    })?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|source| PackageJsonError::Parse {
            path: path.clone(),
            source,
        })?;

    let Some(root) = manifest.as_object_mut() else {
        return Err(PackageJsonError::NotAnObject { path });
    };

    let dependencies = root
        .entry("dependencies")
        .or_insert_with(|| Value::Object(Map::new()));
    if !dependencies.is_object() {
        *dependencies = Value::Object(Map::new());
    }
    if let Some(table) = dependencies.as_object_mut() {
        for (name, version) in deps {
            table.insert((*name).to_string(), Value::String((*version).to_string()));
        }
    }

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    std::fs::write(&path, output).map_err(|source| PackageJsonError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = deps.len(), "updated package.json dependencies");
    Ok(true)
}
