//! Batch materialization of component templates into a project

use super::component::{Component, AVAILABLE_COMPONENTS};
use super::registry;
use crate::config::{LanguageMode, ProjectConfig};
use crate::workspace::Workspace;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error(
        "Components not available: {}. Available components: {}",
        .invalid.join(", "),
        .available.join(", ")
    )]
    InvalidIdentifiers {
        invalid: Vec<String>,
        available: Vec<&'static str>,
    },

    #[error("Failed to create directory: {}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A component and the file it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    pub component: Component,
    pub path: PathBuf,
}

impl Placed {
    /// File name of the placed component (e.g. `button.tsx`)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.component.to_string())
    }
}

/// Result of one batch request
///
/// `added`, `skipped` and `invalid` are disjoint. A non-empty `invalid` list
/// means the whole batch was rejected and nothing was written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializationOutcome {
    pub added: Vec<Placed>,
    pub skipped: Vec<Placed>,
    pub invalid: Vec<String>,
}

impl MaterializationOutcome {
    fn rejected(invalid: Vec<String>) -> Self {
        Self {
            invalid,
            ..Self::default()
        }
    }

    /// Whether validation rejected the batch
    pub fn is_rejected(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// The full set of valid identifiers, for retry guidance
    pub fn available(&self) -> &'static [&'static str] {
        &AVAILABLE_COMPONENTS
    }

    /// Convert a rejected outcome into `MaterializeError::InvalidIdentifiers`
    pub fn into_result(self) -> Result<Self, MaterializeError> {
        if self.is_rejected() {
            Err(MaterializeError::InvalidIdentifiers {
                invalid: self.invalid,
                available: AVAILABLE_COMPONENTS.to_vec(),
            })
        } else {
            Ok(self)
        }
    }
}

/// Target file for a component: `<components_dir>/<name>.<tsx|jsx>`
pub fn target_path(components_dir: &Path, component: Component, mode: LanguageMode) -> PathBuf {
    components_dir.join(format!("{}.{}", component.as_str(), mode.extension()))
}

/// Split requested names into known components and unknown names.
///
/// Both lists keep input order; repeated names appear once.
pub fn partition(requested: &[String]) -> (Vec<Component>, Vec<String>) {
    let mut valid = Vec::new();
    let mut invalid: Vec<String> = Vec::new();
    let mut seen = HashSet::new();

    for name in requested {
        match Component::parse(name) {
            Some(component) => {
                if seen.insert(component) {
                    valid.push(component);
                }
            }
            None => {
                if !invalid.contains(name) {
                    invalid.push(name.clone());
                }
            }
        }
    }

    (valid, invalid)
}

/// Write the requested components into the configured components directory.
///
/// Validation is all-or-nothing: if any name is unknown, nothing is created and
/// the returned outcome only carries the unknown names. Existing files are left
/// alone unless `force_overwrite` is set. A failed write aborts the batch;
/// files written before it stay on disk.
pub fn materialize(
    workspace: &Workspace,
    requested: &[String],
    config: &ProjectConfig,
    force_overwrite: bool,
) -> Result<MaterializationOutcome, MaterializeError> {
    let (valid, invalid) = partition(requested);
    if !invalid.is_empty() {
        tracing::info!(invalid = ?invalid, "rejecting batch with unknown components");
        return Ok(MaterializationOutcome::rejected(invalid));
    }

    let components_dir = config.components_dir(workspace.root());
    std::fs::create_dir_all(&components_dir).map_err(|source| {
        MaterializeError::DirectoryCreationFailed {
            path: components_dir.clone(),
            source,
        }
    })?;

    let mut outcome = MaterializationOutcome::default();

    for component in valid {
        let path = target_path(&components_dir, component, config.language_mode);

        if path.exists() && !force_overwrite {
            tracing::debug!(component = %component, path = %path.display(), "skipping existing file");
            outcome.skipped.push(Placed { component, path });
            continue;
        }

        let content = registry::resolve_component(component, config);
        std::fs::write(&path, content).map_err(|source| MaterializeError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(component = %component, path = %path.display(), "wrote component");
        outcome.added.push(Placed { component, path });
    }

    tracing::info!(
        added = outcome.added.len(),
        skipped = outcome.skipped.len(),
        dir = %components_dir.display(),
        "materialized components"
    );

    Ok(outcome)
}
