//! Project initialisation: settings file, directories and the `cn` helper

use crate::config::package_json::{self, PackageJsonError, UTILITY_DEPENDENCIES};
use crate::config::{
    ConfigError, LanguageMode, ProjectConfig, Style, DEFAULT_COMPONENTS_PATH, DEFAULT_UTILS_PATH,
};
use crate::templates::utility_template;
use crate::workspace::Workspace;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
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

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    PackageJson(#[from] PackageJsonError),
}

/// Answers collected by `orzui init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitAnswers {
    pub components_path: String,
    pub utils_path: String,
    pub language_mode: LanguageMode,
    pub style: Style,
}

impl Default for InitAnswers {
    fn default() -> Self {
        Self {
            components_path: DEFAULT_COMPONENTS_PATH.to_string(),
            utils_path: DEFAULT_UTILS_PATH.to_string(),
            language_mode: LanguageMode::Typed,
            style: Style::Default,
        }
    }
}

impl InitAnswers {
    pub fn into_config(self) -> ProjectConfig {
        let mut config = ProjectConfig::new(self.components_path, self.language_mode, self.style);
        config.utils_path = self.utils_path;
        config
    }
}

/// What `initialize` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub config: ProjectConfig,
    pub config_path: PathBuf,
    pub components_dir: PathBuf,
    pub utility_path: PathBuf,
    pub package_json_updated: bool,
}

/// Whether the workspace already has a settings file
pub fn is_initialized(workspace: &Workspace) -> bool {
    ProjectConfig::path(workspace.root()).exists()
}

/// Set up a project: create the component and utility directories, write the
/// `cn` helper, save `orzui.json` and add the helper's dependencies to
/// `package.json` when one exists. An existing settings file is replaced.
pub fn initialize(workspace: &Workspace, answers: InitAnswers) -> Result<InitReport, InitError> {
    let config = answers.into_config();
    let root = workspace.root();

    let components_dir = config.components_dir(root);
    create_dir(&components_dir)?;

    let utils_dir = config.utils_dir(root);
    create_dir(&utils_dir)?;

    let utility_path = utils_dir.join(format!("cn.{}", config.language_mode.script_extension()));
    std::fs::write(&utility_path, utility_template(config.language_mode)).map_err(|source| {
        InitError::WriteFailed {
            path: utility_path.clone(),
            source,
        }
    })?;
    tracing::debug!(path = %utility_path.display(), "wrote utility helper");

    let config_path = config.save(root)?;
    let package_json_updated = package_json::add_dependencies(root, UTILITY_DEPENDENCIES)?;

    tracing::info!(
        config = %config_path.display(),
        mode = %config.language_mode,
        style = %config.style,
        "initialized project"
    );

    Ok(InitReport {
        config,
        config_path,
        components_dir,
        utility_path,
        package_json_updated,
    })
}

fn create_dir(path: &std::path::Path) -> Result<(), InitError> {
    std::fs::create_dir_all(path).map_err(|source| InitError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}
