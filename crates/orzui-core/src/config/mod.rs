//! Project configuration (`orzui.json`)
//!
//! This module provides:
//! - The configuration record consumed by the materializer (language mode, style, paths)
//! - Loading and saving the project-local settings document
//! - `package.json` dependency merging used by `init`

pub mod package_json;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the settings document at the project root
pub const CONFIG_FILE: &str = "orzui.json";

/// Schema marker written into every saved configuration
pub const SCHEMA_URL: &str = "https://orzui.dev/schema.json";

/// Default destination for component files
pub const DEFAULT_COMPONENTS_PATH: &str = "src/components/orzui";

/// Default destination for utility files
pub const DEFAULT_UTILS_PATH: &str = "src/lib";

/// Errors raised while loading or saving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OrzUI is not initialized ({} not found)", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize configuration")]
    Serialize(#[from] serde_json::Error),
}

/// Which template variant to emit
///
/// Persisted as the boolean `typescript` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageMode {
    Typed,
    Untyped,
}

impl LanguageMode {
    pub fn from_typescript_flag(typescript: bool) -> Self {
        if typescript {
            LanguageMode::Typed
        } else {
            LanguageMode::Untyped
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, LanguageMode::Typed)
    }

    /// File extension for component files (`tsx` / `jsx`)
    pub fn extension(&self) -> &'static str {
        match self {
            LanguageMode::Typed => "tsx",
            LanguageMode::Untyped => "jsx",
        }
    }

    /// File extension for plain script files such as the `cn` helper
    pub fn script_extension(&self) -> &'static str {
        match self {
            LanguageMode::Typed => "ts",
            LanguageMode::Untyped => "js",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageMode::Typed => "TypeScript",
            LanguageMode::Untyped => "JavaScript",
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for LanguageMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_typed())
    }
}

impl<'de> Deserialize<'de> for LanguageMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(LanguageMode::from_typescript_flag)
    }
}

/// Visual style preference
///
/// Carried through to template resolution but does not change output yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Default,
    NewYork,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Default, Style::NewYork];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::NewYork => "new-york",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Style::Default => "Default",
            Style::NewYork => "New York",
        }
    }

    /// Parse a style name as written in the settings file
    pub fn parse(s: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|style| style.as_str() == s)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_schema() -> String {
    SCHEMA_URL.to_string()
}

fn default_utils_path() -> String {
    DEFAULT_UTILS_PATH.to_string()
}

/// Project configuration as stored in `orzui.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(rename = "$schema", default = "default_schema")]
    pub schema: String,

    #[serde(default)]
    pub style: Style,

    #[serde(rename = "typescript")]
    pub language_mode: LanguageMode,

    /// Destination of component files, relative to the project root
    pub components_path: String,

    /// Destination of utility files, relative to the project root
    #[serde(default = "default_utils_path")]
    pub utils_path: String,
}

impl ProjectConfig {
    pub fn new(
        components_path: impl Into<String>,
        language_mode: LanguageMode,
        style: Style,
    ) -> Self {
        Self {
            schema: default_schema(),
            style,
            language_mode,
            components_path: components_path.into(),
            utils_path: default_utils_path(),
        }
    }

    /// Path of the settings document for a project root
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE)
    }

    /// Load the configuration, returning `None` if the project is not initialized
    pub fn load(project_root: &Path) -> Result<Option<Self>, ConfigError> {
        let path = Self::path(project_root);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path, source })?;

        Ok(Some(config))
    }

    /// Load the configuration, treating a missing file as an error
    pub fn require(project_root: &Path) -> Result<Self, ConfigError> {
        Self::load(project_root)?.ok_or_else(|| ConfigError::Missing {
            path: Self::path(project_root),
        })
    }

    /// Write the configuration as pretty JSON, replacing any existing file
    pub fn save(&self, project_root: &Path) -> Result<PathBuf, ConfigError> {
        let path = Self::path(project_root);
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(&path, content).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Absolute destination directory for component files
    pub fn components_dir(&self, project_root: &Path) -> PathBuf {
        resolve_relative(project_root, &self.components_path)
    }

    /// Absolute destination directory for utility files
    pub fn utils_dir(&self, project_root: &Path) -> PathBuf {
        resolve_relative(project_root, &self.utils_path)
    }
}

/// Join a configured path onto the project root.
///
/// The path is split on `/` and `\\` and joined segment by segment, so
/// settings files written on one platform resolve the same on another. Empty
/// and `.` segments (including leading separators) are dropped; `..` segments
/// are kept as written.
pub fn resolve_relative(root: &Path, configured: &str) -> PathBuf {
    configured
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}
