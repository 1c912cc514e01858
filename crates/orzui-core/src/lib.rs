//! OrzUI Core - Shared library for the `orzui` component CLI
//!
//! This library copies UI component templates into a project. The project's
//! `orzui.json` decides where files go and whether the typed (`.tsx`) or
//! untyped (`.jsx`) variant is written.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - The template registry and batch materializer
//!   (pure resolution plus skip-if-exists writes)
//! - **Layer 2: Workflow Orchestration** - Configuration loading, request
//!   resolution through the `ComponentPicker` seam, project initialisation
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use orzui_core::{templates, ProjectConfig, Workspace};
//!
//! # fn main() -> anyhow::Result<()> {
//! let workspace = Workspace::from_cwd(None)?;
//! let config = ProjectConfig::require(workspace.root())?;
//!
//! let requested = vec!["button".to_string(), "card".to_string()];
//! let outcome = templates::materialize(&workspace, &requested, &config, false)?.into_result()?;
//! for placed in &outcome.added {
//!     println!("added {}", placed.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod init;
pub mod selection;
pub mod templates;
pub mod workspace;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ConfigError, LanguageMode, ProjectConfig, Style};
pub use init::{initialize, InitAnswers, InitError, InitReport};
pub use selection::{resolve_selection, ComponentPicker, Selection};
pub use templates::{
    materialize, Component, MaterializationOutcome, MaterializeError, Placed, RegistryError,
    AVAILABLE_COMPONENTS,
};
pub use workspace::Workspace;

#[cfg(feature = "tui")]
pub use tui::{run_add, run_init};
