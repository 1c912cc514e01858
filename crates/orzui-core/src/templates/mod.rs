//! Component templates and their materialization
//!
//! This module provides:
//! - The closed set of supported components
//! - The template registry (component + configuration -> template text)
//! - Batch materialization into the project's components directory

pub mod component;
pub mod materializer;
pub mod registry;

pub use component::{Component, AVAILABLE_COMPONENTS};
pub use materializer::{
    materialize, target_path, MaterializationOutcome, MaterializeError, Placed,
};
pub use registry::{resolve, resolve_component, utility_template, RegistryError};
