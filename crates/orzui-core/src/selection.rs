//! Resolving which components a request refers to
//!
//! An explicit list from the command line, `--all`, or (when neither is given)
//! an answer collected from a [`ComponentPicker`]. Whatever the source, the
//! result is a plain list of names that the materializer validates.

use crate::templates::AVAILABLE_COMPONENTS;
use anyhow::Result;

/// Source of an interactive component choice
pub trait ComponentPicker {
    /// Ask the user to choose from `available`; an empty answer means "nothing"
    fn pick(&mut self, available: &[&'static str]) -> Result<Vec<String>>;
}

/// Outcome of request resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Components(Vec<String>),
    /// The user was asked and chose nothing
    Nothing,
}

/// Resolve the requested names.
///
/// `all` wins over an explicit list. The picker is only consulted when both
/// are absent.
pub fn resolve_selection<P: ComponentPicker + ?Sized>(
    explicit: &[String],
    all: bool,
    picker: &mut P,
) -> Result<Selection> {
    if all {
        return Ok(Selection::Components(
            AVAILABLE_COMPONENTS.iter().map(|s| s.to_string()).collect(),
        ));
    }

    if !explicit.is_empty() {
        return Ok(Selection::Components(explicit.to_vec()));
    }

    let picked = picker.pick(&AVAILABLE_COMPONENTS)?;
    if picked.is_empty() {
        Ok(Selection::Nothing)
    } else {
        Ok(Selection::Components(picked))
    }
}

/// Picker for non-interactive runs: never selects anything
#[derive(Debug, Default)]
pub struct NoPicker;

impl ComponentPicker for NoPicker {
    fn pick(&mut self, _available: &[&'static str]) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
