//! Invocation context passed explicitly into the core

use std::path::{Path, PathBuf};

/// The project an invocation operates on.
///
/// Every path in the configuration is resolved against `root`; the core never
/// consults the process working directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace rooted at the current directory, or at `dir` if given
    /// (relative `dir` is taken relative to the current directory)
    pub fn from_cwd(dir: Option<&Path>) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = match dir {
            Some(p) if p.is_absolute() => p.to_path_buf(),
            Some(p) => cwd.join(p),
            None => cwd,
        };
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
