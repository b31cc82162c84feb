//! Style-sheet discovery.

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Finds the style sheets to audit under a root.
pub trait FileScanner {
    /// Return every matching file under `root`, sorted.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
