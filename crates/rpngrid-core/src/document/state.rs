use rpngrid_engine::engine::Grid;
use std::path::{Path, PathBuf};

/// A loaded table and where it came from.
#[derive(Debug, Default)]
pub struct Document {
    /// The grid, raw until [`Document::evaluate`] runs
    pub grid: Grid,
    /// Source file, if loaded from disk
    pub file_path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document::default()
    }

    pub fn from_grid(grid: Grid) -> Self {
        Document {
            grid,
            file_path: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.grid.is_evaluated()
    }
}
