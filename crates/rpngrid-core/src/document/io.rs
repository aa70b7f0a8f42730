use super::Document;
use crate::error::Result;
use crate::storage::{parse_csv, parse_csv_str, render_csv, write_csv, write_csv_to};
use std::io::Write;
use std::path::{Path, PathBuf};

impl Document {
    /// Load a delimited table from disk. Cells stay raw.
    pub fn from_path(path: &Path) -> Result<Self> {
        let grid = parse_csv(path)?;
        Ok(Document {
            grid,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Load a delimited table from a string. Cells stay raw.
    pub fn from_csv_str(content: &str) -> Self {
        Document::from_grid(parse_csv_str(content))
    }

    /// Render the grid as delimited text.
    pub fn render(&self) -> String {
        render_csv(&self.grid)
    }

    /// Stream the rendered grid to a writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write_csv_to(out, &self.grid)?;
        Ok(())
    }

    /// Save the rendered grid to a file.
    /// Returns the path saved to.
    pub fn save_to(&self, path: &Path) -> Result<PathBuf> {
        write_csv(path, &self.grid)?;
        Ok(path.to_path_buf())
    }
}
