//! Delimited-text loading.

use crate::error::{Result, RpnGridError};
use rpngrid_engine::engine::Grid;
use std::path::Path;

/// Field separator of the input table.
pub const DELIMITER: char = ',';

/// Read a delimited file into a grid of raw cells.
pub fn parse_csv(path: &Path) -> Result<Grid> {
    let content = std::fs::read_to_string(path).map_err(|source| RpnGridError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_csv_str(&content);
    tracing::info!(path = %path.display(), rows = grid.row_count(), "loaded grid");
    Ok(grid)
}

/// Parse delimited text into a grid of raw cells.
/// Every line is a row and every field a cell, empty ones included.
pub fn parse_csv_str(content: &str) -> Grid {
    Grid::from_rows(content.lines().map(parse_csv_line))
}

/// Split one line into trimmed fields.
///
/// Trailing empty fields are dropped, so `1,2,` is a two-cell row. An empty
/// line is still one (empty) field. Whitespace between postfix tokens inside
/// a field is kept.
pub(crate) fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() > 1 {
        while fields.last() == Some(&"") {
            fields.pop();
        }
    }
    fields.iter().map(|field| field.trim().to_string()).collect()
}
