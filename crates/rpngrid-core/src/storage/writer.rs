//! Writer for the evaluated grid.

use crate::error::Result;
use rpngrid_engine::engine::{Cell, Grid, format_cell};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::csv::DELIMITER;

/// Write the rendered grid to a file.
pub fn write_csv(path: &Path, grid: &Grid) -> Result<()> {
    fs::write(path, render_csv(grid))?;
    Ok(())
}

/// Stream the rendered grid, one row per line.
pub fn write_csv_to<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for row in grid.rows() {
        writeln!(out, "{}", render_row(row))?;
    }
    Ok(())
}

/// Render the grid to a string, one row per line.
pub fn render_csv(grid: &Grid) -> String {
    grid.rows().map(|row| render_row(row) + "\n").collect()
}

fn render_row(row: &[Cell]) -> String {
    let sep = DELIMITER.to_string();
    let fields: Vec<String> = row.iter().map(format_cell).collect();
    fields.join(sep.as_str())
}
