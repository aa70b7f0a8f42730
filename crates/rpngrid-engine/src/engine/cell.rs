//! Cell data structures for the evaluation grid.
//!
//! - [`Cell`] - One slot of the grid: raw text, a resolved number, or an error
//! - [`Grid`] - Row-major storage where each row may have its own width

use super::cell_ref::CellRef;
use super::error::CellError;

/// The state of a single cell.
///
/// Cells start as [`Cell::Raw`] and move to [`Cell::Resolved`] or
/// [`Cell::Error`] exactly once.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Raw(String),
    Resolved(f64),
    Error(CellError),
}

impl Cell {
    pub fn new_raw(text: &str) -> Cell {
        Cell::Raw(text.to_string())
    }

    /// Build the final state of a cell from an evaluation result.
    pub fn from_result(result: Result<f64, CellError>) -> Cell {
        match result {
            Ok(n) => Cell::Resolved(n),
            Err(e) => Cell::Error(e),
        }
    }

    /// True once the cell holds a number or an error.
    pub fn is_final(&self) -> bool {
        !matches!(self, Cell::Raw(_))
    }
}

/// A rectangular-ish table of cells. Rows may differ in length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new() -> Grid {
        Grid::default()
    }

    /// Build a grid of raw cells from already split fields.
    pub fn from_rows<R, F>(rows: R) -> Grid
    where
        R: IntoIterator<Item = Vec<F>>,
        F: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|fields| fields.iter().map(|f| Cell::new_raw(f.as_ref())).collect())
            .collect();
        Grid { rows }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in `row`, 0 when the row does not exist.
    pub fn col_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn get(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.rows.get(cell_ref.row)?.get(cell_ref.col)
    }

    /// Overwrite a cell in place. Out-of-bounds writes are ignored.
    pub fn set(&mut self, cell_ref: &CellRef, cell: Cell) {
        if let Some(slot) = self
            .rows
            .get_mut(cell_ref.row)
            .and_then(|r| r.get_mut(cell_ref.col))
        {
            *slot = cell;
        }
    }

    /// Store an evaluation result if the cell is still raw.
    /// Returns false when the cell was already final and was left untouched.
    pub fn finalize(&mut self, cell_ref: &CellRef, result: Result<f64, CellError>) -> bool {
        let Some(slot) = self
            .rows
            .get_mut(cell_ref.row)
            .and_then(|r| r.get_mut(cell_ref.col))
        else {
            return false;
        };
        if slot.is_final() {
            return false;
        }
        *slot = Cell::from_result(result);
        true
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Number of cells in the error state.
    pub fn error_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Error(_)))
            .count()
    }

    /// True when no cell is left in the raw state.
    pub fn is_evaluated(&self) -> bool {
        self.rows.iter().flatten().all(Cell::is_final)
    }
}
