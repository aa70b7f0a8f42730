//! Reference cycle guard.
//!
//! A cell like `A1 1 +` stored in `A1`, or a chain `A1 -> B1 -> A1`, would
//! recurse forever. [`EvalContext`] tracks the cells currently being resolved
//! on one path so the resolver can stop at the first revisit.

use std::collections::HashSet;

use super::CellRef;

/// The in-progress reference set for one top-level cell evaluation.
#[derive(Debug, Default)]
pub struct EvalContext {
    visiting: HashSet<CellRef>,
    path: Vec<CellRef>,
}

impl EvalContext {
    pub fn new() -> EvalContext {
        EvalContext::default()
    }

    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        self.visiting.contains(cell_ref)
    }

    /// Mark a cell as being resolved. Returns false if it already was.
    pub fn enter(&mut self, cell_ref: CellRef) -> bool {
        if !self.visiting.insert(cell_ref) {
            return false;
        }
        self.path.push(cell_ref);
        true
    }

    /// Pop the most recently entered cell.
    pub fn leave(&mut self, cell_ref: &CellRef) {
        if self.path.last() == Some(cell_ref) {
            self.path.pop();
        }
        self.visiting.remove(cell_ref);
    }

    /// The active resolution path, outermost first.
    pub fn path(&self) -> &[CellRef] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
