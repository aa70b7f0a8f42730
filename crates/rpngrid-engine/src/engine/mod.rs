//! Evaluation engine API.
//!
//! - [`Cell`], [`Grid`] - Cell states and grid storage
//! - [`CellRef`] - Single-letter `A1` reference parsing
//! - [`EvalContext`] - In-progress reference set used as the cycle guard
//! - [`tokenize`], [`parse_number`] - Postfix tokens and strict literals
//! - [`evaluate`], [`evaluate_cell`], [`get_value`] - Postfix evaluation
//! - [`format_number`], [`format_cell`] - Output formatting

mod cell;
mod cell_ref;
mod cycle;
mod error;
mod eval;
mod format;
mod token;

pub use cell::{Cell, Grid};
pub use cell_ref::{CellRef, MAX_COLUMNS};
pub use cycle::EvalContext;
pub use error::CellError;
pub use eval::{evaluate, evaluate_cell, evaluate_expression, evaluate_grid, get_value};
pub use format::{ERROR_SENTINEL, format_cell, format_number};
pub use token::{Operator, Token, parse_number, tokenize};
