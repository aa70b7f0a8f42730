//! Cell-level evaluation errors.
//!
//! Every variant renders as the same `#ERR` sentinel. The reason is kept for
//! logging and tests only.

use thiserror::Error;

use super::CellRef;

/// Why a cell failed to resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Token is neither a numeric literal nor an in-bounds cell reference.
    #[error("unresolvable token `{0}`")]
    Unresolvable(String),

    #[error("cyclic reference through {0}")]
    CyclicReference(CellRef),

    /// Arithmetic produced NaN or an infinity (e.g. division by zero).
    #[error("non-finite arithmetic result")]
    NonFinite,

    #[error("operator is missing an operand")]
    MissingOperand,

    /// Evaluation left zero or several values on the stack.
    #[error("malformed expression")]
    MalformedExpression,

    #[error("referenced cell {0} is in error")]
    Propagated(CellRef),
}
