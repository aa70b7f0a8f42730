//! Postfix evaluation and reference resolution.
//!
//! [`evaluate`] walks the grid row-major and resolves every raw cell.
//! Operands that name other cells are resolved through [`get_value`], which
//! evaluates the referenced cell on demand and stores its result so later
//! reads never re-evaluate it.

use super::cell::{Cell, Grid};
use super::cycle::EvalContext;
use super::error::CellError;
use super::token::{Token, parse_number, tokenize};
use super::CellRef;

/// Evaluate every raw cell of the grid in place.
pub fn evaluate(grid: &mut Grid) {
    for row in 0..grid.row_count() {
        for col in 0..grid.col_count(row) {
            let cell_ref = CellRef::new(row, col);
            let text = match grid.get(&cell_ref) {
                Some(Cell::Raw(text)) => text.clone(),
                _ => continue,
            };

            let mut ctx = EvalContext::new();
            let result = evaluate_cell(&tokenize(&text), grid, &mut ctx);
            if let Err(e) = &result {
                tracing::debug!(cell = %cell_ref, error = %e, "cell failed to evaluate");
            }
            grid.finalize(&cell_ref, result);
        }
    }

    tracing::info!(
        rows = grid.row_count(),
        failed = grid.error_count(),
        "grid evaluated"
    );
}

/// Owning variant of [`evaluate`].
pub fn evaluate_grid(mut grid: Grid) -> Grid {
    evaluate(&mut grid);
    grid
}

/// Evaluate a standalone postfix expression against a grid.
pub fn evaluate_expression(text: &str, grid: &mut Grid) -> Result<f64, CellError> {
    let mut ctx = EvalContext::new();
    evaluate_cell(&tokenize(text), grid, &mut ctx)
}

/// Evaluate one tokenized postfix expression.
///
/// Operators apply as `left OP right` where `right` is the most recently
/// pushed operand. Exactly one value must remain once all tokens are consumed.
pub fn evaluate_cell(
    tokens: &[Token],
    grid: &mut Grid,
    ctx: &mut EvalContext,
) -> Result<f64, CellError> {
    run(Frame::new(None, tokens.to_vec()), grid, ctx)
}

/// Resolve an operand token to a number.
///
/// Numeric literals are returned as-is. Anything else must be an in-bounds
/// cell reference that is not already on the current resolution path.
pub fn get_value(token: &str, grid: &mut Grid, ctx: &mut EvalContext) -> Result<f64, CellError> {
    match resolve_operand(token, grid, ctx)? {
        Operand::Value(n) => Ok(n),
        Operand::Cell(cell_ref, text) => {
            ctx.enter(cell_ref);
            run(Frame::new(Some(cell_ref), tokenize(&text)), grid, ctx)
        }
    }
}

/// A resolved operand, or a raw cell that must be evaluated first.
enum Operand {
    Value(f64),
    Cell(CellRef, String),
}

fn resolve_operand(token: &str, grid: &Grid, ctx: &EvalContext) -> Result<Operand, CellError> {
    if let Some(n) = parse_number(token) {
        return Ok(Operand::Value(n));
    }

    let cell_ref = CellRef::parse(token).ok_or_else(|| CellError::Unresolvable(token.to_string()))?;
    if ctx.contains(&cell_ref) {
        tracing::trace!(cell = %cell_ref, depth = ctx.depth(), "reference cycle");
        return Err(CellError::CyclicReference(cell_ref));
    }

    match grid.get(&cell_ref) {
        None => Err(CellError::Unresolvable(token.to_string())),
        Some(Cell::Resolved(n)) => Ok(Operand::Value(*n)),
        Some(Cell::Error(_)) => Err(CellError::Propagated(cell_ref)),
        Some(Cell::Raw(text)) => Ok(Operand::Cell(cell_ref, text.clone())),
    }
}

enum Step {
    Continue,
    Descend(CellRef, String),
    Done(Result<f64, CellError>),
}

/// One postfix evaluation in progress.
struct Frame {
    /// The cell being evaluated, None for a bare expression
    cell: Option<CellRef>,
    tokens: Vec<Token>,
    next: usize,
    stack: Vec<f64>,
}

impl Frame {
    fn new(cell: Option<CellRef>, tokens: Vec<Token>) -> Frame {
        Frame {
            cell,
            stack: Vec::with_capacity(tokens.len()),
            tokens,
            next: 0,
        }
    }

    /// Consume one token.
    fn step(&mut self, grid: &Grid, ctx: &EvalContext) -> Step {
        let Some(token) = self.tokens.get(self.next) else {
            return Step::Done(match self.stack.as_slice() {
                [value] => Ok(*value),
                _ => Err(CellError::MalformedExpression),
            });
        };
        self.next += 1;

        match token {
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
                    return Step::Done(Err(CellError::MissingOperand));
                };
                let value = op.apply(left, right);
                if !value.is_finite() {
                    return Step::Done(Err(CellError::NonFinite));
                }
                self.stack.push(value);
                Step::Continue
            }
            Token::Operand(text) => match resolve_operand(text, grid, ctx) {
                Ok(Operand::Value(n)) => {
                    self.stack.push(n);
                    Step::Continue
                }
                Ok(Operand::Cell(cell_ref, text)) => Step::Descend(cell_ref, text),
                Err(e) => Step::Done(Err(e)),
            },
        }
    }
}

/// Drive `root` to completion.
///
/// Referenced raw cells are evaluated on an explicit frame stack rather than
/// the call stack, so reference chains may be as long as the grid.
fn run(mut root: Frame, grid: &mut Grid, ctx: &mut EvalContext) -> Result<f64, CellError> {
    let mut frames: Vec<Frame> = Vec::new();

    loop {
        let frame = frames.last_mut().unwrap_or(&mut root);
        let mut result = match frame.step(grid, ctx) {
            Step::Continue => continue,
            Step::Descend(cell_ref, text) => {
                tracing::trace!(cell = %cell_ref, depth = ctx.depth(), "resolving reference");
                ctx.enter(cell_ref);
                frames.push(Frame::new(Some(cell_ref), tokenize(&text)));
                continue;
            }
            Step::Done(result) => result,
        };

        // An error finishes every enclosing frame as well.
        loop {
            let Some(done) = frames.pop() else {
                return close(root.cell, result, grid, ctx);
            };
            result = close(done.cell, result, grid, ctx);
            let parent = frames.last_mut().unwrap_or(&mut root);
            match result {
                Ok(value) => {
                    parent.stack.push(value);
                    break;
                }
                Err(_) => continue,
            }
        }
    }
}

/// Store a finished cell's result and translate it for the referencing cell.
fn close(
    cell: Option<CellRef>,
    result: Result<f64, CellError>,
    grid: &mut Grid,
    ctx: &mut EvalContext,
) -> Result<f64, CellError> {
    let Some(cell_ref) = cell else {
        return result;
    };
    ctx.leave(&cell_ref);
    grid.finalize(&cell_ref, result.clone());

    result.map_err(|e| match e {
        CellError::CyclicReference(_) => e,
        _ => CellError::Propagated(cell_ref),
    })
}
