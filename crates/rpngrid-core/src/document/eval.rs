use super::Document;
use rpngrid_engine::engine::{CellError, Grid, evaluate, evaluate_expression};

impl Document {
    /// Evaluate every raw cell in place.
    pub fn evaluate(&mut self) {
        evaluate(&mut self.grid);
    }

    /// Evaluate a single postfix expression as the only cell of a grid.
    ///
    /// `A1` refers to the expression itself, so it is a cycle.
    pub fn from_expression(expr: &str) -> Self {
        let mut doc = Document::from_grid(Grid::from_rows([vec![expr.trim()]]));
        doc.evaluate();
        doc
    }

    /// Evaluate an expression with no grid to reference.
    pub fn eval_standalone(expr: &str) -> Result<f64, CellError> {
        evaluate_expression(expr, &mut Grid::new())
    }
}
