//! rpngrid_engine - Postfix cell evaluation engine.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()))
    }

    fn value(grid: &Grid, row: usize, col: usize) -> Cell {
        grid.get(&CellRef::new(row, col)).cloned().unwrap()
    }

    fn rendered(grid: &Grid) -> Vec<Vec<String>> {
        grid.rows()
            .map(|r| r.iter().map(format_cell).collect())
            .collect()
    }

    #[test]
    fn test_parse_single_letter_columns() {
        let a1 = CellRef::parse("A1").unwrap();
        assert_eq!(a1.row, 0);
        assert_eq!(a1.col, 0);

        let b1 = CellRef::parse("B1").unwrap();
        assert_eq!(b1.row, 0);
        assert_eq!(b1.col, 1);

        let z1 = CellRef::parse("Z1").unwrap();
        assert_eq!(z1.col, 25);
    }

    #[test]
    fn test_parse_row_numbers() {
        assert_eq!(CellRef::parse("A10").unwrap().row, 9);
        assert_eq!(CellRef::parse("A100").unwrap().row, 99);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(CellRef::parse("b2"), Some(CellRef::new(1, 1)));
    }

    #[test]
    fn test_parse_invalid_inputs() {
        assert!(CellRef::parse("").is_none());
        assert!(CellRef::parse("123").is_none());
        assert!(CellRef::parse("ABC").is_none());
        assert!(CellRef::parse("A0").is_none());
        assert!(CellRef::parse("1A").is_none());
        assert!(CellRef::parse("A 1").is_none());
        assert!(CellRef::parse("AA1").is_none());
        assert!(CellRef::parse("A1.5").is_none());
    }

    #[test]
    fn test_literal_identity() {
        let g = evaluate_grid(grid(&[&["5", "-2.5", "1e3", "0"]]));
        assert_eq!(value(&g, 0, 0), Cell::Resolved(5.0));
        assert_eq!(value(&g, 0, 1), Cell::Resolved(-2.5));
        assert_eq!(value(&g, 0, 2), Cell::Resolved(1000.0));
        assert_eq!(value(&g, 0, 3), Cell::Resolved(0.0));
    }

    #[test]
    fn test_operand_order() {
        let g = evaluate_grid(grid(&[&["10 4 -", "1 4 /", "2 3 4 * +"]]));
        assert_eq!(value(&g, 0, 0), Cell::Resolved(6.0));
        assert_eq!(value(&g, 0, 1), Cell::Resolved(0.25));
        assert_eq!(value(&g, 0, 2), Cell::Resolved(14.0));
    }

    #[test]
    fn test_reference_to_earlier_row() {
        let g = evaluate_grid(grid(&[&["3 4 +"], &["A1 2 *"]]));
        assert_eq!(rendered(&g), vec![vec!["7"], vec!["14"]]);
    }

    #[test]
    fn test_forward_reference_is_resolved_on_demand() {
        let g = evaluate_grid(grid(&[&["B1 C1 +", "C1 2 *", "1.5"]]));
        assert_eq!(value(&g, 0, 0), Cell::Resolved(4.5));
        assert_eq!(value(&g, 0, 1), Cell::Resolved(3.0));
        assert_eq!(value(&g, 0, 2), Cell::Resolved(1.5));
    }

    #[test]
    fn test_transitive_reference_matches_direct_evaluation() {
        let g = evaluate_grid(grid(&[&["B2 1 +"], &["2 3 *", "A2 1 -"], &["A1 B2 *"]]));
        assert_eq!(value(&g, 1, 0), Cell::Resolved(6.0));
        assert_eq!(value(&g, 1, 1), Cell::Resolved(5.0));
        assert_eq!(value(&g, 0, 0), Cell::Resolved(6.0));
        assert_eq!(value(&g, 2, 0), Cell::Resolved(30.0));
    }

    #[test]
    fn test_same_reference_twice() {
        let g = evaluate_grid(grid(&[&["B1 B1 +", "5 1 +"]]));
        assert_eq!(value(&g, 0, 0), Cell::Resolved(12.0));
    }

    #[test]
    fn test_self_reference() {
        let g = evaluate_grid(grid(&[&["A1 1 +"]]));
        assert_eq!(rendered(&g), vec![vec![ERROR_SENTINEL]]);
    }

    #[test]
    fn test_direct_cycle() {
        let g = evaluate_grid(grid(&[&["B1", "A1"]]));
        assert!(matches!(value(&g, 0, 0), Cell::Error(CellError::CyclicReference(_))));
        assert!(matches!(value(&g, 0, 1), Cell::Error(CellError::CyclicReference(_))));
    }

    #[test]
    fn test_long_cycle() {
        let g = evaluate_grid(grid(&[&["B1 1 +", "C1 1 +", "D1 1 +", "E1 1 +", "A1 1 +"]]));
        assert!(g.rows().flatten().all(|c| matches!(c, Cell::Error(_))));
    }

    fn reference_chain(rows: usize, last: &str) -> Grid {
        Grid::from_rows((0..rows).map(|i| {
            if i + 1 == rows {
                vec![last.to_string()]
            } else {
                vec![format!("A{} 1 +", i + 2)]
            }
        }))
    }

    #[test]
    fn test_long_reference_chain() {
        const ROWS: usize = 100_000;
        let g = evaluate_grid(reference_chain(ROWS, "1"));
        assert_eq!(value(&g, 0, 0), Cell::Resolved(ROWS as f64));
        assert_eq!(value(&g, ROWS / 2, 0), Cell::Resolved((ROWS - ROWS / 2) as f64));
        assert_eq!(value(&g, ROWS - 1, 0), Cell::Resolved(1.0));
        assert_eq!(g.error_count(), 0);
    }

    #[test]
    fn test_long_reference_cycle() {
        const ROWS: usize = 100_000;
        let g = evaluate_grid(reference_chain(ROWS, "A1 1 +"));
        assert_eq!(g.error_count(), ROWS);
    }

    #[test]
    fn test_cell_outside_cycle_depending_on_it() {
        let g = evaluate_grid(grid(&[&["B1", "C1", "B1", "7"]]));
        assert!(matches!(value(&g, 0, 0), Cell::Error(_)));
        assert!(matches!(value(&g, 0, 1), Cell::Error(_)));
        assert!(matches!(value(&g, 0, 2), Cell::Error(_)));
        assert_eq!(value(&g, 0, 3), Cell::Resolved(7.0));
    }

    #[test]
    fn test_division_by_zero() {
        let g = evaluate_grid(grid(&[&["1 0 /", "4 0 /", "0 0 /"]]));
        assert_eq!(rendered(&g), vec![vec!["#ERR", "#ERR", "#ERR"]]);
        assert_eq!(value(&g, 0, 0), Cell::Error(CellError::NonFinite));
    }

    #[test]
    fn test_overflow_is_error() {
        let g = evaluate_grid(grid(&[&["1e308 10 *"]]));
        assert_eq!(value(&g, 0, 0), Cell::Error(CellError::NonFinite));
    }

    #[test]
    fn test_malformed_expressions() {
        let g = evaluate_grid(grid(&[&["3 4", "3 4 + 5", "", "+", "3 +"]]));
        assert_eq!(value(&g, 0, 0), Cell::Error(CellError::MalformedExpression));
        assert_eq!(value(&g, 0, 1), Cell::Error(CellError::MalformedExpression));
        assert_eq!(value(&g, 0, 2), Cell::Error(CellError::MalformedExpression));
        assert_eq!(value(&g, 0, 3), Cell::Error(CellError::MissingOperand));
        assert_eq!(value(&g, 0, 4), Cell::Error(CellError::MissingOperand));
    }

    #[test]
    fn test_unresolvable_tokens() {
        let g = evaluate_grid(grid(&[&["foo", "A9", "Z1", "#ERR", "NaN"]]));
        for col in 0..5 {
            assert!(
                matches!(value(&g, 0, col), Cell::Error(CellError::Unresolvable(_))),
                "col {col}"
            );
        }
    }

    #[test]
    fn test_ragged_rows_bounds() {
        let g = evaluate_grid(grid(&[&["1", "2", "3"], &["C1", "C2"]]));
        assert_eq!(value(&g, 1, 0), Cell::Resolved(3.0));
        assert!(matches!(value(&g, 1, 1), Cell::Error(CellError::Unresolvable(_))));
    }

    #[test]
    fn test_error_propagates_to_dependents() {
        let g = evaluate_grid(grid(&[&["1 0 /", "A1 1 +"]]));
        assert_eq!(value(&g, 0, 1), Cell::Error(CellError::Propagated(CellRef::new(0, 0))));
    }

    #[test]
    fn test_error_propagates_from_later_cell() {
        let g = evaluate_grid(grid(&[&["B1 1 +", "2 0 /"]]));
        assert_eq!(value(&g, 0, 0), Cell::Error(CellError::Propagated(CellRef::new(0, 1))));
        assert_eq!(value(&g, 0, 1), Cell::Error(CellError::NonFinite));
    }

    #[test]
    fn test_error_cells_are_sticky() {
        let mut g = grid(&[&["1 0 /"]]);
        evaluate(&mut g);
        assert!(!g.finalize(&CellRef::new(0, 0), Ok(1.0)));
        evaluate(&mut g);
        assert_eq!(value(&g, 0, 0), Cell::Error(CellError::NonFinite));
    }

    #[test]
    fn test_resolved_cells_are_read_not_reevaluated() {
        let mut g = grid(&[&["2", "A1 3 *"]]);
        g.set(&CellRef::new(0, 0), Cell::Resolved(10.0));
        evaluate(&mut g);
        assert_eq!(value(&g, 0, 1), Cell::Resolved(30.0));
        assert!(g.is_evaluated());
    }

    #[test]
    fn test_get_value_cycle_guard() {
        let mut g = grid(&[&["1 2 +"]]);
        let mut ctx = EvalContext::new();
        ctx.enter(CellRef::new(0, 0));
        assert_eq!(
            get_value("A1", &mut g, &mut ctx),
            Err(CellError::CyclicReference(CellRef::new(0, 0)))
        );
        assert_eq!(value(&g, 0, 0), Cell::Raw("1 2 +".to_string()));
    }

    #[test]
    fn test_get_value_stores_referenced_result() {
        let mut g = grid(&[&["1 2 +"]]);
        let mut ctx = EvalContext::new();
        assert_eq!(get_value("a1", &mut g, &mut ctx), Ok(3.0));
        assert_eq!(ctx.depth(), 0);
        assert_eq!(value(&g, 0, 0), Cell::Resolved(3.0));
    }

    #[test]
    fn test_evaluate_expression_standalone() {
        let mut g = Grid::new();
        assert_eq!(evaluate_expression("3 4 + 2 *", &mut g), Ok(14.0));
        assert_eq!(
            evaluate_expression("A1", &mut g),
            Err(CellError::Unresolvable("A1".to_string()))
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-14.0), "-14");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }
}
