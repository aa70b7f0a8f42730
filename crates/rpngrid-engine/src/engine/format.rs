use super::Cell;

/// Rendering of a cell in the error state.
pub const ERROR_SENTINEL: &str = "#ERR";

/// Format a resolved number for output.
///
/// Whole numbers print as integer literals, everything else uses the
/// shortest decimal that round-trips.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also covers -0.0
        "0".to_string()
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Format a cell for output. Raw cells print their text unchanged.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Raw(text) => text.clone(),
        Cell::Resolved(n) => format_number(*n),
        Cell::Error(_) => ERROR_SENTINEL.to_string(),
    }
}
