//! Storage for delimited-text tables.

mod csv;
mod writer;

pub use csv::{DELIMITER, parse_csv, parse_csv_str};
pub use writer::{render_csv, write_csv, write_csv_to};
