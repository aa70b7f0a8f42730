//! rpngrid-core - Document model + delimited-text storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Document;
pub use error::{Result, RpnGridError};

pub use rpngrid_engine::engine::{CellRef, ERROR_SENTINEL};
