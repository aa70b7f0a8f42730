//! Error types for rpngrid core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run. Cell-level failures never surface here.
#[derive(Error, Debug)]
pub enum RpnGridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RpnGridError>;
