//! Error types for flatcalc core.

use std::path::PathBuf;

use thiserror::Error;

use flatcalc_engine::CalcError;

/// Errors from loading or compiling a document.
#[derive(Error, Debug)]
pub enum FlatcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Provided file is not a .csv file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("The file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

pub type Result<T> = std::result::Result<T, FlatcalcError>;
