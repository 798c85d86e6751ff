//! Error types for formula evaluation.

use thiserror::Error;

/// Errors that abort a compilation pass.
///
/// Cells whose formula cannot be structurally parsed are not errors: they are
/// recorded as 0 and the pass continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("No tokens found in input")]
    Tokenization,

    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Cell has invalid content: {0}")]
    InvalidCellContent(String),

    #[error("Column numbers should go from low to high: {start}:{end}")]
    InvalidRange { start: String, end: String },

    #[error("Value is not numeric: {0}")]
    NumericCoercion(String),

    #[error("IF condition wrongly specified: {0}")]
    MalformedCondition(String),

    #[error("IF branch is not an integer: {0}")]
    NonNumericBranch(String),

    #[error("Division by zero in {0}")]
    DivideByZero(&'static str),

    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Reference {reference} points at index {index}, but only {len} cells exist")]
    OutOfBounds {
        reference: String,
        index: usize,
        len: usize,
    },
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
