//! Formula engine API.
//!
//! - [`TokenBuffer`] - Tokenized record; the flat store references read from
//! - [`CellRef`] - Reference parsing (`B3` → column 1, row 3)
//! - [`classify`] / [`FormulaKind`] - Which evaluation path a cell takes
//! - [`Evaluator`] / [`compile`] - Evaluate cells into a [`ResultSequence`]
//! - [`format_number`] - Format values for display

mod cell_ref;
mod classify;
mod coerce;
mod condition;
mod eval;
mod format;
mod results;
mod tokenizer;

pub use cell_ref::CellRef;
pub use classify::{FormulaKind, classify};
pub use coerce::{parse_integer_prefix, parse_number};
pub use condition::{CompareOp, Condition};
pub use eval::{Evaluator, compile};
pub use format::format_number;
pub use results::ResultSequence;
pub use tokenizer::TokenBuffer;
