//! flatcalc-core - document model + record storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Document;
pub use error::{FlatcalcError, Result};

pub use flatcalc_engine::engine::{CellRef, ResultSequence, TokenBuffer};
pub use flatcalc_engine::functions::BUILTINS;
