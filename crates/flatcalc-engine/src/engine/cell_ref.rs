//! Cell reference parsing.
//!
//! A reference is a single column letter followed by a positive row number
//! (`A1`, `C12`). Only the column addresses anything: the buffer is flat, so
//! `A7` and `A1` both read index 0. The row is kept so ranges can still check
//! ordering and so references print back the way they were written.
//!
//! # Examples
//!
//! ```
//! use flatcalc_engine::engine::CellRef;
//!
//! let cell = CellRef::resolve("B3").unwrap();
//! assert_eq!(cell.col, 1);
//! assert_eq!(cell.row, 3);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{CalcError, CalcResult};

/// A reference to a cell: 0-indexed column, row number as written (1-based).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub col: usize,
    pub row: usize,
}

fn cell_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { col, row }
    }

    /// Parse a reference like `B3` into column index 1, row 3.
    ///
    /// The leading letter run must be exactly one letter and the trailing
    /// number a positive integer.
    pub fn resolve(name: &str) -> CalcResult<CellRef> {
        let invalid = || CalcError::InvalidReference(name.to_string());

        let caps = cell_ref_re().captures(name.trim()).ok_or_else(invalid)?;
        let letters = caps["letters"].as_bytes();
        let [letter] = letters else {
            return Err(invalid());
        };
        let col = (letter.to_ascii_uppercase() - b'A') as usize;

        let row = caps["numbers"].parse::<usize>().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(CellRef::new(col, row))
    }

    /// Column letter for this reference (0 -> A, 25 -> Z, anything else -> ?).
    pub fn col_letter(&self) -> char {
        (b'A'..=b'Z').nth(self.col).map_or('?', char::from)
    }
}

impl std::str::FromStr for CellRef {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::resolve(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_letter(), self.row)
    }
}
