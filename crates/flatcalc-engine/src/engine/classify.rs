//! Deciding how a single cell should be evaluated.
//!
//! A cell is either an integer literal or a formula `=FUNC(payload)`, possibly
//! wrapped in double quotes. The payload shape picks the evaluation path:
//!
//! - contains `:` → range formula, `SUM(A1:C1)`
//! - contains `,` → list formula, `MOD(A1,3)` or `IF(A1>B1,1,2)`
//! - exactly two characters → single reference, `COUNT(B1)`
//! - anything else → invalid, recorded as 0
//!
//! The checks run in that order, so `SUM(A1:B1,C1)` is a range formula.

use crate::error::{CalcError, CalcResult};
use crate::functions::Function;

use super::coerce::parse_integer_prefix;

/// The evaluation path chosen for a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum FormulaKind {
    Literal(f64),
    Range {
        function: Function,
        start: String,
        end: String,
    },
    List {
        function: Function,
        args: Vec<String>,
    },
    SingleRef {
        function: Function,
        reference: String,
    },
    Invalid,
}

/// Classify one raw token.
///
/// Function names are only looked up once the payload has a usable shape, so
/// `=FOO()` is `Invalid` while `=FOO(A1:B1)` fails with an unknown function.
pub fn classify(raw: &str) -> CalcResult<FormulaKind> {
    let cell = strip_formula_quotes(raw);

    let Some(formula) = cell.strip_prefix('=') else {
        return parse_integer_prefix(cell)
            .map(FormulaKind::Literal)
            .ok_or_else(|| CalcError::InvalidCellContent(raw.to_string()));
    };

    // IF conditions may themselves contain '=', so the name cannot be taken
    // from the last '='.
    let name = if cell.starts_with("=IF") {
        "IF"
    } else {
        function_name(formula)
    };

    let Some(payload) = payload(cell) else {
        return Ok(FormulaKind::Invalid);
    };

    if let Some((start, end)) = payload.split_once(':') {
        return Ok(FormulaKind::Range {
            function: Function::lookup(name)?,
            start: start.trim().to_string(),
            end: end.trim().to_string(),
        });
    }

    if payload.contains(',') {
        return Ok(FormulaKind::List {
            function: Function::lookup(name)?,
            args: payload.split(',').map(|a| a.trim().to_string()).collect(),
        });
    }

    if payload.chars().count() == 2 {
        return Ok(FormulaKind::SingleRef {
            function: Function::lookup(name)?,
            reference: payload.to_string(),
        });
    }

    Ok(FormulaKind::Invalid)
}

/// `"=SUM(A1:B1)"` → `=SUM(A1:B1)`. Quoted non-formulas are left alone.
fn strip_formula_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .filter(|inner| inner.starts_with('='))
        .unwrap_or(raw)
}

/// Text after the last '=' and before the following '('.
fn function_name(formula: &str) -> &str {
    let after_eq = formula.rsplit('=').next().unwrap_or(formula);
    after_eq.split('(').next().unwrap_or(after_eq).trim()
}

/// Text between the first '(' and the last ')'.
fn payload(cell: &str) -> Option<&str> {
    let open = cell.find('(')?;
    let close = cell.rfind(')')?;
    (close > open).then(|| &cell[open + 1..close])
}
