//! IF conditions: `<ref> <operator> <ref>`.
//!
//! The comparison is made between the two column indices, not the values
//! stored at them. `A1 < B1` is always true, whatever A1 and B1 hold.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{CalcError, CalcResult};

use super::cell_ref::CellRef;

fn condition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z][0-9]+)\s*([=<>!]+)\s*([A-Za-z][0-9]+)\s*$")
            .expect("condition regex must compile")
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    Gt,
    Ge,
    Le,
    Ne,
}

impl CompareOp {
    fn parse(op: &str) -> Option<CompareOp> {
        match op {
            "=" => Some(CompareOp::Eq),
            "<" => Some(CompareOp::Lt),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            "<=" => Some(CompareOp::Le),
            "!=" => Some(CompareOp::Ne),
            _ => None,
        }
    }

    pub fn test(self, lhs: usize, rhs: usize) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Ge => lhs >= rhs,
            CompareOp::Le => lhs <= rhs,
            CompareOp::Ne => lhs != rhs,
        }
    }
}

/// A parsed IF condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    pub lhs: CellRef,
    pub op: CompareOp,
    pub rhs: CellRef,
}

impl Condition {
    pub fn parse(text: &str) -> CalcResult<Condition> {
        let malformed = || CalcError::MalformedCondition(text.to_string());
        let caps = condition_re().captures(text).ok_or_else(malformed)?;
        let op = CompareOp::parse(&caps[2]).ok_or_else(malformed)?;
        Ok(Condition {
            lhs: CellRef::resolve(&caps[1])?,
            op,
            rhs: CellRef::resolve(&caps[3])?,
        })
    }

    pub fn holds(&self) -> bool {
        self.op.test(self.lhs.col, self.rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compares_column_indices() {
        assert!(!Condition::parse("A1>B1").unwrap().holds());
        assert!(Condition::parse("A1<B1").unwrap().holds());
        assert!(Condition::parse("C5 >= C1").unwrap().holds());
        assert!(Condition::parse("A1=A9").unwrap().holds());
        assert!(Condition::parse("A1!=B1").unwrap().holds());
        assert!(!Condition::parse("B1<=A1").unwrap().holds());
    }

    #[test]
    fn test_unknown_operator_is_malformed() {
        for text in ["A1==B1", "A1<>B1", "A1=>B1", "A1!B1"] {
            assert_eq!(
                Condition::parse(text),
                Err(CalcError::MalformedCondition(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        for text in ["A1", "A1>", "1>2", "A1>B1>C1", ""] {
            assert!(
                matches!(Condition::parse(text), Err(CalcError::MalformedCondition(_))),
                "{text}"
            );
        }
    }
}
