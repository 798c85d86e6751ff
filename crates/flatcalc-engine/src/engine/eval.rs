//! Formula evaluation against the token buffer.
//!
//! [`compile`] walks every token in order, classifies it, evaluates it and
//! appends the value to a [`ResultSequence`]. The first hard error aborts the
//! pass; cells classified as [`FormulaKind::Invalid`] record 0 and the pass
//! goes on.

use log::{debug, warn};

use crate::error::{CalcError, CalcResult};
use crate::functions::{Arity, Function};

use super::cell_ref::CellRef;
use super::classify::{FormulaKind, classify};
use super::coerce::{parse_integer_prefix, parse_number};
use super::condition::Condition;
use super::results::ResultSequence;
use super::tokenizer::TokenBuffer;

/// Evaluate every cell of `buffer`, in order.
pub fn compile(buffer: &TokenBuffer) -> CalcResult<ResultSequence> {
    let evaluator = Evaluator::new(buffer);
    let mut results = ResultSequence::with_capacity(buffer.len());
    for (index, cell) in buffer.iter().enumerate() {
        evaluator.process_cell(index, cell, &mut results)?;
    }
    Ok(results)
}

/// Evaluates cells whose references read from one token buffer.
pub struct Evaluator<'a> {
    buffer: &'a TokenBuffer,
}

impl<'a> Evaluator<'a> {
    pub fn new(buffer: &'a TokenBuffer) -> Evaluator<'a> {
        Evaluator { buffer }
    }

    /// Classify and evaluate one cell, appending its value to `results`.
    pub fn process_cell(
        &self,
        index: usize,
        cell: &str,
        results: &mut ResultSequence,
    ) -> CalcResult<()> {
        let kind = classify(cell)?;
        debug!("cell {}: {:?} -> {:?}", index, cell, kind);
        let value = self.evaluate(&kind)?;
        if kind == FormulaKind::Invalid {
            warn!("cell {} contains an invalid formula: {}", index, cell);
        }
        results.push(value);
        Ok(())
    }

    pub fn evaluate(&self, kind: &FormulaKind) -> CalcResult<f64> {
        match kind {
            FormulaKind::Literal(n) => Ok(*n),
            FormulaKind::Range {
                function,
                start,
                end,
            } => self.eval_range(*function, start, end),
            FormulaKind::List { function, args } => {
                if function.arity() == Arity::Conditional {
                    self.eval_if(args)
                } else {
                    self.eval_list(*function, args)
                }
            }
            FormulaKind::SingleRef {
                function,
                reference,
            } => {
                let value = self.value_at(&CellRef::resolve(reference)?)?;
                function.apply(&[value], self.buffer.len())
            }
            FormulaKind::Invalid => Ok(0.0),
        }
    }

    fn eval_range(&self, function: Function, start: &str, end: &str) -> CalcResult<f64> {
        let from = CellRef::resolve(start)?;
        let to = CellRef::resolve(end)?;
        if from.col > to.col || from.row > to.row {
            return Err(CalcError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let cells = self
            .buffer
            .slice(from.col, to.col)
            .ok_or_else(|| self.out_of_bounds(&to))?;
        let args = cells
            .iter()
            .map(|cell| coerce(cell))
            .collect::<CalcResult<Vec<f64>>>()?;

        function.apply(&args, self.buffer.len())
    }

    fn eval_list(&self, function: Function, args: &[String]) -> CalcResult<f64> {
        let [first, second] = args else {
            return Err(CalcError::ArgumentCount {
                function: function.name(),
                expected: "2",
                actual: args.len(),
            });
        };

        let lhs = self.value_at(&CellRef::resolve(first)?)?;
        let rhs = match parse_number(second) {
            Some(n) => n,
            None => self.value_at(&CellRef::resolve(second)?)?,
        };

        function.apply(&[lhs, rhs], self.buffer.len())
    }

    fn eval_if(&self, args: &[String]) -> CalcResult<f64> {
        let [condition, when_true, when_false] = args else {
            return Err(CalcError::ArgumentCount {
                function: "IF",
                expected: "3",
                actual: args.len(),
            });
        };

        let holds = Condition::parse(condition)?.holds();
        let branch = Function::choose(holds, when_true, when_false);
        parse_integer_prefix(branch)
            .ok_or_else(|| CalcError::NonNumericBranch(branch.to_string()))
    }

    /// Numeric value of the token a reference's column points at.
    fn value_at(&self, cell: &CellRef) -> CalcResult<f64> {
        let token = self
            .buffer
            .get(cell.col)
            .ok_or_else(|| self.out_of_bounds(cell))?;
        coerce(token)
    }

    fn out_of_bounds(&self, cell: &CellRef) -> CalcError {
        CalcError::OutOfBounds {
            reference: cell.to_string(),
            index: cell.col,
            len: self.buffer.len(),
        }
    }
}

fn coerce(token: &str) -> CalcResult<f64> {
    parse_number(token).ok_or_else(|| CalcError::NumericCoercion(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(tokens: &[&str]) -> TokenBuffer {
        TokenBuffer::from_tokens(tokens.iter().copied())
    }

    fn run(tokens: &[&str]) -> CalcResult<Vec<f64>> {
        compile(&buffer(tokens)).map(ResultSequence::into_values)
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(run(&["1", "-2", "30"]).unwrap(), vec![1.0, -2.0, 30.0]);
    }

    #[test]
    fn test_sum_and_avg_over_range() {
        assert_eq!(
            run(&["1", "2", "3", "=SUM(A1:C1)", "=AVG(A1:C1)"]).unwrap(),
            vec![1.0, 2.0, 3.0, 6.0, 2.0]
        );
    }

    #[test]
    fn test_range_start_after_end_fails() {
        assert_eq!(
            run(&["1", "2", "=SUM(B1:A1)"]),
            Err(CalcError::InvalidRange {
                start: "B1".to_string(),
                end: "A1".to_string(),
            })
        );
    }

    #[test]
    fn test_range_row_order_is_checked() {
        assert!(matches!(
            run(&["1", "2", "=SUM(A2:B1)"]),
            Err(CalcError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_range_ignores_rows_for_addressing() {
        assert_eq!(run(&["4", "6", "=SUM(A7:B9)"]).unwrap()[2], 10.0);
    }

    #[test]
    fn test_range_over_formula_cell_fails() {
        assert_eq!(
            run(&["1", "=SUM(A1:A1)", "=SUM(A1:B1)"]),
            Err(CalcError::NumericCoercion("=SUM(A1:A1)".to_string()))
        );
    }

    #[test]
    fn test_range_out_of_bounds() {
        assert!(matches!(
            run(&["1", "=SUM(A1:Z1)"]),
            Err(CalcError::OutOfBounds { index: 25, len: 2, .. })
        ));
    }

    #[test]
    fn test_list_with_numeric_operand() {
        assert_eq!(run(&["7", "=MOD(A1,3)"]).unwrap()[1], 1.0);
        assert_eq!(run(&["2", "=POW(A1,8)"]).unwrap()[1], 256.0);
    }

    #[test]
    fn test_list_with_two_references() {
        assert_eq!(
            run(&["10", "20", "=MAX(A1,B1)", "=MIN(A1,B1)", "=AVG(A1,B1)"]).unwrap(),
            vec![10.0, 20.0, 20.0, 10.0, 15.0]
        );
    }

    #[test]
    fn test_list_wrong_argument_count() {
        assert!(matches!(
            run(&["1", "=SUM(A1,A1,A1)"]),
            Err(CalcError::ArgumentCount { function: "SUM", actual: 3, .. })
        ));
    }

    #[test]
    fn test_if_compares_indices() {
        assert_eq!(run(&["9", "1", "=IF(A1>B1,5,7)"]).unwrap()[2], 7.0);
        assert_eq!(run(&["9", "1", "=IF(A1<B1,5,7)"]).unwrap()[2], 5.0);
    }

    #[test]
    fn test_if_branch_must_be_integer() {
        assert_eq!(
            run(&["1", "=IF(A1=A1,yes,7)"]),
            Err(CalcError::NonNumericBranch("yes".to_string()))
        );
    }

    #[test]
    fn test_if_malformed_condition() {
        assert!(matches!(
            run(&["1", "=IF(A1~B1,1,2)"]),
            Err(CalcError::MalformedCondition(_))
        ));
    }

    #[test]
    fn test_single_reference() {
        assert_eq!(
            run(&["5", "=SUM(A1)", "=COUNT(A1)"]).unwrap(),
            vec![5.0, 5.0, 1.0]
        );
    }

    #[test]
    fn test_invalid_records_zero_and_continues() {
        assert_eq!(
            run(&["3", "=FOO()", "=SUM(A1:A1)"]).unwrap(),
            vec![3.0, 0.0, 3.0]
        );
    }

    #[test]
    fn test_first_error_aborts_pass() {
        assert_eq!(
            run(&["1", "oops", "=FOO(A1:A1)"]),
            Err(CalcError::InvalidCellContent("oops".to_string()))
        );
    }

    #[test]
    fn test_wide_integer_literal_and_branch() {
        assert_eq!(run(&["99999999999999999999", "1"]).unwrap(), vec![1e20, 1.0]);
        assert_eq!(
            run(&["1", "=IF(A1<B1,99999999999999999999,2)"]).unwrap()[1],
            1e20
        );
    }

    #[test]
    fn test_list_reference_to_formula_cell_fails() {
        assert_eq!(
            run(&["1", "=SUM(A1)", "=MAX(A1,B1)"]),
            Err(CalcError::NumericCoercion("=SUM(A1)".to_string()))
        );
    }

    #[test]
    fn test_single_reference_out_of_bounds() {
        assert_eq!(
            run(&["1", "=SUM(Z1)"]),
            Err(CalcError::OutOfBounds {
                reference: "Z1".to_string(),
                index: 25,
                len: 2,
            })
        );
    }

    #[test]
    fn test_list_reference_out_of_bounds() {
        assert!(matches!(
            run(&["1", "=MOD(C1,2)"]),
            Err(CalcError::OutOfBounds { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn test_negative_zero_result_prints_as_zero() {
        let results = compile(&buffer(&["-4", "=MOD(A1,2)"])).unwrap();
        assert_eq!(results.to_string(), "[-4, 0]");
    }

    #[test]
    fn test_binary_over_range_is_argument_count() {
        assert!(matches!(
            run(&["1", "2", "3", "=MAX(A1:C1)"]),
            Err(CalcError::ArgumentCount { function: "MAX", .. })
        ));
    }
}
