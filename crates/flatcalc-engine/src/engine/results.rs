//! Ordered per-cell results of a compilation pass.

use std::fmt;

use super::format::format_number;

/// One computed value per processed cell, in processing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSequence {
    values: Vec<f64>,
}

impl ResultSequence {
    pub fn new() -> ResultSequence {
        ResultSequence::default()
    }

    pub fn with_capacity(capacity: usize) -> ResultSequence {
        ResultSequence {
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Each value formatted for display, one string per cell.
    pub fn formatted(&self) -> impl Iterator<Item = String> + '_ {
        self.values.iter().map(|v| format_number(*v))
    }
}

impl fmt::Display for ResultSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.formatted().collect::<Vec<_>>().join(", "))
    }
}
