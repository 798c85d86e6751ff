//! Built-in spreadsheet functions and their metadata.
//!
//! Conventions:
//! - Formula-facing names are ALL CAPS (`SUM`, `AVG`); lookup upper-cases
//!   its input first.
//! - If you add a function, add a [`Function`] variant, a `BUILTINS` entry and
//!   its arm in [`Function::apply`].

use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// How many arguments a function takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Any number of numeric arguments.
    Variadic,
    /// Exactly two numeric arguments.
    Binary,
    /// Condition, true branch, false branch. Only usable as a list formula.
    Conditional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sum,
    Avg,
    Stdev,
    Max,
    Min,
    Count,
    If,
    Mod,
    Pow,
}

pub struct Builtin {
    pub function: Function,
    pub sheet_name: &'static str,
    pub arity: Arity,
    pub description: &'static str,
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        function: Function::Sum,
        sheet_name: "SUM",
        arity: Arity::Variadic,
        description: "Sum of the arguments, 0 when empty",
    },
    Builtin {
        function: Function::Avg,
        sheet_name: "AVG",
        arity: Arity::Variadic,
        description: "Arithmetic mean of the arguments",
    },
    Builtin {
        function: Function::Stdev,
        sheet_name: "STDEV",
        arity: Arity::Variadic,
        description: "Population standard deviation, divided by the buffer length",
    },
    Builtin {
        function: Function::Max,
        sheet_name: "MAX",
        arity: Arity::Binary,
        description: "Larger of two values",
    },
    Builtin {
        function: Function::Min,
        sheet_name: "MIN",
        arity: Arity::Binary,
        description: "Smaller of two values",
    },
    Builtin {
        function: Function::Count,
        sheet_name: "COUNT",
        arity: Arity::Variadic,
        description: "Number of arguments",
    },
    Builtin {
        function: Function::If,
        sheet_name: "IF",
        arity: Arity::Conditional,
        description: "True or false branch depending on a reference comparison",
    },
    Builtin {
        function: Function::Mod,
        sheet_name: "MOD",
        arity: Arity::Binary,
        description: "Remainder of a divided by b",
    },
    Builtin {
        function: Function::Pow,
        sheet_name: "POW",
        arity: Arity::Binary,
        description: "a raised to the power b",
    },
];

impl Function {
    /// Look up a function by its formula name, case-insensitively.
    pub fn lookup(name: &str) -> CalcResult<Function> {
        let upper = name.trim().to_ascii_uppercase();
        BUILTINS
            .iter()
            .find(|b| b.sheet_name == upper)
            .map(|b| b.function)
            .ok_or_else(|| CalcError::UnknownFunction(name.to_string()))
    }

    fn builtin(self) -> &'static Builtin {
        BUILTINS
            .iter()
            .find(|b| b.function == self)
            .expect("every function has a BUILTINS entry")
    }

    pub fn name(self) -> &'static str {
        self.builtin().sheet_name
    }

    pub fn arity(self) -> Arity {
        self.builtin().arity
    }

    /// Apply a numeric function to its arguments.
    ///
    /// `population` is the length of the whole token buffer; STDEV divides by
    /// it instead of by `args.len()`.
    pub fn apply(self, args: &[f64], population: usize) -> CalcResult<f64> {
        match self {
            Function::Sum => Ok(args.iter().sum()),
            Function::Avg => {
                if args.is_empty() {
                    return Err(CalcError::DivideByZero("AVG"));
                }
                Ok(args.iter().sum::<f64>() / args.len() as f64)
            }
            Function::Stdev => {
                if args.is_empty() || population == 0 {
                    return Err(CalcError::DivideByZero("STDEV"));
                }
                let n = population as f64;
                let mean = args.iter().sum::<f64>() / n;
                let variance = args.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
                Ok(variance.sqrt())
            }
            Function::Count => Ok(args.len() as f64),
            Function::Max => self.binary(args).map(|(a, b)| a.max(b)),
            Function::Min => self.binary(args).map(|(a, b)| a.min(b)),
            Function::Mod => {
                let (a, b) = self.binary(args)?;
                if b == 0.0 {
                    return Err(CalcError::DivideByZero("MOD"));
                }
                Ok(a % b)
            }
            Function::Pow => self.binary(args).map(|(a, b)| a.powf(b)),
            Function::If => Err(CalcError::ArgumentCount {
                function: "IF",
                expected: "condition, true value, false value",
                actual: args.len(),
            }),
        }
    }

    /// Pick the true or false branch. The caller coerces the result.
    pub fn choose<'a>(condition: bool, when_true: &'a str, when_false: &'a str) -> &'a str {
        if condition { when_true } else { when_false }
    }

    fn binary(self, args: &[f64]) -> CalcResult<(f64, f64)> {
        match args {
            [a, b] => Ok((*a, *b)),
            _ => Err(CalcError::ArgumentCount {
                function: self.name(),
                expected: "2",
                actual: args.len(),
            }),
        }
    }
}

impl FromStr for Function {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::lookup(s)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
