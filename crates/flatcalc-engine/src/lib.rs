//! flatcalc-engine - formula evaluation over a flat token buffer.

pub mod engine;
pub mod error;
pub mod functions;

pub use error::{CalcError, CalcResult};
