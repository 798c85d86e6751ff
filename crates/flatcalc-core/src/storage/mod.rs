//! Record storage.

mod csv;

pub use csv::{MAX_RECORD_BYTES, read_record};
