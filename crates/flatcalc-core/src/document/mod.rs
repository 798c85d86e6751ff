//! Document state and logic.

mod state;

pub use state::Document;
