//! Greeting formatting.
//!
//! Validates caller-supplied names and renders them into randomly chosen
//! templates, either one at a time or as a batch keyed by name.

mod formatter;
mod types;

pub use formatter::Greeter;
pub use types::{GreetingBatch, GreetingError, GreetingResult};
