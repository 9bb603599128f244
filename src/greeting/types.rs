//! Greeting types and error definitions

use std::collections::HashMap;

use thiserror::Error;

/// Greeting-specific error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetingError {
    /// The required input was absent altogether
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A batch contained an empty name at `index`
    #[error("Invalid element: names[{index}] is empty")]
    InvalidElement { index: usize },
}

impl GreetingError {
    pub(crate) fn empty_name() -> Self {
        Self::EmptyInput("name is empty".to_string())
    }

    pub(crate) fn empty_names() -> Self {
        Self::EmptyInput("names are empty".to_string())
    }

    /// Short label used for metrics and structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput(_) => "empty_input",
            Self::InvalidElement { .. } => "invalid_element",
        }
    }
}

/// Result type for greeting operations
pub type GreetingResult<T> = Result<T, GreetingError>;

/// Greetings keyed by name; duplicate names keep the last greeting
pub type GreetingBatch = HashMap<String, String>;
