//! Greeting template system.
//!
//! This module provides:
//! - Template definition with a single `{{name}}` placeholder
//! - An immutable, non-empty ordered template set
//! - A random selector that draws templates uniformly from a set
//!
//! # Example
//!
//! ```ignore
//! let selector = TemplateSelector::with_seed(TemplateSet::default(), 42);
//!
//! let template = selector.pick();
//! let greeting = template.render("Aron");
//! ```

mod selector;
mod types;

pub use selector::TemplateSelector;
pub use types::{
    Template, TemplateError, TemplateResult, TemplateSet, BUILTIN_TEMPLATES, PLACEHOLDER,
};
