//! Template types and error definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder substituted with the greeted name
pub const PLACEHOLDER: &str = "{{name}}";

/// Templates used when none are configured
pub const BUILTIN_TEMPLATES: [&str; 3] = [
    "Hi, {{name}}, Good morning",
    "Howdy, {{name}}",
    "How are you, {{name}}",
];

/// Template-specific error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template set is empty")]
    EmptySet,

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A greeting template containing exactly one `{{name}}` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    text: String,
}

impl Template {
    /// Parse and validate a template
    pub fn new(text: impl Into<String>) -> TemplateResult<Self> {
        let text = text.into();

        match text.matches(PLACEHOLDER).count() {
            1 => Ok(Self { text }),
            0 => Err(TemplateError::InvalidTemplate(format!(
                "'{}' has no {} placeholder",
                text, PLACEHOLDER
            ))),
            n => Err(TemplateError::InvalidTemplate(format!(
                "'{}' has {} placeholders, expected exactly one",
                text, n
            ))),
        }
    }

    /// Substitute the name into the placeholder
    pub fn render(&self, name: &str) -> String {
        self.text.replacen(PLACEHOLDER, name, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(text: String) -> TemplateResult<Self> {
        Self::new(text)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.text
    }
}

/// Immutable, non-empty ordered sequence of templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Create a template set, rejecting an empty sequence
    pub fn new(templates: Vec<Template>) -> TemplateResult<Self> {
        if templates.is_empty() {
            return Err(TemplateError::EmptySet);
        }

        Ok(Self { templates })
    }

    /// Parse every text as a template and build a set from them
    pub fn from_texts<I, S>(texts: I) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = texts
            .into_iter()
            .map(Template::new)
            .collect::<TemplateResult<Vec<_>>>()?;

        Self::new(templates)
    }

    /// Number of templates, always at least one
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Never true: a set holds at least one template
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn as_slice(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Position of a template within the set
    pub fn position(&self, template: &Template) -> Option<usize> {
        self.templates.iter().position(|t| t == template)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES
                .iter()
                .map(|text| Template {
                    text: (*text).to_string(),
                })
                .collect(),
        }
    }
}
