//! Greeting formatter

use rand::rngs::StdRng;
use rand::Rng;

use super::types::{GreetingBatch, GreetingError, GreetingResult};
use crate::config::GreetingConfig;
use crate::template::{TemplateResult, TemplateSelector, TemplateSet};

/// Produces greetings by rendering names into randomly selected templates.
///
/// Both operations are all-or-nothing: on error no greeting is returned.
#[derive(Debug)]
pub struct Greeter<R = StdRng> {
    selector: TemplateSelector<R>,
}

impl Greeter<StdRng> {
    /// Create a greeter over the built-in templates, seeded from the clock
    pub fn new() -> Self {
        Self::with_selector(TemplateSelector::new(TemplateSet::default()))
    }

    /// Create a greeter from configuration.
    ///
    /// Configured templates replace the built-in ones; a configured seed
    /// makes the draws reproducible.
    pub fn from_config(config: &GreetingConfig) -> TemplateResult<Self> {
        let templates = match &config.templates {
            Some(texts) => TemplateSet::from_texts(texts.iter().cloned())?,
            None => TemplateSet::default(),
        };

        let selector = match config.seed {
            Some(seed) => TemplateSelector::with_seed(templates, seed),
            None => TemplateSelector::new(templates),
        };

        Ok(Self::with_selector(selector))
    }
}

impl Default for Greeter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Greeter<R> {
    pub fn with_selector(selector: TemplateSelector<R>) -> Self {
        Self { selector }
    }

    /// Greet a single person
    pub fn hello(&self, name: &str) -> GreetingResult<String> {
        if name.is_empty() {
            return Err(GreetingError::empty_name());
        }

        Ok(self.selector.pick().render(name))
    }

    /// Greet every name, drawing a template independently for each
    pub fn hello_all<S: AsRef<str>>(&self, names: &[S]) -> GreetingResult<GreetingBatch> {
        if names.is_empty() {
            return Err(GreetingError::empty_names());
        }

        if let Some(index) = names.iter().position(|name| name.as_ref().is_empty()) {
            return Err(GreetingError::InvalidElement { index });
        }

        let mut batch = GreetingBatch::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            batch.insert(name.to_string(), self.selector.pick().render(name));
        }

        Ok(batch)
    }

    pub fn selector(&self) -> &TemplateSelector<R> {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Greeter {
        Greeter::with_selector(TemplateSelector::with_seed(TemplateSet::default(), 42))
    }

    #[test]
    fn test_hello_empty() {
        let greeter = seeded();
        assert_eq!(
            greeter.hello(""),
            Err(GreetingError::EmptyInput("name is empty".to_string()))
        );
    }

    #[test]
    fn test_hello_renders_one_of_the_templates() {
        let greeter = seeded();
        let message = greeter.hello("Aron").unwrap();

        let expected: Vec<String> = TemplateSet::default()
            .iter()
            .map(|t| t.render("Aron"))
            .collect();
        assert!(expected.contains(&message), "unexpected greeting {message:?}");
    }

    #[test]
    fn test_hello_all_empty() {
        let greeter = seeded();
        let names: [&str; 0] = [];
        assert_eq!(
            greeter.hello_all(&names),
            Err(GreetingError::EmptyInput("names are empty".to_string()))
        );
    }

    #[test]
    fn test_hello_all_reports_first_empty_index() {
        let greeter = seeded();
        assert_eq!(
            greeter.hello_all(&["a", "", "b", ""]),
            Err(GreetingError::InvalidElement { index: 1 })
        );
    }

    #[test]
    fn test_hello_all_collapses_duplicates() {
        let greeter = seeded();
        let batch = greeter.hello_all(&["x", "x"]).unwrap();
        assert_eq!(batch.len(), 1);
        assert!(batch["x"].contains('x'));
    }

    #[test]
    fn test_hello_all_accepts_owned_strings() {
        let greeter = seeded();
        let names = vec!["foo".to_string(), "bar".to_string()];
        let batch = greeter.hello_all(&names).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_from_config_custom_templates() {
        let config = GreetingConfig {
            templates: Some(vec!["Ahoy {{name}}".to_string()]),
            seed: Some(3),
        };
        let greeter = Greeter::from_config(&config).unwrap();
        assert_eq!(greeter.hello("Ann").unwrap(), "Ahoy Ann");
    }

    #[test]
    fn test_from_config_rejects_empty_templates() {
        let config = GreetingConfig {
            templates: Some(vec![]),
            seed: None,
        };
        assert!(Greeter::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_defaults() {
        let greeter = Greeter::from_config(&GreetingConfig::default()).unwrap();
        assert_eq!(greeter.selector().templates(), &TemplateSet::default());
    }
}
