//! Caller-side wrapper around the greeter that logs and records metrics.

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::Settings;
use crate::error::Result;
use crate::greeting::{Greeter, GreetingBatch, GreetingError, GreetingResult};
use crate::metrics::GreetingMetrics;

pub struct GreetingService<R = StdRng> {
    greeter: Greeter<R>,
    metrics_enabled: bool,
}

impl GreetingService<StdRng> {
    /// Build the service from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let greeter = Greeter::from_config(&settings.greeting)?;

        tracing::info!(
            templates = greeter.selector().templates().len(),
            seeded = settings.greeting.seed.is_some(),
            metrics = settings.metrics.enabled,
            "Greeting service initialized"
        );

        Ok(Self::new(greeter, settings.metrics.enabled))
    }
}

impl<R: Rng> GreetingService<R> {
    pub fn new(greeter: Greeter<R>, metrics_enabled: bool) -> Self {
        Self {
            greeter,
            metrics_enabled,
        }
    }

    pub fn hello(&self, name: &str) -> GreetingResult<String> {
        match self.greeter.hello(name) {
            Ok(message) => {
                tracing::debug!(name = %name, message = %message, "Greeting generated");
                if self.metrics_enabled {
                    GreetingMetrics::record_single();
                }
                Ok(message)
            }
            Err(e) => Err(self.rejected(e)),
        }
    }

    pub fn hello_all<S: AsRef<str>>(&self, names: &[S]) -> GreetingResult<GreetingBatch> {
        match self.greeter.hello_all(names) {
            Ok(batch) => {
                tracing::debug!(
                    requested = names.len(),
                    distinct = batch.len(),
                    "Greeting batch generated"
                );
                if self.metrics_enabled {
                    GreetingMetrics::record_batch(batch.len() as u64);
                }
                Ok(batch)
            }
            Err(e) => Err(self.rejected(e)),
        }
    }

    pub fn greeter(&self) -> &Greeter<R> {
        &self.greeter
    }

    fn rejected(&self, error: GreetingError) -> GreetingError {
        tracing::warn!(kind = error.kind(), error = %error, "Greeting request rejected");
        if self.metrics_enabled {
            GreetingMetrics::record_error(error.kind());
        }
        error
    }
}
