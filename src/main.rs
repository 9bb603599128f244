use std::collections::BTreeMap;

use anyhow::Result;

use greetings::config::Settings;
use greetings::metrics::encode_metrics;
use greetings::telemetry::init_tracing;
use greetings::GreetingService;

fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_tracing(&settings.log)?;
    tracing::debug!("Configuration loaded");

    let service = GreetingService::from_settings(&settings)?;

    let names: Vec<String> = std::env::args().skip(1).collect();
    let outcome = greet(&service, &names);

    if settings.metrics.enabled {
        match encode_metrics() {
            Ok(text) => eprint!("{}", text),
            Err(e) => tracing::error!(error = %e, "Failed to encode metrics"),
        }
    }

    outcome
}

/// One name prints a single line; several print the batch as JSON
fn greet(service: &GreetingService, names: &[String]) -> Result<()> {
    match names {
        [name] => {
            let message = service.hello(name)?;
            println!("{}", message);
        }
        _ => {
            let batch = service.hello_all(names)?;
            let sorted: BTreeMap<_, _> = batch.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        }
    }

    Ok(())
}
