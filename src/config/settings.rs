use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GreetingConfig {
    /// Templates replacing the built-in ones, each with one {{name}} slot
    #[serde(default)]
    pub templates: Option<Vec<String>>,
    /// Fixed seed for reproducible output (time-seeded when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Record Prometheus counters and dump them on exit
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_metrics_enabled() -> bool {
    false
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("log.level", default_log_level())?
            .set_default("log.format", "plain")?
            .set_default("metrics.enabled", default_metrics_enabled())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // GREETINGS_GREETING_SEED, GREETINGS_LOG_LEVEL, GREETINGS_METRICS_ENABLED, etc.
            // Templates contain commas, so lists are split on ';'
            .add_source(
                Environment::with_prefix("GREETINGS")
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(";")
                    .with_list_parse_key("greeting.templates"),
            );

        Self::from_config(builder.build()?)
    }

    /// Deserialize settings from an already assembled configuration
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
        }
    }
}
