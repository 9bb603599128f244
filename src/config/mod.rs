mod settings;

pub use settings::{GreetingConfig, LogConfig, LogFormat, MetricsConfig, Settings};
