// Infrastructure (shared components)
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain (greeting generation)
pub mod greeting;
pub mod template;

// Application
pub mod service;

pub use greeting::{Greeter, GreetingBatch, GreetingError};
pub use service::GreetingService;
pub use template::{Template, TemplateSelector, TemplateSet};
