use thiserror::Error;

use crate::greeting::GreetingError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Greeting error: {0}")]
    Greeting(#[from] GreetingError),
}

pub type Result<T> = std::result::Result<T, AppError>;
