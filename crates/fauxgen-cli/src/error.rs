use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("core error: {0}")]
    Core(#[from] fauxgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid argument: {0}")]
    InvalidArgs(String),
    #[error("locale validation failed with {0} error(s)")]
    Validation(usize),
}

pub type CliResult<T> = Result<T, CliError>;
