use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Submission error: {0}")]
    Submit(String),

    #[error("CLI error: {0}")]
    Cli(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OnboardError>;
