use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Failed to load OpenAPI file: {0}")]
    SchemaLoadError(String),

    #[error("Failed to serialize output: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
