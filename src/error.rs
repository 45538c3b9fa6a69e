use thiserror::Error;

pub type FormkitResult<T> = Result<T, FormkitError>;

#[derive(Error, Debug)]
pub enum FormkitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
