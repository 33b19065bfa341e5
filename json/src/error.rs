use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error("missing or invalid field: {field}")]
    MissingField { field: String },
}

impl JsonError {
    pub fn missing(field: &str) -> Self {
        JsonError::MissingField {
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JsonError>;
