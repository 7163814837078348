use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Index {index} out of bounds for list of {len} items")]
    OutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Property list error: {0}")]
    PlistError(#[from] plist::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
