use crate::utils::error::{Result, StoreError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed: &str) -> Result<()> {
    match Path::new(file).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == allowed => Ok(()),
        Some(ext) => Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: {}", ext, allowed),
        }),
        None => Err(StoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "Library/ToDo.plist").is_ok());
        assert!(validate_path("data_file", "/tmp/todo/ToDo.plist").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "   ").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("data_file", "ToDo.plist", "plist").is_ok());
        assert!(validate_file_extension("data_file", "ToDo.json", "plist").is_err());
        assert!(validate_file_extension("data_file", "ToDo", "plist").is_err());
    }
}
