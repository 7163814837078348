use crate::config::DEFAULT_DATA_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_file: Option<String>,
    pub autosave: Option<bool>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StoreError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values. Unset
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(data_file) = &self.store.data_file {
            validation::validate_path("store.data_file", data_file)?;
            validation::validate_file_extension("store.data_file", data_file, "plist")?;
        }
        Ok(())
    }

    pub fn autosave(&self) -> bool {
        self.store.autosave.unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_file(&self) -> &str {
        self.store.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    fn autosave(&self) -> bool {
        self.autosave()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[store]
data_file = "/tmp/todo-test/ToDo.plist"
autosave = false
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_file(), "/tmp/todo-test/ToDo.plist");
        assert!(!config.autosave());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_fields_are_omitted() {
        let config = TomlConfig::from_toml_str("[store]\n").unwrap();

        assert_eq!(config.data_file(), DEFAULT_DATA_FILE);
        assert!(config.autosave());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_TODO_DIR", "/tmp/todo-env");

        let toml_content = r#"
[store]
data_file = "${TEST_TODO_DIR}/ToDo.plist"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_file(), "/tmp/todo-env/ToDo.plist");

        std::env::remove_var("TEST_TODO_DIR");
    }

    #[test]
    fn test_config_validation_rejects_wrong_extension() {
        let toml_content = r#"
[store]
data_file = "/tmp/todo.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[store]
data_file = "Library/ToDo.plist"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_file(), "Library/ToDo.plist");
    }
}
