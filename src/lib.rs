pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::store::ListStore;
pub use domain::model::TodoList;
pub use domain::ports::{ConfigProvider, Storage};
pub use utils::error::{Result, StoreError};
