pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

/// Default data file, relative to the storage base directory. Same location
/// the original app kept its list in under the user's home.
pub const DEFAULT_DATA_FILE: &str = "Library/ToDo.plist";

/// Base directory for relative data paths: the user's home, falling back to
/// the current directory when $HOME is unset.
pub fn default_base_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| ".".into())
}

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-store")]
#[command(about = "A small to-do list store persisted as a property list")]
pub struct CliConfig {
    /// Path of the plist data file, relative to $HOME unless absolute.
    /// Overrides the config file value when both are given.
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML config file with a [store] table
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Append an item to the end of the list
    Add { item: String },
    /// Remove the item at the given position
    Remove { index: usize },
    /// Move the item at `from` so it ends up at position `to`
    Move { from: usize, to: usize },
    /// Print the list, one item per line
    List {
        /// Emit the list as a JSON array instead
        #[arg(long)]
        json: bool,
    },
    /// Print the number of items
    Count,
}

impl ConfigProvider for CliConfig {
    fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(data_file) = &self.data_file {
            validation::validate_path("data_file", data_file)?;
            validation::validate_file_extension("data_file", data_file, "plist")?;
        }
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        Ok(())
    }
}
