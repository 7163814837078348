use clap::Parser;
use todo_store::config::{default_base_dir, Command};
use todo_store::core::ConfigProvider;
use todo_store::utils::{logger, validation::Validate};
use todo_store::{CliConfig, ListStore, LocalStorage, Result, StoreError, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting todo-store CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // An explicit --data-file beats the config file, which beats the default.
    let result = match (&config.config, &config.data_file) {
        (Some(path), None) => match load_toml_config(path) {
            Ok(toml_config) => run(&config.command, toml_config),
            Err(e) => Err(e),
        },
        _ => run(&config.command, config.clone()),
    };

    match result {
        Ok(()) => {}
        Err(e @ StoreError::OutOfBounds { .. }) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn load_toml_config(path: &str) -> Result<TomlConfig> {
    let toml_config = TomlConfig::from_file(path)?;
    toml_config.validate()?;
    Ok(toml_config)
}

fn run<C: ConfigProvider>(command: &Command, provider: C) -> Result<()> {
    let storage = LocalStorage::new(default_base_dir());
    let mut store = ListStore::new(storage, provider);
    store.load();

    match command {
        Command::Add { item } => {
            store.add(item.clone())?;
            println!("✅ Added: {}", item);
        }
        Command::Remove { index } => {
            let removed = store.remove(*index)?;
            println!("✅ Removed: {}", removed);
        }
        Command::Move { from, to } => {
            store.move_item(*from, *to)?;
            println!("✅ Moved item {} to position {}", from, to);
        }
        Command::List { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(store.items())?);
            } else {
                for (i, item) in store.items().iter().enumerate() {
                    println!("{:>3}  {}", i, item);
                }
            }
        }
        Command::Count => {
            println!("{}", store.count());
        }
    }

    Ok(())
}
