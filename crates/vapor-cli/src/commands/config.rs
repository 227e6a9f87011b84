//! Config command — inspect and edit the persisted configuration file

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;
use vapor_core::VaporError;
use vapor_runtime::ConfigStore;
use vapor_sim::SmokeConfig;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (defaults merged with the file)
    Show {
        /// Path to the persisted configuration file
        #[arg(long, default_value = "vapor.toml")]
        file: String,
    },

    /// Set a single key in the persisted configuration file
    Set {
        /// Option name (e.g. "speed", "particle_count")
        key: String,

        /// Numeric or string value
        value: String,

        /// Path to the persisted configuration file
        #[arg(long, default_value = "vapor.toml")]
        file: String,
    },
}

pub fn run(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { file } => show(&file),
        ConfigCommands::Set { key, value, file } => set(&key, &value, &file),
    }
}

fn show(file: &str) -> Result<()> {
    let mut config = SmokeConfig::default();
    let path = Path::new(file);
    if path.exists() {
        let mut store = ConfigStore::new();
        store
            .load_from_file(path)
            .map_err(|e| VaporError::ConfigError(format!("{file}: {e}")))?;
        config.apply_table(&store.as_table());
    }
    let rendered = toml::to_string_pretty(&config)?;
    print!("{rendered}");
    Ok(())
}

fn set(key: &str, value: &str, file: &str) -> Result<()> {
    let path = Path::new(file);
    let mut store = ConfigStore::new();
    if path.exists() {
        store
            .load_from_file(path)
            .map_err(|e| VaporError::ConfigError(format!("{file}: {e}")))?;
    }

    store.set(key, parse_value(value));
    store
        .save_to_file(path)
        .map_err(|e| VaporError::ConfigError(format!("{file}: {e}")))?;
    println!("[config] {key} = {value} -> {file}");
    Ok(())
}

/// Coerce a CLI string into the narrowest TOML value that holds it
fn parse_value(value: &str) -> toml::Value {
    if let Ok(i) = value.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = value.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_coercion() {
        assert_eq!(parse_value("600"), toml::Value::Integer(600));
        assert_eq!(parse_value("0.7"), toml::Value::Float(0.7));
        assert_eq!(
            parse_value("wrap"),
            toml::Value::String("wrap".to_string())
        );
    }
}
