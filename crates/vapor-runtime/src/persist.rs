//! Configuration store — key-value storage that survives restarts.
//!
//! Holds a flat mapping of option name → `toml::Value`, loadable from and
//! savable to a TOML file. The simulation merges a loaded snapshot into its
//! live configuration at startup; unknown keys are ignored by the merge.

use std::collections::HashMap;
use std::path::Path;
use vapor_core::Result;

/// A flat key-value store for tunable configuration.
pub struct ConfigStore {
    data: HashMap<String, toml::Value>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Set a value by key. Overwrites any existing value.
    pub fn set(&mut self, key: &str, value: toml::Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.data.get(key)
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove a key, returning the old value if it existed.
    pub fn remove(&mut self, key: &str) -> Option<toml::Value> {
        self.data.remove(key)
    }

    /// Return all entries as a TOML table, for merging into a config.
    pub fn as_table(&self) -> toml::value::Table {
        let mut table = toml::map::Map::new();
        for (k, v) in &self.data {
            table.insert(k.clone(), v.clone());
        }
        table
    }

    /// Save the store to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&self.as_table())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the store from a TOML file, replacing all current data.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let table: toml::map::Map<String, toml::Value> = toml::from_str(&content)?;
        self.data.clear();
        for (k, v) in table {
            self.data.insert(k, v);
        }
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
