//! Configuration for textdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a textdb store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The single flat file holding header and all table blocks
    pub db_path: PathBuf,

    /// Create the file (with an empty header) when it does not exist
    pub create_if_missing: bool,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// How line edits of one table operation reach the disk
    pub write_strategy: WriteStrategy,
}

/// Write strategy for table operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Rewrite the whole file after every single line edit.
    /// A failure between two edits leaves the file half-updated.
    EveryEdit,

    /// Read the file once, apply all edits of an operation in memory,
    /// then write the file once
    Staged,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("_temp.db"),
            create_if_missing: true,
            write_strategy: WriteStrategy::Staged,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set whether a missing file is created on open
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Set the write strategy
    pub fn write_strategy(mut self, strategy: WriteStrategy) -> Self {
        self.config.write_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
