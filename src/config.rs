//! Configuration for boltview
//!
//! Resolved options for a single run, with sensible defaults.

use std::path::PathBuf;

use crate::listing::Encoding;

/// Options for one viewer run
#[derive(Debug, Clone, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Path to the bbolt file. Empty is allowed and fails at open time.
    pub db_path: PathBuf,

    /// How the file is opened
    pub open_mode: OpenMode,

    // -------------------------------------------------------------------------
    // Listing Configuration
    // -------------------------------------------------------------------------
    /// Bucket to list; `None` lists the top-level buckets instead
    pub bucket: Option<String>,

    /// Keep only the last N entries in key order; 0 or negative keeps all
    pub limit: i64,

    /// Rendering of keys, values, and bucket names
    pub encoding: Encoding,
}

/// File open mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Exclusive read/write handle. Only read transactions are ever issued.
    #[default]
    ReadWrite,

    /// Shared read-only handle; coexists with other readers
    ReadOnly,
}

/// What a run does, derived from the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ListPartitions,
    ListEntries { bucket: String },
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        match &self.bucket {
            Some(bucket) => Mode::ListEntries {
                bucket: bucket.clone(),
            },
            None => Mode::ListPartitions,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the bucket to list (an empty name means "list buckets")
    pub fn bucket(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.config.bucket = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Set the tail-limit
    pub fn limit(mut self, limit: i64) -> Self {
        self.config.limit = limit;
        self
    }

    /// Set the open mode
    pub fn open_mode(mut self, mode: OpenMode) -> Self {
        self.config.open_mode = mode;
        self
    }

    /// Set the output encoding
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
