//! Store Module
//!
//! Read-only access to a bbolt file through the `bbolt-rs` engine.
//!
//! ## Responsibilities
//! - Open the file (never create it)
//! - Run every lookup inside its own read transaction
//! - Copy data out before the transaction ends
//!
//! Transactions are scoped values: each one is released when the method
//! that began it returns, on success and on error alike. At most one is
//! open at any time.

use std::path::{Path, PathBuf};

use bbolt_rs::{Bolt, BucketApi, DbApi, TxApi};
use bytes::Bytes;
use tracing::debug;

use crate::config::{Config, OpenMode};
use crate::error::{Result, ViewerError};
use crate::listing::Entry;

/// Handle to an open store file
///
/// Owns the engine handle for its whole lifetime. Dropping the `Store`
/// drops the `Bolt` handle, which releases the file and its lock.
pub struct Store {
    path: PathBuf,
    db: Bolt,
}

impl Store {
    /// Open the store named by `config`
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_with_mode(&config.db_path, config.open_mode)
    }

    /// Open the store at `path`.
    ///
    /// The engine creates missing files on a read/write open, so a missing
    /// or empty path is rejected up front. A file removed between the check
    /// and the open is still created by a read/write open.
    pub fn open_with_mode(path: &Path, mode: OpenMode) -> Result<Self> {
        let display = path.display().to_string();
        if path.as_os_str().is_empty() || !path.is_file() {
            return Err(ViewerError::StoreMissing(display));
        }

        debug!(path = %path.display(), ?mode, "opening store");
        let opened = match mode {
            OpenMode::ReadWrite => Bolt::open(path),
            OpenMode::ReadOnly => Bolt::open_ro(path),
        };
        let db = opened.map_err(|source| ViewerError::Open {
            path: display,
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            db,
        })
    }

    /// Path the store was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all top-level buckets, in engine order
    pub fn partitions(&self) -> Result<Vec<Vec<u8>>> {
        let tx = self.db.begin()?;
        debug!("read tx: enumerate buckets");

        let names = tx
            .iter_buckets()
            .map(|(name, _bucket)| name.to_vec())
            .collect();
        Ok(names)
    }

    /// Fail with `PartitionNotFound` unless `name` is a top-level bucket
    pub fn ensure_partition(&self, name: &str) -> Result<()> {
        let tx = self.db.begin()?;
        debug!(bucket = name, "read tx: bucket lookup");

        match tx.bucket(name.as_bytes()) {
            Some(_) => Ok(()),
            None => Err(ViewerError::PartitionNotFound(name.to_string())),
        }
    }

    /// All keys of bucket `name`, in key order.
    ///
    /// Nested buckets are listed by their key with an empty value.
    pub fn entries(&self, name: &str) -> Result<Vec<Entry>> {
        let tx = self.db.begin()?;
        debug!(bucket = name, "read tx: enumerate entries");

        let bucket = tx
            .bucket(name.as_bytes())
            .ok_or_else(|| ViewerError::PartitionNotFound(name.to_string()))?;

        let mut entries: Vec<Entry> = bucket
            .iter_entries()
            .map(|(key, value)| Entry::new(key.to_vec(), value.to_vec()))
            .collect();
        let nested = bucket
            .iter_buckets()
            .map(|(key, _child)| Entry::new(key.to_vec(), Bytes::new()));
        entries.extend(nested);

        // Merge the two key-ordered runs; keys are unique within a bucket
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    /// Run `f` while a read transaction is held, without touching the store
    pub fn within_read_tx<T>(&self, f: impl FnOnce() -> T) -> Result<T> {
        let _tx = self.db.begin()?;
        debug!("read tx: idle");
        Ok(f())
    }
}
