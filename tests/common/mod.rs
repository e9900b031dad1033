//! Shared fixtures for integration tests
//!
//! Builds real bbolt files with `bbolt-rs` read/write transactions.

#![allow(dead_code)]

use std::path::PathBuf;

use bbolt_rs::*;
use tempfile::TempDir;

pub type Fixture<'a> = &'a [(&'a str, &'a [(&'a str, &'a str)])];

/// Five entries with keys a..e
pub const LOGS: &[(&str, &str)] = &[
    ("a", "first"),
    ("b", "second"),
    ("c", "third"),
    ("d", "fourth"),
    ("e", "fifth"),
];

/// Create `test.db` in a fresh temp dir holding `buckets`
pub fn setup_temp_store(buckets: Fixture<'_>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.db");

    let mut db = Bolt::open(&path).unwrap();
    db.update(|mut tx| {
        for (name, entries) in buckets {
            let mut bucket = tx.create_bucket_if_not_exists(name)?;
            for (key, value) in entries.iter() {
                bucket.put(key, value)?;
            }
        }
        Ok(())
    })
    .unwrap();
    // Release the file lock before the store is reopened
    drop(db);

    (temp_dir, path)
}

/// A store with one `logs` bucket that also holds a nested bucket
pub fn setup_store_with_nested_bucket() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested.db");

    let mut db = Bolt::open(&path).unwrap();
    db.update(|mut tx| {
        let mut bucket = tx.create_bucket_if_not_exists("logs")?;
        bucket.put("a", "1")?;
        bucket.create_bucket_if_not_exists("archive")?;
        bucket.put("z", "26")?;
        Ok(())
    })
    .unwrap();
    drop(db);

    (temp_dir, path)
}

/// A store with one `raw` bucket whose key and value are not UTF-8
pub fn setup_store_with_raw_bytes() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("raw.db");

    let mut db = Bolt::open(&path).unwrap();
    db.update(|mut tx| {
        let mut bucket = tx.create_bucket_if_not_exists("raw")?;
        bucket.put([0xffu8, b'k'], [0xfeu8])?;
        Ok(())
    })
    .unwrap();
    drop(db);

    (temp_dir, path)
}

/// Expected output for a list of (key, value) pairs
pub fn blocks(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("key: {}\nvalue: {}\n===\n", k, v))
        .collect()
}
