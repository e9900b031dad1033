//! Viewer
//!
//! Drives one run of the tool:
//!
//! ```text
//! Start → OpenStore ─┬─ ListPartitions → Exit
//!                    └─ LookupPartition → FetchEntries → ApplyLimit → Print → Exit
//! ```
//!
//! Any error ends the run immediately. The store handle is dropped on
//! every path out of [`run`].

use std::io::Write;

use tracing::{info, warn};

use crate::config::{Config, Mode};
use crate::error::Result;
use crate::listing::{apply_tail_limit, Encoding};
use crate::store::Store;

/// Execute `config` and write the listing to `out`
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let store = Store::open(config)?;

    match config.mode() {
        Mode::ListPartitions => {
            if config.limit != 0 {
                warn!(limit = config.limit, "limit ignored when listing buckets");
            }
            list_partitions(&store, config.encoding, out)
        }
        Mode::ListEntries { bucket } => {
            list_entries(&store, &bucket, config.limit, config.encoding, out)
        }
    }
}

/// Print every top-level bucket name, one per line
pub fn list_partitions<W: Write>(store: &Store, encoding: Encoding, out: &mut W) -> Result<()> {
    info!(path = %store.path().display(), "listing buckets");

    for name in store.partitions()? {
        out.write_all(&encoding.render(&name))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Print the entries of `bucket`, keeping the last `limit` when positive
pub fn list_entries<W: Write>(
    store: &Store,
    bucket: &str,
    limit: i64,
    encoding: Encoding,
    out: &mut W,
) -> Result<()> {
    info!(bucket, limit, "listing entries");

    // Existence check in its own transaction; the lookup is not reused.
    store.ensure_partition(bucket)?;

    let rows: Vec<Vec<u8>> = store
        .entries(bucket)?
        .iter()
        .map(|entry| entry.to_block(encoding))
        .collect();
    let total = rows.len();

    let rows = apply_tail_limit(rows, limit);
    info!(bucket, total, shown = rows.len(), "entries buffered");

    store.within_read_tx(|| -> std::io::Result<()> {
        for row in &rows {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        out.flush()
    })??;
    Ok(())
}
