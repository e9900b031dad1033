//! # boltview
//!
//! Read-only command-line viewer for bbolt key-value store files:
//! - Lists the top-level buckets of a store
//! - Lists the key/value entries of one bucket
//! - Optionally keeps only the last N entries in key order
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CLI (Go-style flags)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Config
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Viewer                                │
//! │        (open → list buckets | lookup → fetch → limit)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │   Listing   │
//!   │  (read txs) │          │  (format)   │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  bbolt-rs   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cli;
pub mod listing;
pub mod store;
pub mod viewer;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ViewerError};
pub use config::{Config, Mode, OpenMode};
pub use listing::{Encoding, Entry};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of boltview
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
