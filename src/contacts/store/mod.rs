//! # Storage Layer
//!
//! The whole contact book is one ordered sequence of [`Contact`](crate::model::Contact) records.
//! [`ContactStore`] owns that sequence in memory and rewrites the full backing
//! document after every mutation; there are no incremental writes.
//!
//! Raw I/O sits behind the [`Backend`] trait so the store logic can be tested
//! without touching the filesystem:
//!
//! - [`fs::FileBackend`]: a single JSON file, written via temp file + rename.
//! - [`memory::MemBackend`]: an in-memory document, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Alice", "phone": "5551234567", "email": "alice@example.com" },
//!   ...
//! ]
//! ```
//!
//! Array order is display order.

use crate::error::Result;
use std::path::Path;

mod contact_store;
pub mod fs;
pub mod memory;

pub use contact_store::ContactStore;

/// Raw access to the serialized contact document.
///
/// Backends move text only; parsing and serialization live in [`ContactStore`].
pub trait Backend {
    /// Read the stored document.
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored document entirely.
    fn write(&self, document: &str) -> Result<()>;

    /// Where the document lives, for messages and logs.
    fn location(&self) -> &Path;
}
