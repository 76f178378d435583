//! # Storage Layer
//!
//! Everything the converter writes goes through the [`OutputStore`] trait, so
//! the pipeline can run against the real filesystem or entirely in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, plain `std::fs` writes
//! - [`memory::InMemoryStore`]: Records directories and files in maps.
//!   Backs unit tests and `--dry-run`.
//!
//! ## Output Layout
//!
//! ```text
//! <output_dir>/
//! ├── Intro.md                     # note tagged only with the marker
//! ├── Intro_attachments/
//! │   └── attachment_1.png
//! └── Finance/                     # note tagged with the marker + "Finance"
//!     └── Ledger.md
//! ```
//!
//! Writes overwrite silently; two notes with the same sanitized title in the
//! same folder leave only the last one.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait OutputStore {
    /// Create `path` and its parents. Existing directories are left as they are.
    fn ensure_dir(&mut self, path: &Path) -> Result<()>;

    /// Create or replace the file at `path`.
    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<()>;
}
