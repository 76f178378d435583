//! # enex2md Architecture
//!
//! enex2md turns Evernote `.enex` exports into a folder tree of Markdown files.
//! Notes opt in with a marker tag (`# SAP` by default); one optional extra tag
//! picks the subfolder. Embedded resources are extracted next to each note.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, loads config, prints messages          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Converter facade, dispatches to commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - convert: discover archives, run loop                     │
//! │  - archive: parse one archive, convert each note            │
//! │  - note: validate tags, write note + attachments            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - OutputStore trait                                        │
//! │  - FileStore (production), InMemoryStore (tests, dry runs)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Failures are contained at three levels. A bad attachment is skipped with a
//! warning, a bad note becomes [`commands::NoteOutcome::Failed`] or
//! `Rejected`, and an unparseable archive is logged while the run moves on.
//! Everything that counts as an error ends up in
//! [`commands::ConversionReport::errors`] for the end-of-run summary.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Converter` facade
//! - [`commands`]: Run loop, archive and note processing, report types
//! - [`store`]: Output abstraction and implementations
//! - [`enex`]: Archive parsing into [`model`] types
//! - [`markup`]: ENML to Markdown rules
//! - [`attachments`]: Resource extraction and listing
//! - [`metadata`]: Note header rendering
//! - [`tags`]: Tag validation and folder resolution
//! - [`sanitize`], [`mime`]: File naming helpers
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod attachments;
pub mod commands;
pub mod config;
pub mod enex;
pub mod error;
pub mod markup;
pub mod metadata;
pub mod mime;
pub mod model;
pub mod sanitize;
pub mod store;
pub mod tags;
