//! # API Facade
//!
//! [`Converter`] is the single entry point for conversions, whatever the UI.
//! It dispatches to the command functions and returns a [`ConversionReport`];
//! it never prints.
//!
//! `Converter<S: OutputStore>` is generic over where output goes:
//! - Production: `Converter<FileStore>`
//! - Dry runs and tests: `Converter<InMemoryStore>`

use crate::commands::{self, ConversionReport, NoteOutcome};
use crate::config::ConverterConfig;
use crate::error::Result;
use crate::model::Note;
use crate::store::OutputStore;
use std::path::Path;

pub struct Converter<S: OutputStore> {
    store: S,
    config: ConverterConfig,
}

impl<S: OutputStore> Converter<S> {
    pub fn new(store: S, config: ConverterConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Converts every archive in the configured input directory.
    pub fn convert_all(&mut self) -> Result<ConversionReport> {
        commands::convert::run(&mut self.store, &self.config)
    }

    /// Converts one archive file. A read or parse failure is recorded in the
    /// report rather than returned.
    pub fn convert_archive_file(&mut self, path: &Path) -> ConversionReport {
        let mut report = ConversionReport::default();
        if let Err(e) = commands::archive::run(&mut self.store, &self.config, path, &mut report) {
            report.error(format!("Failed to parse {}: {}", path.display(), e));
        }
        report
    }

    /// Converts archive XML already in memory.
    pub fn convert_archive_str(&mut self, xml: &str) -> Result<ConversionReport> {
        let mut report = ConversionReport::default();
        commands::archive::run_str(&mut self.store, &self.config, xml, &mut report)?;
        Ok(report)
    }

    pub fn convert_note(&mut self, note: &Note, report: &mut ConversionReport) -> NoteOutcome {
        let outcome = commands::note::run(&mut self.store, &self.config, note, report);
        report.record(outcome.clone());
        outcome
    }
}
