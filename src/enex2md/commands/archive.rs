use crate::commands::{note, ConversionReport};
use crate::config::ConverterConfig;
use crate::enex::parse_archive;
use crate::error::{ConvertError, Result};
use crate::store::OutputStore;
use std::fs;
use std::path::Path;

/// Converts every note of the archive at `path`.
///
/// Returns an error only when the archive cannot be read, is not UTF-8, or
/// does not parse; per-note problems are recorded in `report` and never stop
/// the loop.
pub fn run<S: OutputStore>(
    store: &mut S,
    config: &ConverterConfig,
    path: &Path,
    report: &mut ConversionReport,
) -> Result<usize> {
    let bytes = fs::read(path).map_err(ConvertError::Io)?;
    let xml = String::from_utf8(bytes)?;
    run_str(store, config, &xml, report)
}

pub fn run_str<S: OutputStore>(
    store: &mut S,
    config: &ConverterConfig,
    xml: &str,
    report: &mut ConversionReport,
) -> Result<usize> {
    let archive = parse_archive(xml)?;
    log::debug!("parsed archive with {} note(s)", archive.notes.len());

    for n in &archive.notes {
        let outcome = note::run(store, config, n, report);
        report.record(outcome);
    }
    Ok(archive.notes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NoteOutcome;
    use crate::store::memory::InMemoryStore;

    const ARCHIVE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<en-export>
  <note><title>Keep</title><tag># SAP</tag><content><![CDATA[<en-note>kept</en-note>]]></content></note>
  <note><title>Crowded</title><tag># SAP</tag><tag>A</tag><tag>B</tag></note>
  <note><title>Other</title><tag>Personal</tag></note>
  <note><title>Filed</title><tag># SAP</tag><tag>Finance</tag></note>
</en-export>"#;

    #[test]
    fn test_run_str_processes_all_notes() {
        let mut store = InMemoryStore::new();
        let mut report = ConversionReport::default();
        let config = ConverterConfig::new("in", "out");

        let count = run_str(&mut store, &config, ARCHIVE, &mut report).unwrap();

        assert_eq!(count, 4);
        assert_eq!(report.written_count(), 2);
        assert_eq!(report.rejected_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Crowded"));
        assert!(matches!(report.outcomes[0], NoteOutcome::Written { .. }));

        let files: Vec<_> = store.files().collect();
        assert_eq!(
            files,
            vec![Path::new("out/Finance/Filed.md"), Path::new("out/Keep.md")]
        );
    }

    #[test]
    fn test_unparseable_archive_is_error() {
        let mut store = InMemoryStore::new();
        let mut report = ConversionReport::default();
        let config = ConverterConfig::default();

        let result = run_str(&mut store, &config, "not xml at all", &mut report);

        assert!(matches!(result, Err(ConvertError::Xml(_))));
        assert!(report.outcomes.is_empty());
        assert_eq!(store.file_count(), 0);
    }

    #[test]
    fn test_non_utf8_archive_is_encoding_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("latin1.enex");
        fs::write(&path, b"<en-export><note><title>Caf\xe9</title></note></en-export>").unwrap();
        let mut store = InMemoryStore::new();
        let mut report = ConversionReport::default();

        let result = run(&mut store, &ConverterConfig::default(), &path, &mut report);

        assert!(matches!(result, Err(ConvertError::Encoding(_))));
        assert!(report.outcomes.is_empty());
        assert_eq!(store.file_count(), 0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = InMemoryStore::new();
        let mut report = ConversionReport::default();
        let result = run(
            &mut store,
            &ConverterConfig::default(),
            &temp_dir.path().join("gone.enex"),
            &mut report,
        );
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }
}
