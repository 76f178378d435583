use crate::commands::{archive, ConversionReport};
use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::store::OutputStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Converts every archive found directly inside `config.input_dir`.
///
/// Archives that fail to parse are logged and skipped. The returned report
/// carries the collected errors for the caller to display.
pub fn run<S: OutputStore>(store: &mut S, config: &ConverterConfig) -> Result<ConversionReport> {
    let mut report = ConversionReport::default();
    report.info(format!(
        "Scanning {} for {} files...",
        config.input_dir.display(),
        config.archive_ext
    ));

    let archives = discover_archives(&config.input_dir, &config.archive_ext)?;
    if archives.is_empty() {
        report.warning(format!("No {} files found", config.archive_ext));
        return Ok(report);
    }
    report.info(format!("Found {} archive(s)", archives.len()));

    for path in archives {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        report.info(format!("Processing: {}", name));

        if let Err(e) = archive::run(store, config, &path, &mut report) {
            report.error(format!("Failed to parse {}: {}", name, e));
        }
    }

    Ok(report)
}

/// Files in `dir` (not recursive) ending in `ext`, sorted by path.
///
/// A missing directory yields no archives.
pub fn discover_archives(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(ConvertError::NotADirectory(dir.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(ConvertError::Io)? {
        let path = entry.map_err(ConvertError::Io)?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(file_ext) = path.extension() {
            if format!(".{}", file_ext.to_string_lossy()) == ext {
                found.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}
