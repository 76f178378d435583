//! Converts a single note.
//!
//! ```text
//! check tags ──> TooMany        -> Rejected (error, nothing written)
//!            ──> MissingMarker  -> Skipped  (info only)
//!            ──> Accepted       -> resolve folder, convert body, save attachments,
//!                                  write <folder>/<title><ext>  -> Written | Failed
//! ```

use crate::attachments::extract_attachments;
use crate::commands::{ConversionReport, NoteOutcome};
use crate::config::ConverterConfig;
use crate::error::Result;
use crate::markup::{self, RuleSet};
use crate::metadata::render_metadata;
use crate::model::Note;
use crate::sanitize::sanitize_filename;
use crate::store::OutputStore;
use crate::tags::{check_tags, target_folder, too_many_tags_message, TagCheck};
use std::path::PathBuf;

/// Name used when a note has no usable title.
pub const UNTITLED: &str = "Untitled";

pub fn run<S: OutputStore>(
    store: &mut S,
    config: &ConverterConfig,
    note: &Note,
    report: &mut ConversionReport,
) -> NoteOutcome {
    run_with_rules(store, config, note, RuleSet::standard(), report)
}

/// Like [`run`], converting the body with `rules`. An unusable rule set keeps
/// the raw body and adds a warning; the note is still written.
pub fn run_with_rules<S: OutputStore>(
    store: &mut S,
    config: &ConverterConfig,
    note: &Note,
    rules: Result<&RuleSet>,
    report: &mut ConversionReport,
) -> NoteOutcome {
    let title = note_title(note);

    match check_tags(&note.tags, &config.marker_tag, config.max_tags) {
        TagCheck::TooMany { max, .. } => NoteOutcome::Rejected {
            reason: too_many_tags_message(&title, &note.tags, &config.marker_tag, max),
            title,
        },
        TagCheck::MissingMarker => NoteOutcome::Skipped { title },
        TagCheck::Accepted => match write_note(store, config, note, &title, rules, report) {
            Ok((path, attachments)) => NoteOutcome::Written {
                title,
                path,
                attachments,
            },
            Err(e) => NoteOutcome::Failed {
                reason: e.to_string(),
                title,
            },
        },
    }
}

/// Sanitized title, falling back to [`UNTITLED`] when nothing usable is left.
pub fn note_title(note: &Note) -> String {
    let title = sanitize_filename(note.title.as_deref().unwrap_or(UNTITLED));
    if title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

fn write_note<S: OutputStore>(
    store: &mut S,
    config: &ConverterConfig,
    note: &Note,
    title: &str,
    rules: Result<&RuleSet>,
    report: &mut ConversionReport,
) -> Result<(PathBuf, usize)> {
    let folder = target_folder(&config.output_dir, &note.tags, &config.marker_tag);
    store.ensure_dir(&folder)?;

    let raw = note.content.as_deref().unwrap_or_default();
    let body = match rules {
        _ if raw.is_empty() => String::new(),
        Ok(rules) => markup::to_markdown_with(rules, raw),
        Err(e) => {
            log::warn!("markup conversion failed for \"{}\": {}", title, e);
            report.warning(format!(
                "Failed to convert ENML to Markdown for \"{}\", keeping raw content: {}",
                title, e
            ));
            raw.to_string()
        }
    };

    let labels = config.labels();
    let metadata = render_metadata(
        title,
        &note.tags,
        note.created.as_deref(),
        note.updated.as_deref(),
        &labels,
    );

    let listing = extract_attachments(store, &folder, title, &note.attachments, &labels)?;
    report.messages.extend(listing.messages);

    let content = format!("{}\n\n{}\n\n{}", metadata, body, listing.markdown);
    let path = folder.join(format!("{}{}", title, config.note_ext));
    store.write_file(&path, content.as_bytes())?;
    log::debug!("wrote {} ({} bytes)", path.display(), content.len());

    Ok((path, listing.saved.len()))
}
