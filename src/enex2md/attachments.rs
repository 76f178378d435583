//! Extraction of embedded resources next to the converted note.

use crate::commands::CmdMessage;
use crate::config::Labels;
use crate::error::{ConvertError, Result};
use crate::mime::{extension_for_mime, icon_for_filename};
use crate::model::Attachment;
use crate::sanitize::sanitize_filename;
use crate::store::OutputStore;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

/// One attachment written by [`save_attachment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAttachment {
    /// Sanitized name inside the attachments folder.
    pub filename: String,
    pub path: PathBuf,
    pub size: usize,
}

/// Output of [`extract_attachments`].
#[derive(Debug, Default)]
pub struct AttachmentListing {
    /// Markdown section linking every saved file; empty when the note has no attachments.
    pub markdown: String,
    pub saved: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

pub fn attachments_dir_name(note_title: &str) -> String {
    format!("{}_attachments", note_title)
}

/// Writes each attachment into `<folder>/<title>_attachments/`.
///
/// A failing attachment is reported as a warning and skipped; the others and
/// the note itself are unaffected.
pub fn extract_attachments<S: OutputStore>(
    store: &mut S,
    folder: &Path,
    note_title: &str,
    attachments: &[Attachment],
    labels: &Labels,
) -> Result<AttachmentListing> {
    let mut listing = AttachmentListing::default();
    if attachments.is_empty() {
        return Ok(listing);
    }

    let dir_name = attachments_dir_name(note_title);
    let dir = folder.join(&dir_name);
    store.ensure_dir(&dir)?;

    listing.markdown = format!("\n## {}\n\n", labels.attachments);

    for (i, attachment) in attachments.iter().enumerate() {
        let index = i + 1;
        match save_attachment(store, &dir, index, attachment) {
            Ok(saved) => {
                listing.markdown.push_str(&format!(
                    "- {} [{}](./{}/{})\n",
                    icon_for_filename(&saved.filename),
                    saved.filename,
                    dir_name,
                    saved.filename
                ));
                listing
                    .messages
                    .push(CmdMessage::info(format!("  Saved attachment: {}", saved.filename)));
                log::debug!("saved {} ({} bytes)", saved.path.display(), saved.size);
                listing.saved.push(saved.path);
            }
            Err(e) => {
                log::warn!("attachment {} of \"{}\" skipped: {}", index, note_title, e);
                listing.messages.push(CmdMessage::warning(format!(
                    "  Failed to save attachment {} of \"{}\": {}",
                    index, note_title, e
                )));
            }
        }
    }

    Ok(listing)
}

/// Decodes and writes one attachment into `dir`.
pub fn save_attachment<S: OutputStore>(
    store: &mut S,
    dir: &Path,
    index: usize,
    attachment: &Attachment,
) -> Result<SavedAttachment> {
    let encoded = attachment
        .data
        .as_deref()
        .ok_or(ConvertError::MissingPayload { index })?;
    let bytes = decode_payload(encoded)?;

    let filename = sanitize_filename(&attachment_filename(index, attachment));
    let path = dir.join(&filename);
    store.write_file(&path, &bytes)?;
    Ok(SavedAttachment {
        filename,
        path,
        size: bytes.len(),
    })
}

/// The declared file name, or `attachment_<index><ext>` derived from the MIME type.
pub fn attachment_filename(index: usize, attachment: &Attachment) -> String {
    match attachment.file_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("attachment_{}{}", index, extension_for_mime(&attachment.mime)),
    }
}

/// Base64 with the line breaks and indentation exports wrap payloads in.
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::store::memory::InMemoryStore;

    fn labels() -> Labels {
        Language::En.labels()
    }

    #[test]
    fn test_no_attachments_no_folder() {
        let mut store = InMemoryStore::new();
        let listing =
            extract_attachments(&mut store, Path::new("out"), "Intro", &[], &labels()).unwrap();
        assert_eq!(listing.markdown, "");
        assert!(!store.has_dir(Path::new("out/Intro_attachments")));
    }

    #[test]
    fn test_png_without_name() {
        let mut store = InMemoryStore::new();
        let attachments = vec![Attachment::new("iVBORw0KGgo=", "image/png")];

        let listing =
            extract_attachments(&mut store, Path::new("out"), "Intro", &attachments, &labels())
                .unwrap();

        let saved = Path::new("out/Intro_attachments/attachment_1.png");
        assert_eq!(store.read(saved).unwrap(), b"\x89PNG\r\n\x1a\n");
        assert_eq!(listing.saved, vec![saved.to_path_buf()]);
        assert_eq!(
            listing.markdown,
            "\n## Attachments\n\n- 🖼️ [attachment_1.png](./Intro_attachments/attachment_1.png)\n"
        );
    }

    #[test]
    fn test_declared_name_is_sanitized() {
        let mut store = InMemoryStore::new();
        let attachments =
            vec![Attachment::new("aGVsbG8=", "application/pdf").with_file_name("Q3:plan?.pdf")];

        let listing =
            extract_attachments(&mut store, Path::new("out"), "Plan", &attachments, &labels())
                .unwrap();

        assert!(store
            .read(Path::new("out/Plan_attachments/Q3_plan_.pdf"))
            .is_some());
        assert!(listing
            .markdown
            .contains("- 📄 [Q3_plan_.pdf](./Plan_attachments/Q3_plan_.pdf)"));
    }

    #[test]
    fn test_bad_attachment_is_skipped() {
        let mut store = InMemoryStore::new();
        let attachments = vec![
            Attachment::new("!!not base64!!", "image/png"),
            Attachment {
                data: None,
                mime: "text/plain".into(),
                file_name: None,
            },
            Attachment::new("aGVs\n  bG8=\n", "text/plain"),
        ];

        let listing =
            extract_attachments(&mut store, Path::new("out"), "Mixed", &attachments, &labels())
                .unwrap();

        assert_eq!(store.file_count(), 1);
        assert_eq!(
            store
                .read_to_string(Path::new("out/Mixed_attachments/attachment_3.txt"))
                .unwrap(),
            "hello"
        );
        assert_eq!(listing.saved.len(), 1);
        let warnings = listing
            .messages
            .iter()
            .filter(|m| m.level == crate::commands::MessageLevel::Warning)
            .count();
        assert_eq!(warnings, 2);
        assert!(!listing.markdown.contains("attachment_1"));
    }

    #[test]
    fn test_save_attachment_reports_file() {
        let mut store = InMemoryStore::new();
        let dir = Path::new("out/Doc_attachments");
        store.ensure_dir(dir).unwrap();
        let attachment = Attachment::new("aGVsbG8=", "text/plain").with_file_name("a|b.txt");

        let saved = save_attachment(&mut store, dir, 2, &attachment).unwrap();

        assert_eq!(
            saved,
            SavedAttachment {
                filename: "a_b.txt".into(),
                path: dir.join("a_b.txt"),
                size: 5,
            }
        );
        assert_eq!(store.read(&saved.path).unwrap(), b"hello");
    }

    #[test]
    fn test_save_attachment_without_data() {
        let mut store = InMemoryStore::new();
        let attachment = Attachment {
            data: None,
            mime: "image/gif".into(),
            file_name: None,
        };
        assert!(matches!(
            save_attachment(&mut store, Path::new("out"), 3, &attachment),
            Err(ConvertError::MissingPayload { index: 3 })
        ));
    }

    #[test]
    fn test_attachment_filename() {
        let unknown = Attachment::new("", "application/zip");
        assert_eq!(attachment_filename(4, &unknown), "attachment_4.bin");
        let named = Attachment::new("", "image/png").with_file_name("shot.png");
        assert_eq!(attachment_filename(1, &named), "shot.png");
    }
}
