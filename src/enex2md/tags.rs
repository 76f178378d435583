//! Tag rules for deciding whether and where a note is written.
//!
//! A note is converted only when it carries the marker tag, and at most one
//! other tag. That other tag names the subfolder the note lands in.

use crate::sanitize::sanitize_filename;
use std::path::{Path, PathBuf};

/// Result of checking a note's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCheck {
    Accepted,
    /// The marker tag is absent. Not an error.
    MissingMarker,
    /// More tags than allowed. Checked before the marker.
    TooMany { count: usize, max: usize },
}

pub fn check_tags(tags: &[String], marker: &str, max_tags: usize) -> TagCheck {
    if tags.len() > max_tags {
        return TagCheck::TooMany {
            count: tags.len(),
            max: max_tags,
        };
    }
    if !tags.iter().any(|t| t == marker) {
        return TagCheck::MissingMarker;
    }
    TagCheck::Accepted
}

/// Message recorded when a note has too many tags, in Japanese and English.
pub fn too_many_tags_message(title: &str, tags: &[String], marker: &str, max: usize) -> String {
    let listed = tags.join(", ");
    format!(
        "ノート\"{title}\": タグが{over}つ以上あります。\"{marker}\"タグを含め{max}つまでにして下さい。（現在のタグ: {listed}） / \
         Note \"{title}\" has {count} tags; keep at most {max} including \"{marker}\" (current tags: {listed})",
        over = max + 1,
        count = tags.len(),
    )
}

/// Folder an accepted note is written to.
///
/// The marker alone maps to `root`; otherwise the first non-marker tag names a
/// subfolder of `root`. A tag that can't name a subfolder (empty, `.`, `..`)
/// also maps to `root`.
pub fn target_folder(root: &Path, tags: &[String], marker: &str) -> PathBuf {
    match tags.iter().find(|t| t.as_str() != marker) {
        Some(other) => {
            let segment = sanitize_filename(other);
            if matches!(segment.trim(), "" | "." | "..") {
                root.to_path_buf()
            } else {
                root.join(segment)
            }
        }
        None => root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "# SAP";

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_marker_alone_accepted() {
        assert_eq!(check_tags(&tags(&["# SAP"]), MARKER, 2), TagCheck::Accepted);
    }

    #[test]
    fn test_marker_plus_one_accepted() {
        assert_eq!(
            check_tags(&tags(&["Finance", "# SAP"]), MARKER, 2),
            TagCheck::Accepted
        );
    }

    #[test]
    fn test_missing_marker_skipped() {
        assert_eq!(check_tags(&[], MARKER, 2), TagCheck::MissingMarker);
        assert_eq!(
            check_tags(&tags(&["Finance"]), MARKER, 2),
            TagCheck::MissingMarker
        );
        assert_eq!(check_tags(&tags(&["# sap"]), MARKER, 2), TagCheck::MissingMarker);
    }

    #[test]
    fn test_too_many_rejected_regardless_of_marker() {
        assert_eq!(
            check_tags(&tags(&["# SAP", "A", "B"]), MARKER, 2),
            TagCheck::TooMany { count: 3, max: 2 }
        );
        assert_eq!(
            check_tags(&tags(&["A", "B", "C", "D"]), MARKER, 2),
            TagCheck::TooMany { count: 4, max: 2 }
        );
    }

    #[test]
    fn test_too_many_message_names_note_and_tags() {
        let msg = too_many_tags_message("Intro", &tags(&["# SAP", "A", "B"]), MARKER, 2);
        assert!(msg.contains("ノート\"Intro\""));
        assert!(msg.contains("タグが3つ以上あります"));
        assert!(msg.contains("Note \"Intro\" has 3 tags"));
        assert!(msg.contains("# SAP, A, B"));
    }

    #[test]
    fn test_target_folder() {
        let root = Path::new("out");
        assert_eq!(target_folder(root, &tags(&["# SAP"]), MARKER), PathBuf::from("out"));
        assert_eq!(
            target_folder(root, &tags(&["# SAP", "Finance"]), MARKER),
            PathBuf::from("out/Finance")
        );
        assert_eq!(
            target_folder(root, &tags(&["Finance", "# SAP"]), MARKER),
            PathBuf::from("out/Finance")
        );
    }

    #[test]
    fn test_target_folder_sanitizes_tag() {
        let root = Path::new("out");
        assert_eq!(
            target_folder(root, &tags(&["# SAP", "FI/CO"]), MARKER),
            PathBuf::from("out/FI_CO")
        );
    }

    #[test]
    fn test_target_folder_stays_under_root() {
        let root = Path::new("out/root");
        for tag in ["..", ".", " .. ", "   "] {
            assert_eq!(
                target_folder(root, &tags(&["# SAP", tag]), MARKER),
                PathBuf::from("out/root"),
                "tag {:?}",
                tag
            );
        }
        assert_eq!(
            target_folder(root, &tags(&["# SAP", "..notes"]), MARKER),
            PathBuf::from("out/root/..notes")
        );
    }
}
