use std::path::Path;

const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("application/pdf", ".pdf"),
    ("application/vnd.ms-excel", ".xls"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xlsx",
    ),
    ("application/vnd.ms-powerpoint", ".ppt"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".pptx",
    ),
    ("application/msword", ".doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
    ),
    ("image/png", ".png"),
    ("image/jpeg", ".jpg"),
    ("image/gif", ".gif"),
    ("text/plain", ".txt"),
];

pub const FALLBACK_EXTENSION: &str = ".bin";
pub const FALLBACK_ICON: &str = "📎";

/// File extension (with leading dot) for a content type. Unknown types map to `.bin`.
pub fn extension_for_mime(mime: &str) -> &'static str {
    MIME_EXTENSIONS
        .iter()
        .find(|(m, _)| *m == mime)
        .map(|(_, ext)| *ext)
        .unwrap_or(FALLBACK_EXTENSION)
}

/// Icon shown next to an attachment in the listing, chosen by extension.
pub fn icon_for_filename(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "📄",
        "xls" | "xlsx" => "📊",
        "ppt" | "pptx" => "📽️",
        "doc" | "docx" => "📝",
        "png" | "jpg" | "gif" => "🖼️",
        "txt" => "📃",
        _ => FALLBACK_ICON,
    }
}
