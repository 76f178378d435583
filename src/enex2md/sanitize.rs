/// Longest file name segment produced, in characters.
pub const MAX_FILENAME_CHARS: usize = 200;

const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Makes `name` usable as a single path segment.
///
/// Characters that are reserved on common filesystems become `_` and the
/// result is cut to [`MAX_FILENAME_CHARS`]. Empty input gives an empty string;
/// callers that need a name must substitute their own placeholder.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_FILENAME_CHARS)
        .collect()
}
