use crate::config::Labels;
use chrono::NaiveDateTime;

/// Evernote's compact timestamp layout, e.g. `20231225T120000Z`.
pub const ENEX_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reformats a compact timestamp for display, or returns it unchanged if it doesn't parse.
pub fn format_enex_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, ENEX_DATE_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Renders the header placed above a converted note body.
pub fn render_metadata(
    title: &str,
    tags: &[String],
    created: Option<&str>,
    updated: Option<&str>,
    labels: &Labels,
) -> String {
    let mut out = format!("# {}\n\n", title);

    if !tags.is_empty() {
        out.push_str(&format!("**{}:** {}\n\n", labels.tags, tags.join(", ")));
    }
    if let Some(created) = created.filter(|s| !s.is_empty()) {
        out.push_str(&format!(
            "**{}:** {}\n\n",
            labels.created,
            format_enex_date(created)
        ));
    }
    if let Some(updated) = updated.filter(|s| !s.is_empty()) {
        out.push_str(&format!(
            "**{}:** {}\n\n",
            labels.updated,
            format_enex_date(updated)
        ));
    }

    out.push_str("---\n");
    out
}
