/// One parsed `.enex` file. Read-only once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub title: Option<String>,
    /// Distinct tags in document order.
    pub tags: Vec<String>,
    /// Compact Evernote timestamp, e.g. `20231225T120000Z`.
    pub created: Option<String>,
    pub updated: Option<String>,
    /// Raw ENML body.
    pub content: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl Note {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = dedup_tags(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// An embedded resource. The payload stays base64-encoded until the
/// attachment is saved, so a bad payload only affects that attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub data: Option<String>,
    pub mime: String,
    pub file_name: Option<String>,
}

impl Attachment {
    pub const DEFAULT_MIME: &'static str = "application/octet-stream";

    pub fn new(data: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            mime: mime.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Drops empty and repeated tags, keeping the first occurrence of each.
pub fn dedup_tags<I: IntoIterator<Item = String>>(tags: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
