use std::path::PathBuf;

pub mod archive;
pub mod convert;
pub mod note;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What happened to one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    Written {
        title: String,
        path: PathBuf,
        attachments: usize,
    },
    /// No marker tag. Not an error.
    Skipped { title: String },
    /// Tag validation failed; nothing written.
    Rejected { title: String, reason: String },
    /// Something failed after validation; the note file was not written.
    Failed { title: String, reason: String },
}

impl NoteOutcome {
    pub fn title(&self) -> &str {
        match self {
            NoteOutcome::Written { title, .. }
            | NoteOutcome::Skipped { title }
            | NoteOutcome::Rejected { title, .. }
            | NoteOutcome::Failed { title, .. } => title,
        }
    }
}

/// Accumulates progress messages, note outcomes and the end-of-run error log.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub messages: Vec<CmdMessage>,
    pub outcomes: Vec<NoteOutcome>,
    /// Human-readable failures, reported together at the end of a run.
    pub errors: Vec<String>,
}

impl ConversionReport {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn info(&mut self, content: impl Into<String>) {
        self.add_message(CmdMessage::info(content));
    }

    pub fn success(&mut self, content: impl Into<String>) {
        self.add_message(CmdMessage::success(content));
    }

    pub fn warning(&mut self, content: impl Into<String>) {
        self.add_message(CmdMessage::warning(content));
    }

    /// Reports `content` now and keeps it for the final error summary.
    pub fn error(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.errors.push(content.clone());
        self.add_message(CmdMessage::error(content));
    }

    pub fn record(&mut self, outcome: NoteOutcome) {
        match &outcome {
            NoteOutcome::Written { title, path, .. } => {
                self.success(format!("Converted: {} → {}", title, path.display()));
            }
            NoteOutcome::Skipped { title } => {
                self.info(format!("Skipping note '{}': no marker tag", title));
            }
            NoteOutcome::Rejected { reason, .. } => {
                self.error(reason.clone());
            }
            NoteOutcome::Failed { title, reason } => {
                self.error(format!("Failed to process note \"{}\": {}", title, reason));
            }
        }
        self.outcomes.push(outcome);
    }

    pub fn merge(&mut self, other: ConversionReport) {
        self.messages.extend(other.messages);
        self.outcomes.extend(other.outcomes);
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match o {
            NoteOutcome::Written { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn written_count(&self) -> usize {
        self.written().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, NoteOutcome::Skipped { .. }))
    }

    pub fn rejected_count(&self) -> usize {
        self.count(|o| matches!(o, NoteOutcome::Rejected { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, NoteOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&NoteOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(*o)).count()
    }
}
