use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Archive is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Markup error: {0}")]
    Markup(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Attachment {index} has no data element")]
    MissingPayload { index: usize },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
