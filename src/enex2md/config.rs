use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "enex2md.json";

const DEFAULT_INPUT_DIR: &str = "input_sap";
const DEFAULT_OUTPUT_DIR: &str = "SAP_Materials";
const DEFAULT_MARKER_TAG: &str = "# SAP";
const DEFAULT_MAX_TAGS: usize = 2;
const DEFAULT_ARCHIVE_EXT: &str = ".enex";
const DEFAULT_NOTE_EXT: &str = ".md";

/// Language of the labels written into converted notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

/// Fixed strings used in the metadata header and attachment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub tags: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub attachments: &'static str,
}

impl Language {
    pub fn labels(self) -> Labels {
        match self {
            Language::Ja => Labels {
                tags: "タグ",
                created: "作成日",
                updated: "更新日",
                attachments: "添付ファイル",
            },
            Language::En => Labels {
                tags: "Tags",
                created: "Created",
                updated: "Updated",
                attachments: "Attachments",
            },
        }
    }
}

impl std::str::FromStr for Language {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(ConvertError::Config(format!("Unknown language: {}", other))),
        }
    }
}

/// Configuration for a conversion run, optionally stored in `enex2md.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Directory scanned for archives
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Root of the generated tree
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Tag a note must carry to be converted
    #[serde(default = "default_marker_tag")]
    pub marker_tag: String,

    /// Most tags (marker included) a note may carry before it is rejected
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,

    #[serde(default = "default_archive_ext")]
    pub archive_ext: String,

    #[serde(default = "default_note_ext")]
    pub note_ext: String,

    #[serde(default)]
    pub language: Language,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_marker_tag() -> String {
    DEFAULT_MARKER_TAG.to_string()
}

fn default_max_tags() -> usize {
    DEFAULT_MAX_TAGS
}

fn default_archive_ext() -> String {
    DEFAULT_ARCHIVE_EXT.to_string()
}

fn default_note_ext() -> String {
    DEFAULT_NOTE_EXT.to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            marker_tag: default_marker_tag(),
            max_tags: default_max_tags(),
            archive_ext: default_archive_ext(),
            note_ext: default_note_ext(),
            language: Language::default(),
        }
    }
}

impl ConverterConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Load `enex2md.json` from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(config_path)
    }

    /// Load an explicit config file; unlike [`ConverterConfig::load`] a missing file is an error
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(ConvertError::Io)?;
        let mut config: ConverterConfig =
            serde_json::from_str(&content).map_err(ConvertError::Serialization)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ConvertError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ConvertError::Serialization)?;
        fs::write(&config_path, content).map_err(ConvertError::Io)?;
        Ok(config_path)
    }

    pub fn set_archive_ext(&mut self, ext: &str) {
        self.archive_ext = with_leading_dot(ext);
    }

    pub fn set_note_ext(&mut self, ext: &str) {
        self.note_ext = with_leading_dot(ext);
    }

    pub fn labels(&self) -> Labels {
        self.language.labels()
    }

    pub fn validate(&self) -> Result<()> {
        if self.marker_tag.is_empty() {
            return Err(ConvertError::Config("marker_tag cannot be empty".into()));
        }
        if self.max_tags == 0 {
            return Err(ConvertError::Config(
                "max_tags must leave room for the marker tag".into(),
            ));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.archive_ext = with_leading_dot(&self.archive_ext);
        self.note_ext = with_leading_dot(&self.note_ext);
    }
}

fn with_leading_dot(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input_sap"));
        assert_eq!(config.output_dir, PathBuf::from("SAP_Materials"));
        assert_eq!(config.marker_tag, "# SAP");
        assert_eq!(config.max_tags, 2);
        assert_eq!(config.archive_ext, ".enex");
        assert_eq!(config.note_ext, ".md");
        assert_eq!(config.language, Language::Ja);
    }

    #[test]
    fn test_set_ext_normalizes_dot() {
        let mut config = ConverterConfig::default();
        config.set_note_ext("markdown");
        assert_eq!(config.note_ext, ".markdown");
        config.set_archive_ext(".xml");
        assert_eq!(config.archive_ext, ".xml");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(ConverterConfig::load_file(temp_dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"marker_tag": "@export", "note_ext": "txt", "language": "en"}"#,
        )
        .unwrap();

        let config = ConverterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.marker_tag, "@export");
        assert_eq!(config.note_ext, ".txt");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.max_tags, 2);
        assert_eq!(config.input_dir, PathBuf::from("input_sap"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"marker_tag": ""}"#,
        )
        .unwrap();
        assert!(matches!(
            ConverterConfig::load(temp_dir.path()),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ConverterConfig::new("in", "out");
        config.language = Language::En;
        let path = config.save(temp_dir.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));

        let loaded = ConverterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Ja);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Ja.labels().attachments, "添付ファイル");
    }
}
