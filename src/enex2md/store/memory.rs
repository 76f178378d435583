use super::OutputStore;
use crate::error::{ConvertError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// Keeps every write in memory. Writing into a directory that was never
/// ensured fails the same way the filesystem would.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    pub fn read(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Written file paths, sorted.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl OutputStore for InMemoryStore {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !parent.as_os_str().is_empty() && !self.dirs.contains(parent) {
            return Err(ConvertError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {}", parent.display()),
            )));
        }
        self.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
