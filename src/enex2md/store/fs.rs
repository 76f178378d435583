use super::OutputStore;
use crate::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl OutputStore for FileStore {
    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ConvertError::Io)?;
        }
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).map_err(ConvertError::Io)?;
        Ok(())
    }
}
