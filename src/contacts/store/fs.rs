use super::Backend;
use crate::error::{ContactsError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Default backing file, relative to the working directory.
pub const DEFAULT_FILENAME: &str = "contacts.json";

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(ContactsError::Io)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContactsError::Io(e)),
        }
    }

    fn write(&self, document: &str) -> Result<()> {
        self.ensure_parent()?;

        let tmp = self.tmp_path();
        if let Err(e) = fs::write(&tmp, document) {
            let _ = fs::remove_file(&tmp);
            return Err(ContactsError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(ContactsError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
