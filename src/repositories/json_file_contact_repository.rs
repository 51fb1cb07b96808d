use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Contact repository backed by a single JSON file.
///
/// The file holds a pretty-printed JSON array of contacts. A missing file is
/// an empty store; any other read failure or malformed content is a
/// `StorageError`. Writes go to a sibling temp file that is then renamed over
/// the target, so readers see either the old or the new collection.
#[derive(Debug, Clone)]
pub struct JsonFileContactRepository {
    path: PathBuf,
}

impl JsonFileContactRepository {
    /// Create a repository for the store file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("contacts"));
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.location(),
            source,
        }
    }
}

#[async_trait]
impl ContactRepository for JsonFileContactRepository {
    async fn read_all(&self) -> StorageResult<Vec<Contact>> {
        debug!(path = %self.path.display(), "reading contacts");

        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                error!(path = %self.path.display(), error = %source, "failed to read contacts");
                return Err(StorageError::Read {
                    path: self.location(),
                    source,
                });
            }
        };

        let contacts: Vec<Contact> =
            serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
                path: self.location(),
                source,
            })?;

        debug!(count = contacts.len(), "contacts loaded");
        Ok(contacts)
    }

    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        debug!(path = %self.path.display(), count = contacts.len(), "writing contacts");

        let mut buf = serde_json::to_string_pretty(contacts).map_err(StorageError::Serialize)?;
        buf.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        let tmp_path = self.temp_path();
        let written = match fs::write(&tmp_path, &buf).await {
            Ok(()) => fs::rename(&tmp_path, &self.path).await,
            Err(source) => Err(source),
        };

        if let Err(source) = written {
            error!(path = %self.path.display(), error = %source, "failed to write contacts");
            let _ = fs::remove_file(&tmp_path).await;
            return Err(self.write_error(source));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
