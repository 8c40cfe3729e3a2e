//! JSON file snapshot store.
//!
//! The whole snapshot is one pretty-printed JSON document. Saves write a
//! temporary file next to the target, flush it to disk and rename it over the
//! target, so readers see either the old document or the new one.

use boxoffice_core::snapshot_store::{SnapshotStore, SnapshotStoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// [`SnapshotStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _snapshot: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Creates a store for `path`. Nothing is touched until the first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _snapshot: PhantomData,
        }
    }

    /// Path of the JSON document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SnapshotStoreError {
        SnapshotStoreError::Io {
            location: self.path.display().to_string(),
            source,
        }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl<T> SnapshotStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<T>, SnapshotStoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error(error)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|error| {
                SnapshotStoreError::Serialization(format!("{}: {error}", self.path.display()))
            })
    }

    fn save(&self, snapshot: &T) -> Result<(), SnapshotStoreError> {
        let temp = NamedTempFile::new_in(self.directory()).map_err(|e| self.io_error(e))?;

        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, snapshot)
                .map_err(|error| SnapshotStoreError::Serialization(error.to_string()))?;
            writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        temp.persist(&self.path)
            .map_err(|error| self.io_error(error.error))?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
