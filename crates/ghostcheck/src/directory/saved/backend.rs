use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key/value persistence behind the saved-items store.
pub trait SavedBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, SavedStoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), SavedStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SavedStoreError {
    #[error("saved-items storage unavailable: {0}")]
    Unavailable(String),
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Process-local backend. Clones share the same map, which lets several stores
/// act as separate contexts over one persisted state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SavedBackend for InMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, SavedStoreError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| SavedStoreError::Unavailable("backend mutex poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SavedStoreError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| SavedStoreError::Unavailable("backend mutex poisoned".to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `root`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SavedStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(SavedStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl SavedBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, SavedStoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SavedStoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}
