mod backend;

pub use backend::{FileBackend, InMemoryBackend, SavedBackend, SavedStoreError};

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use super::domain::JobId;

/// Storage key holding the saved listing ids as a JSON array of strings.
pub const SAVED_JOBS_KEY: &str = "ghostcheck-saved-jobs";

type Listener = Arc<dyn Fn(&[JobId]) + Send + Sync>;

/// Persisted set of saved listing ids.
///
/// Every context that shares a backend sees the others' writes: `toggle` re-reads
/// the persisted set before changing it, `reload` re-reads on demand, and
/// `apply_external_change` accepts pushed notifications. The whole set is the unit
/// of last-write-wins. A missing or unparseable persisted value never replaces the
/// in-memory set. Ids are unique; duplicates in persisted state collapse to the
/// first occurrence.
pub struct SavedItemsStore<B> {
    backend: Arc<B>,
    ids: Mutex<Vec<JobId>>,
    listeners: Mutex<Vec<Listener>>,
}

impl<B> SavedItemsStore<B>
where
    B: SavedBackend + 'static,
{
    /// Open the store, loading whatever the backend holds. Unreadable or malformed
    /// state starts as an empty set.
    pub fn open(backend: Arc<B>) -> Self {
        let ids = load_ids(backend.as_ref());
        debug!(count = ids.len(), "saved items loaded");
        Self {
            backend,
            ids: Mutex::new(ids),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.lock_ids().contains(id)
    }

    pub fn count(&self) -> usize {
        self.lock_ids().len()
    }

    /// Saved ids in the order they were saved.
    pub fn ids(&self) -> Vec<JobId> {
        self.lock_ids().clone()
    }

    /// Save `id` if absent, otherwise remove it. Returns whether it is saved afterwards.
    pub fn toggle(&self, id: JobId) -> bool {
        let (saved, snapshot) = {
            let mut ids = self.lock_ids();
            if let Ok(Some(raw)) = self.backend.read(SAVED_JOBS_KEY) {
                if let Some(current) = parse_ids(&raw) {
                    *ids = current;
                }
            }

            let saved = if ids.contains(&id) {
                ids.retain(|existing| existing != &id);
                false
            } else {
                ids.push(id.clone());
                true
            };

            self.persist(&ids);
            (saved, ids.clone())
        };

        debug!(job_id = %id, saved, count = snapshot.len(), "saved item toggled");
        self.notify(&snapshot);
        saved
    }

    /// Re-read the persisted set, replacing the in-memory copy when the backend
    /// holds a usable value.
    pub fn reload(&self) -> Result<(), SavedStoreError> {
        let raw = self.backend.read(SAVED_JOBS_KEY)?;
        match raw.as_deref().and_then(parse_ids) {
            Some(current) => self.replace(current),
            None => debug!("no persisted saved items; keeping in-memory set"),
        }
        Ok(())
    }

    /// Change notification from another context. Other keys, cleared values and
    /// malformed payloads are ignored. Returns whether the set was replaced.
    pub fn apply_external_change(&self, key: &str, new_value: Option<&str>) -> bool {
        if key != SAVED_JOBS_KEY {
            return false;
        }
        match new_value.and_then(parse_ids) {
            Some(ids) => {
                self.replace(ids);
                true
            }
            None => {
                debug!(key, "ignoring unusable saved-items notification");
                false
            }
        }
    }

    /// Register a callback invoked with the full id list after every change.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&[JobId]) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Arc::new(listener));
    }

    fn replace(&self, ids: Vec<JobId>) {
        let snapshot = {
            let mut guard = self.lock_ids();
            *guard = ids;
            guard.clone()
        };
        self.notify(&snapshot);
    }

    fn persist(&self, ids: &[JobId]) {
        let payload = match serde_json::to_string(ids) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "failed to encode saved items");
                return;
            }
        };
        if let Err(err) = self.backend.write(SAVED_JOBS_KEY, &payload) {
            warn!(error = %err, "failed to persist saved items");
        }
    }

    fn notify(&self, ids: &[JobId]) {
        // Listeners run outside the lock so they may subscribe or query the store.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        for listener in &listeners {
            listener(ids);
        }
    }

    fn lock_ids(&self) -> MutexGuard<'_, Vec<JobId>> {
        self.ids
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn load_ids<B: SavedBackend>(backend: &B) -> Vec<JobId> {
    match backend.read(SAVED_JOBS_KEY) {
        Ok(Some(raw)) => parse_ids(&raw).unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!(error = %err, "saved items unreadable; starting empty");
            Vec::new()
        }
    }
}

/// Accepts only a JSON array whose entries are all strings. Repeated ids keep
/// their first position.
fn parse_ids(raw: &str) -> Option<Vec<JobId>> {
    let values = serde_json::from_str::<Vec<String>>(raw).ok()?;
    let mut ids: Vec<JobId> = Vec::with_capacity(values.len());
    for value in values {
        let id = JobId(value);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Some(ids)
}
