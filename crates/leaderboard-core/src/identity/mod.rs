//! Persistent per-device user identity.
//!
//! The identity is created once (a random UUID v4) on first use, persisted
//! through a [`KeyValueStore`], and read from the in-process cache afterwards.

mod store;

pub use store::*;

use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

use crate::config::identity::USER_ID_KEY;

pub struct IdentityStore {
    store: Arc<dyn KeyValueStore>,
    current: Mutex<Option<String>>,
}

impl IdentityStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            current: Mutex::new(None),
        }
    }

    /// Identity kept only for the lifetime of this process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The current user id, loading or creating it on first call.
    ///
    /// The check-and-set runs under a lock, so concurrent first calls agree
    /// on a single id and persist it once.
    pub fn current_user_id(&self) -> String {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = current.as_ref() {
            return id.clone();
        }

        let id = match self.store.get(USER_ID_KEY).filter(|id| !id.is_empty()) {
            Some(id) => {
                tracing::debug!("Loaded user id {}", id);
                id
            }
            None => {
                let id = Self::generate();
                tracing::info!("Created user id {}", id);
                self.persist(&id);
                id
            }
        };

        *current = Some(id.clone());
        id
    }

    /// Replace the current user id and persist it.
    pub fn set_user_id(&self, id: impl Into<String>) {
        let id = id.into();
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        self.persist(&id);
        *current = Some(id);
    }

    /// Discard the current user id in favour of a freshly generated one.
    pub fn reset(&self) -> String {
        let id = Self::generate();
        self.set_user_id(id.clone());
        id
    }

    fn generate() -> String {
        Uuid::new_v4().to_string()
    }

    fn persist(&self, id: &str) {
        // The id stays usable for this process even if it could not be stored.
        if let Err(e) = self.store.set(USER_ID_KEY, id) {
            tracing::warn!("Failed to persist user id: {}", e);
        }
    }
}

impl std::fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
