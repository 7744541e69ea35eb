//! In-memory builder sessions.
//!
//! The original app kept its store in browser local storage; here the service
//! owns one `PortfolioStore` per session id, discarded with the process. No
//! durable persistence by design. Stores are plain registry-owned values, not
//! globals, so nothing can bypass the named-operation interface.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use super::PortfolioStore;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<Uuid, PortfolioStore>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .expect("session registry lock poisoned")
            .insert(id, PortfolioStore::new());
        id
    }

    /// Runs `f` against the session's store under the registry lock.
    /// Store operations are synchronous and short, so the critical section
    /// stays small; never hold this across an await point.
    pub fn with_store<R>(&self, id: Uuid, f: impl FnOnce(&mut PortfolioStore) -> R) -> Option<R> {
        let mut sessions = self
            .inner
            .write()
            .expect("session registry lock poisoned");
        sessions.get_mut(&id).map(f)
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.inner
            .write()
            .expect("session registry lock poisoned")
            .remove(&id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("session registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PersonalInfoPatch;

    #[test]
    fn test_sessions_are_isolated() {
        let registry = SessionRegistry::new();
        let a = registry.create();
        let b = registry.create();

        registry.with_store(a, |store| {
            store.update_personal_info(PersonalInfoPatch {
                full_name: Some("Only A".to_string()),
                ..Default::default()
            });
        });

        let b_name =
            registry.with_store(b, |store| store.data().personal_info.full_name.clone());
        assert_eq!(b_name.as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_session_yields_none() {
        let registry = SessionRegistry::new();
        assert!(registry.with_store(Uuid::new_v4(), |_| ()).is_none());
    }

    #[test]
    fn test_remove_discards_the_session() {
        let registry = SessionRegistry::new();
        let id = registry.create();
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }
}
