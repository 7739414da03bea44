use std::sync::Arc;

use parking_lot::Mutex;

use crate::ids::PosetId;
use crate::registry::Posets;

/// A [`Posets`] registry that can be handed to several threads.
///
/// The whole registry sits behind one lock: `add` and `del` touch many
/// elements' sets before returning, so no finer-grained locking would make
/// them atomic. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedPosets {
    inner: Arc<Mutex<Posets>>,
}

impl SharedPosets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut Posets) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn create(&self) -> PosetId {
        self.inner.lock().create()
    }

    pub fn destroy(&self, id: PosetId) {
        self.inner.lock().destroy(id)
    }

    pub fn exists(&self, id: PosetId) -> bool {
        self.inner.lock().exists(id)
    }

    pub fn clear(&self, id: PosetId) {
        self.inner.lock().clear(id)
    }

    pub fn size(&self, id: PosetId) -> usize {
        self.inner.lock().size(id)
    }

    pub fn insert(&self, id: PosetId, name: Option<&str>) -> bool {
        self.inner.lock().insert(id, name)
    }

    pub fn remove(&self, id: PosetId, name: Option<&str>) -> bool {
        self.inner.lock().remove(id, name)
    }

    pub fn add(&self, id: PosetId, a: Option<&str>, b: Option<&str>) -> bool {
        self.inner.lock().add(id, a, b)
    }

    pub fn del(&self, id: PosetId, a: Option<&str>, b: Option<&str>) -> bool {
        self.inner.lock().del(id, a, b)
    }

    pub fn test(&self, id: PosetId, a: Option<&str>, b: Option<&str>) -> bool {
        self.inner.lock().test(id, a, b)
    }
}
