use std::collections::HashMap;

use log::debug;

use crate::error::{PosetError, Result};
use crate::ids::{ElementId, PosetId};
use crate::poset::Poset;

/// Owner of every poset, keyed by [`PosetId`].
///
/// Two ways in:
/// * `try_*` methods return [`Result`] and take plain `&str` names;
/// * the plain methods (`insert`, `add`, `test`, ...) take `Option<&str>`,
///   treat `None` as an absent name, and report any failure as `false`
///   (or `0`, or nothing). A `false` always means nothing changed.
#[derive(Debug)]
pub struct Posets {
    posets: HashMap<PosetId, Poset>,
    next: Option<u32>,
}

impl Posets {
    pub fn new() -> Self {
        Self {
            posets: HashMap::new(),
            next: Some(0),
        }
    }

    /// Number of live posets, destroyed ones excluded.
    pub fn len(&self) -> usize {
        self.posets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posets.is_empty()
    }

    pub fn exists(&self, id: PosetId) -> bool {
        self.posets.contains_key(&id)
    }

    pub fn get(&self, id: PosetId) -> Option<&Poset> {
        self.posets.get(&id)
    }

    /// Allocates a fresh, empty poset.
    pub fn try_create(&mut self) -> Result<PosetId> {
        let raw = self.next.ok_or(PosetError::IdsExhausted)?;
        self.next = raw.checked_add(1);
        let id = PosetId(raw);
        self.posets.insert(id, Poset::new());
        debug!("created poset {id}");
        Ok(id)
    }

    /// Allocates a fresh, empty poset.
    ///
    /// # Panics
    ///
    /// Once all 2^32 identifiers have been handed out.
    pub fn create(&mut self) -> PosetId {
        match self.try_create() {
            Ok(id) => id,
            Err(e) => panic!("cannot create poset: {e}"),
        }
    }

    /// Discards the poset. Unknown ids are ignored; the id is not reused.
    pub fn destroy(&mut self, id: PosetId) {
        if self.posets.remove(&id).is_some() {
            debug!("destroyed poset {id}");
        }
    }

    /// Empties the poset but keeps its id allocated. Unknown ids are ignored.
    pub fn clear(&mut self, id: PosetId) {
        if let Some(poset) = self.posets.get_mut(&id) {
            poset.clear();
            debug!("cleared poset {id}");
        }
    }

    /// Element count, `0` for an unknown poset.
    pub fn size(&self, id: PosetId) -> usize {
        self.posets.get(&id).map_or(0, Poset::len)
    }

    pub fn try_insert(&mut self, id: PosetId, name: &str) -> Result<ElementId> {
        self.poset_mut(id)?.insert(name)
    }

    pub fn try_remove(&mut self, id: PosetId, name: &str) -> Result<()> {
        self.poset_mut(id)?.remove(name)
    }

    pub fn try_add(&mut self, id: PosetId, a: &str, b: &str) -> Result<()> {
        self.poset_mut(id)?.add(a, b)
    }

    pub fn try_del(&mut self, id: PosetId, a: &str, b: &str) -> Result<()> {
        self.poset_mut(id)?.del(a, b)
    }

    pub fn try_test(&self, id: PosetId, a: &str, b: &str) -> Result<bool> {
        self.poset(id)?.test(a, b)
    }

    pub fn insert(&mut self, id: PosetId, name: Option<&str>) -> bool {
        let res = self.poset_mut(id).and_then(|p| p.insert(given(name)?));
        accepted(id, "insert", res)
    }

    pub fn remove(&mut self, id: PosetId, name: Option<&str>) -> bool {
        let res = self.poset_mut(id).and_then(|p| p.remove(given(name)?));
        accepted(id, "remove", res)
    }

    pub fn add(&mut self, id: PosetId, a: Option<&str>, b: Option<&str>) -> bool {
        let res = self
            .poset_mut(id)
            .and_then(|p| p.add(given(a)?, given(b)?));
        accepted(id, "add", res)
    }

    pub fn del(&mut self, id: PosetId, a: Option<&str>, b: Option<&str>) -> bool {
        let res = self
            .poset_mut(id)
            .and_then(|p| p.del(given(a)?, given(b)?));
        accepted(id, "del", res)
    }

    /// Whether `a` precedes `b`; `false` on any lookup failure.
    pub fn test(&self, id: PosetId, a: Option<&str>, b: Option<&str>) -> bool {
        let res = self.poset(id).and_then(|p| p.test(given(a)?, given(b)?));
        match res {
            Ok(related) => related,
            Err(e) => {
                debug!("poset {id}: test rejected: {e}");
                false
            }
        }
    }

    fn poset(&self, id: PosetId) -> Result<&Poset> {
        self.posets.get(&id).ok_or(PosetError::UnknownPoset(id))
    }

    fn poset_mut(&mut self, id: PosetId) -> Result<&mut Poset> {
        self.posets.get_mut(&id).ok_or(PosetError::UnknownPoset(id))
    }
}

impl Default for Posets {
    fn default() -> Self {
        Self::new()
    }
}

fn given(name: Option<&str>) -> Result<&str> {
    name.ok_or(PosetError::MissingName)
}

fn accepted<T>(id: PosetId, op: &str, res: Result<T>) -> bool {
    match res {
        Ok(_) => true,
        Err(e) => {
            debug!("poset {id}: {op} rejected: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut reg = Posets::new();
        let a = reg.create();
        let b = reg.create();
        assert_eq!((a, b), (PosetId(0), PosetId(1)));
        reg.destroy(a);
        assert!(!reg.exists(a));
        assert_eq!(reg.create(), PosetId(2));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn default_registry_starts_at_zero() {
        let mut reg = Posets::default();
        assert!(reg.is_empty());
        assert_eq!(reg.try_create(), Ok(PosetId(0)));
    }

    #[test]
    fn last_id_exhausts_the_space() {
        let mut reg = Posets::new();
        reg.next = Some(u32::MAX);
        assert_eq!(reg.try_create(), Ok(PosetId(u32::MAX)));
        assert_eq!(reg.try_create(), Err(PosetError::IdsExhausted));
        assert!(reg.exists(PosetId(u32::MAX)));
    }

    #[test]
    fn missing_names_are_rejected() {
        let mut reg = Posets::new();
        let id = reg.create();
        assert!(!reg.insert(id, None));
        assert!(reg.insert(id, Some("a")));
        assert!(!reg.add(id, None, Some("a")));
        assert!(!reg.add(id, Some("a"), None));
        assert!(!reg.del(id, None, None));
        assert!(!reg.test(id, Some("a"), None));
        assert!(!reg.remove(id, None));
        assert_eq!(reg.size(id), 1);
    }

    #[test]
    fn unknown_poset_is_reported() {
        let mut reg = Posets::new();
        assert_eq!(reg.try_insert(PosetId(4), "a"), Err(PosetError::UnknownPoset(PosetId(4))));
        assert_eq!(reg.try_test(PosetId(4), "a", "a"), Err(PosetError::UnknownPoset(PosetId(4))));
        assert_eq!(reg.size(PosetId(4)), 0);
        reg.clear(PosetId(4));
        reg.destroy(PosetId(4));
        assert!(reg.is_empty());
    }

    #[test]
    fn checked_and_boolean_paths_agree() {
        let mut reg = Posets::new();
        let id = reg.create();
        assert_eq!(reg.try_insert(id, "a"), Ok(ElementId(0)));
        assert!(reg.insert(id, Some("b")));
        assert_eq!(reg.try_add(id, "a", "b"), Ok(()));
        assert!(reg.test(id, Some("a"), Some("b")));
        assert_eq!(reg.try_test(id, "b", "a"), Ok(false));
        assert!(reg.del(id, Some("a"), Some("b")));
        assert!(matches!(reg.try_del(id, "a", "b"), Err(PosetError::NotRelated { .. })));
        assert_eq!(reg.try_remove(id, "a"), Ok(()));
        assert!(!reg.remove(id, Some("a")));
    }

    #[test]
    fn clear_keeps_the_id() {
        let mut reg = Posets::new();
        let id = reg.create();
        reg.insert(id, Some("a"));
        reg.clear(id);
        assert!(reg.exists(id));
        assert_eq!(reg.size(id), 0);
        assert_eq!(reg.try_insert(id, "z"), Ok(ElementId(0)));
    }
}
