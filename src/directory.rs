use std::collections::HashMap;
use std::sync::Arc;

use ordermap::OrderMap;

use crate::ids::ElementId;

/// Name table of one poset: element name <-> dense local id.
///
/// Each name is interned once and shared by both directions of the mapping.
/// Local ids come from a counter that only moves forward, so a removed
/// element's id is never given to a later one until the table is cleared.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    /// Stable order-of-appearance: name -> id
    idx: OrderMap<Arc<str>, ElementId>,
    /// Reverse index: id -> name
    names: HashMap<ElementId, Arc<str>>,
    next: u64,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.idx.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<ElementId> {
        self.idx.get(name).copied()
    }

    pub fn name_of(&self, id: ElementId) -> Option<&str> {
        self.names.get(&id).map(|n| n.as_ref())
    }

    /// Registers `name` under the next local id. `None` if it is already taken.
    pub fn insert(&mut self, name: &str) -> Option<ElementId> {
        if self.idx.contains_key(name) {
            return None;
        }
        let id = ElementId(self.next);
        self.next += 1;
        let name: Arc<str> = Arc::from(name);
        self.idx.insert(Arc::clone(&name), id);
        self.names.insert(id, name);
        Some(id)
    }

    pub fn remove(&mut self, name: &str) -> Option<ElementId> {
        let id = self.idx.remove(name)?;
        self.names.remove(&id);
        Some(id)
    }

    /// Forgets every name and restarts local ids at zero.
    pub fn clear(&mut self) {
        self.idx.clear();
        self.names.clear();
        self.next = 0;
    }

    /// Live ids in order of insertion.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.idx.values().copied()
    }

    /// Both halves of the mapping agree with each other.
    pub(crate) fn is_consistent(&self) -> bool {
        self.idx.len() == self.names.len()
            && self
                .idx
                .iter()
                .all(|(name, id)| self.names.get(id).is_some_and(|n| n == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_assigned_in_insertion_order() {
        let mut dir = Directory::new();
        assert_eq!(dir.insert("a"), Some(ElementId(0)));
        assert_eq!(dir.insert("b"), Some(ElementId(1)));
        assert_eq!(dir.insert("a"), None);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.id_of("b"), Some(ElementId(1)));
        assert_eq!(dir.name_of(ElementId(0)), Some("a"));
        assert!(dir.is_consistent());
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut dir = Directory::new();
        dir.insert("a");
        dir.insert("b");
        assert_eq!(dir.remove("a"), Some(ElementId(0)));
        assert_eq!(dir.remove("a"), None);
        assert_eq!(dir.name_of(ElementId(0)), None);
        assert_eq!(dir.insert("a"), Some(ElementId(2)));
        assert_eq!(dir.ids().collect::<Vec<_>>(), vec![ElementId(1), ElementId(2)]);
    }

    #[test]
    fn clear_restarts_the_counter() {
        let mut dir = Directory::new();
        dir.insert("a");
        dir.insert("b");
        dir.clear();
        assert!(dir.is_empty());
        assert_eq!(dir.name_of(ElementId(1)), None);
        assert_eq!(dir.insert("b"), Some(ElementId(0)));
    }

    #[test]
    fn names_compare_bytewise() {
        let mut dir = Directory::new();
        dir.insert("A");
        assert!(!dir.contains("a"));
        assert!(!dir.contains("A "));
        assert_eq!(dir.insert(""), Some(ElementId(1)));
        assert!(dir.contains(""));
    }
}
