use log::trace;

use crate::directory::Directory;
use crate::error::{PosetError, Result};
use crate::ids::ElementId;
use crate::invariants::{self, check_invariants, InvariantViolation};
use crate::relation::RelationStore;

/// One mutable poset of named elements.
///
/// Names are resolved through the [`Directory`]; everything below works on
/// [`ElementId`]s. The order is kept transitively closed after every call,
/// and a call that returns `Err` has changed nothing.
#[derive(Debug, Default, Clone)]
pub struct Poset {
    names: Directory,
    order: RelationStore,
}

impl Poset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn id_of(&self, name: &str) -> Option<ElementId> {
        self.names.id_of(name)
    }

    /// Number of stored `a < b` pairs, implied ones included.
    pub fn relation_count(&self) -> usize {
        self.order.pair_count()
    }

    /// Adds an element that is comparable to nothing.
    pub fn insert(&mut self, name: &str) -> Result<ElementId> {
        let id = self
            .names
            .insert(name)
            .ok_or_else(|| PosetError::DuplicateElement(name.to_owned()))?;
        self.order.attach(id);
        trace!("inserted `{name}` as {id}");
        check_invariants!(self, "after insert");
        Ok(id)
    }

    /// Removes an element and every pair it takes part in.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let id = self.resolve(name)?;
        let dropped = self.order.detach(id);
        self.names.remove(name);
        trace!("removed `{name}` ({id}), dropping {dropped} pairs");
        check_invariants!(self, "after remove");
        Ok(())
    }

    /// Whether `a` precedes `b`. An element is reported as preceding itself.
    pub fn test(&self, a: &str, b: &str) -> Result<bool> {
        let (lo, hi) = (self.resolve(a)?, self.resolve(b)?);
        Ok(lo == hi || self.order.precedes(lo, hi))
    }

    /// Orders `a` before `b` and closes the relation transitively.
    ///
    /// Fails when the two are already comparable in either direction; for
    /// `a == b` that is always the case.
    pub fn add(&mut self, a: &str, b: &str) -> Result<()> {
        let (lo, hi) = (self.resolve(a)?, self.resolve(b)?);
        if lo == hi {
            return Err(PosetError::SelfRelation(a.to_owned()));
        }
        if self.order.comparable(lo, hi) {
            return Err(PosetError::AlreadyRelated {
                lesser: a.to_owned(),
                greater: b.to_owned(),
            });
        }
        let added = self.order.add(lo, hi);
        trace!("added `{a}` < `{b}`, materializing {added} pairs");
        check_invariants!(self, "after add");
        Ok(())
    }

    /// Drops `a < b` unless the pair is implied through another element.
    pub fn del(&mut self, a: &str, b: &str) -> Result<()> {
        let (lo, hi) = (self.resolve(a)?, self.resolve(b)?);
        if lo == hi {
            return Err(PosetError::SelfRelation(a.to_owned()));
        }
        if !self.order.precedes(lo, hi) {
            return Err(PosetError::NotRelated {
                lesser: a.to_owned(),
                greater: b.to_owned(),
            });
        }
        if let Some(witness) = self.order.witness(lo, hi) {
            return Err(PosetError::Implied {
                lesser: a.to_owned(),
                greater: b.to_owned(),
                witness: self.names.name_of(witness).unwrap_or_default().to_owned(),
            });
        }
        self.order.remove(lo, hi);
        trace!("deleted `{a}` < `{b}`");
        check_invariants!(self, "after del");
        Ok(())
    }

    /// Empties the poset and restarts local ids at zero.
    pub fn clear(&mut self) {
        self.names.clear();
        self.order.clear();
    }

    pub fn validate_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        invariants::validate(&self.names, &self.order)
    }

    fn resolve(&self, name: &str) -> Result<ElementId> {
        self.names
            .id_of(name)
            .ok_or_else(|| PosetError::UnknownElement(name.to_owned()))
    }
}
