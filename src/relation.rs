//! Materialized strict order of one poset, and the closure engine that keeps
//! it transitively closed.
//!
//! Every element owns two sets: `forward` holds *all* elements strictly
//! greater than it, `backward` *all* elements strictly lesser. Neither is a
//! cover (Hasse) relation; the full closure is stored. That is what makes the
//! edits cheap:
//!
//! * adding `a < b` only has to copy `{b} ∪ forward(b)` into `a` and into
//!   every element of `backward(a)`;
//! * dropping `a < b` is safe exactly when no single element sits strictly
//!   between them, since any longer detour already shows up as one;
//! * removing an element never leaves a gap among the others, because every
//!   pair that went through it was stored on its own.

use std::collections::{HashMap, HashSet};

use crate::ids::ElementId;

#[derive(Debug, Default, Clone)]
pub struct RelationStore {
    forward: HashMap<ElementId, HashSet<ElementId>>,
    backward: HashMap<ElementId, HashSet<ElementId>>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives a fresh element empty forward and backward sets.
    pub fn attach(&mut self, v: ElementId) {
        self.forward.entry(v).or_default();
        self.backward.entry(v).or_default();
    }

    /// Drops `v` and every pair it takes part in. Returns the number of pairs
    /// dropped. The remaining pairs need no re-closing.
    pub fn detach(&mut self, v: ElementId) -> usize {
        let greater = self.forward.remove(&v).unwrap_or_default();
        let lesser = self.backward.remove(&v).unwrap_or_default();
        for s in &greater {
            if let Some(set) = self.backward.get_mut(s) {
                set.remove(&v);
            }
        }
        for p in &lesser {
            if let Some(set) = self.forward.get_mut(p) {
                set.remove(&v);
            }
        }
        greater.len() + lesser.len()
    }

    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }

    /// `a < b` is stored.
    pub fn precedes(&self, a: ElementId, b: ElementId) -> bool {
        self.forward.get(&a).is_some_and(|set| set.contains(&b))
    }

    pub fn comparable(&self, a: ElementId, b: ElementId) -> bool {
        self.precedes(a, b) || self.precedes(b, a)
    }

    /// Stores `a < b` together with everything it implies and returns the
    /// number of pairs materialized.
    ///
    /// The caller must have checked that `a != b`, that both are attached and
    /// that they are incomparable; otherwise a cycle could be stored.
    pub fn add(&mut self, a: ElementId, b: ElementId) -> usize {
        debug_assert!(a != b && !self.comparable(a, b));

        // Captured before anything below touches the sets.
        let mut greater: Vec<ElementId> = self.greater_than(b).collect();
        greater.push(b);
        let lesser: Vec<ElementId> = self.lesser_than(a).collect();

        let mut added = 0;
        for lo in std::iter::once(a).chain(lesser) {
            for &hi in &greater {
                if self.link(lo, hi) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Some element strictly between `a` and `b`, if one exists. The smallest
    /// id wins so the answer does not depend on hashing order.
    pub fn witness(&self, a: ElementId, b: ElementId) -> Option<ElementId> {
        let above_a = self.forward.get(&a)?;
        let below_b = self.backward.get(&b)?;
        let (small, large) = if above_a.len() <= below_b.len() {
            (above_a, below_b)
        } else {
            (below_b, above_a)
        };
        small.iter().filter(|&x| large.contains(x)).min().copied()
    }

    /// Drops the single pair `a < b`. Returns whether it was stored.
    ///
    /// Callers check [`RelationStore::witness`] first; dropping an implied
    /// pair breaks transitivity.
    pub fn remove(&mut self, a: ElementId, b: ElementId) -> bool {
        let dropped = self.forward.get_mut(&a).is_some_and(|set| set.remove(&b));
        if let Some(set) = self.backward.get_mut(&b) {
            set.remove(&a);
        }
        dropped
    }

    pub fn greater_than(&self, v: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.forward.get(&v).into_iter().flatten().copied()
    }

    pub fn lesser_than(&self, v: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.backward.get(&v).into_iter().flatten().copied()
    }

    /// Number of stored pairs.
    pub fn pair_count(&self) -> usize {
        self.forward.values().map(HashSet::len).sum()
    }

    pub(crate) fn forward(&self) -> &HashMap<ElementId, HashSet<ElementId>> {
        &self.forward
    }

    pub(crate) fn backward(&self) -> &HashMap<ElementId, HashSet<ElementId>> {
        &self.backward
    }

    fn link(&mut self, lo: ElementId, hi: ElementId) -> bool {
        let fresh = self.forward.entry(lo).or_default().insert(hi);
        self.backward.entry(hi).or_default().insert(lo);
        fresh
    }
}
