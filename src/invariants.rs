//! Whole-poset consistency checks.
//!
//! These walk every stored pair and are far more expensive than any single
//! operation; the engine only runs them itself under `cfg(test)` or the
//! `strict-invariants` feature.

use thiserror::Error;

use crate::directory::Directory;
use crate::ids::ElementId;
use crate::relation::RelationStore;

/// A broken structural invariant. Seeing one means the engine has a bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{0} is stored as greater than itself")]
    Reflexive(ElementId),
    #[error("{0} and {1} are each stored as greater than the other")]
    Symmetric(ElementId, ElementId),
    #[error("{a} < {b} < {c} is stored but {a} < {c} is not")]
    NotTransitive {
        a: ElementId,
        b: ElementId,
        c: ElementId,
    },
    #[error("{lo} < {hi} is stored in only one direction")]
    Unmirrored { lo: ElementId, hi: ElementId },
    #[error("{0} has relation sets but no name, or a name but no relation sets")]
    Orphan(ElementId),
    #[error("name table and id table disagree")]
    Directory,
}

/// Asserts invariants after a mutation when invariant checking is enabled.
macro_rules! check_invariants {
    ($poset:expr, $($ctx:tt)*) => {
        #[cfg(any(test, feature = "strict-invariants"))]
        if let Err(e) = $poset.validate_invariants() {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
pub(crate) use check_invariants;

pub(crate) fn validate(dir: &Directory, rel: &RelationStore) -> Result<(), InvariantViolation> {
    if !dir.is_consistent() {
        return Err(InvariantViolation::Directory);
    }

    let forward = rel.forward();
    let backward = rel.backward();
    for id in dir.ids() {
        if !forward.contains_key(&id) || !backward.contains_key(&id) {
            return Err(InvariantViolation::Orphan(id));
        }
    }
    if let Some(&id) = forward
        .keys()
        .chain(backward.keys())
        .find(|id| dir.name_of(**id).is_none())
    {
        return Err(InvariantViolation::Orphan(id));
    }

    for (&a, greater) in forward {
        if greater.contains(&a) {
            return Err(InvariantViolation::Reflexive(a));
        }
        for &b in greater {
            if !backward.get(&b).is_some_and(|set| set.contains(&a)) {
                return Err(InvariantViolation::Unmirrored { lo: a, hi: b });
            }
            let Some(above_b) = forward.get(&b) else {
                return Err(InvariantViolation::Orphan(b));
            };
            if above_b.contains(&a) {
                return Err(InvariantViolation::Symmetric(a, b));
            }
            if let Some(&c) = above_b.iter().find(|&c| !greater.contains(c)) {
                return Err(InvariantViolation::NotTransitive { a, b, c });
            }
        }
    }

    for (&b, lesser) in backward {
        if lesser.contains(&b) {
            return Err(InvariantViolation::Reflexive(b));
        }
        for &a in lesser {
            if !forward.get(&a).is_some_and(|set| set.contains(&b)) {
                return Err(InvariantViolation::Unmirrored { lo: a, hi: b });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(names: &[&str]) -> (Directory, RelationStore) {
        let mut dir = Directory::new();
        let mut rel = RelationStore::new();
        for name in names {
            if let Some(id) = dir.insert(name) {
                rel.attach(id);
            }
        }
        (dir, rel)
    }

    #[test]
    fn closed_store_passes() {
        let (dir, mut rel) = populated(&["a", "b", "c"]);
        rel.add(ElementId(0), ElementId(1));
        rel.add(ElementId(1), ElementId(2));
        assert_eq!(validate(&dir, &rel), Ok(()));
    }

    #[test]
    fn dropping_an_implied_pair_is_caught() {
        let (dir, mut rel) = populated(&["a", "b", "c"]);
        rel.add(ElementId(0), ElementId(1));
        rel.add(ElementId(1), ElementId(2));
        rel.remove(ElementId(0), ElementId(2));
        assert_eq!(
            validate(&dir, &rel),
            Err(InvariantViolation::NotTransitive {
                a: ElementId(0),
                b: ElementId(1),
                c: ElementId(2),
            })
        );
    }

    #[test]
    fn unnamed_sets_are_orphans() {
        let (dir, mut rel) = populated(&["a"]);
        rel.attach(ElementId(9));
        assert_eq!(validate(&dir, &rel), Err(InvariantViolation::Orphan(ElementId(9))));
    }

    #[test]
    fn named_element_without_sets_is_an_orphan() {
        let (mut dir, rel) = populated(&["a"]);
        dir.insert("b");
        assert_eq!(validate(&dir, &rel), Err(InvariantViolation::Orphan(ElementId(1))));
    }
}
