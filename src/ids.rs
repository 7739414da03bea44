use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a poset inside a [`crate::Posets`] registry.
///
/// Allocated in increasing order and never handed out twice, even after the
/// poset it named is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosetId(pub u32);

/// Dense per-poset element identifier, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl PosetId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl ElementId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u32> for PosetId {
    fn from(raw: u32) -> Self {
        PosetId(raw)
    }
}

impl From<PosetId> for u32 {
    fn from(id: PosetId) -> Self {
        id.0
    }
}

impl fmt::Display for PosetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
