//! # posets
//!
//! A registry of independent, mutable partially ordered sets of named
//! elements.
//!
//! Each poset stores its strict order fully materialized: for every element
//! the complete set of greater and of lesser elements, not just the covering
//! edges. Insertions and deletions of elements and of order pairs keep that
//! closure exact, so asking whether `a` precedes `b` is a set lookup.
//!
//! ```
//! use posets::Posets;
//!
//! let mut reg = Posets::new();
//! let id = reg.create();
//! for name in ["a", "b", "c"] {
//!     reg.insert(id, Some(name));
//! }
//! assert!(reg.add(id, Some("a"), Some("b")));
//! assert!(reg.add(id, Some("b"), Some("c")));
//! assert!(reg.test(id, Some("a"), Some("c")));
//! // `a < c` is implied through `b`, so it cannot be dropped on its own.
//! assert!(!reg.del(id, Some("a"), Some("c")));
//! ```
mod directory;
mod error;
mod ids;
mod invariants;
mod poset;
mod registry;
mod relation;
mod shared;

pub use error::{ErrorKind, PosetError, Result};
pub use ids::{ElementId, PosetId};
pub use invariants::InvariantViolation;
pub use poset::Poset;
pub use registry::Posets;
pub use shared::SharedPosets;
