//! Error type for every checked poset operation.
//!
//! Each variant belongs to one [`ErrorKind`]. The boolean API in
//! [`crate::Posets`] collapses all of them to `false`; the checked API hands
//! them back so a host can tell a missing element from a rejected edge.

use thiserror::Error;

use crate::ids::PosetId;

pub type Result<T> = std::result::Result<T, PosetError>;

/// Coarse classification of a [`PosetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Poset id or element name is unknown.
    NotFound,
    /// Element name is already present.
    AlreadyExists,
    /// Absent name, or an element paired with itself.
    InvalidInput,
    /// The edit would break (or does not match) the stored order.
    InvariantViolation,
    /// No poset identifiers are left to hand out.
    Exhausted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PosetError {
    #[error("poset {0} does not exist")]
    UnknownPoset(PosetId),
    #[error("element `{0}` is not in the poset")]
    UnknownElement(String),
    #[error("element `{0}` is already in the poset")]
    DuplicateElement(String),
    #[error("element name is missing")]
    MissingName,
    #[error("element `{0}` cannot be ordered against itself")]
    SelfRelation(String),
    #[error("`{lesser}` and `{greater}` are already comparable")]
    AlreadyRelated { lesser: String, greater: String },
    #[error("`{lesser}` does not precede `{greater}`")]
    NotRelated { lesser: String, greater: String },
    /// Dropping the pair would leave `lesser < witness < greater` unclosed.
    #[error("`{lesser}` < `{greater}` is implied through `{witness}`")]
    Implied {
        lesser: String,
        greater: String,
        witness: String,
    },
    #[error("poset identifier space exhausted")]
    IdsExhausted,
}

impl PosetError {
    pub fn kind(&self) -> ErrorKind {
        use PosetError::*;

        match self {
            UnknownPoset(_) | UnknownElement(_) => ErrorKind::NotFound,
            DuplicateElement(_) => ErrorKind::AlreadyExists,
            MissingName | SelfRelation(_) => ErrorKind::InvalidInput,
            AlreadyRelated { .. } | NotRelated { .. } | Implied { .. } => {
                ErrorKind::InvariantViolation
            }
            IdsExhausted => ErrorKind::Exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(PosetError::UnknownPoset(PosetId(3)).kind(), ErrorKind::NotFound);
        assert_eq!(PosetError::UnknownElement("a".into()).kind(), ErrorKind::NotFound);
        assert_eq!(PosetError::DuplicateElement("a".into()).kind(), ErrorKind::AlreadyExists);
        assert_eq!(PosetError::MissingName.kind(), ErrorKind::InvalidInput);
        assert_eq!(PosetError::SelfRelation("a".into()).kind(), ErrorKind::InvalidInput);
        let implied = PosetError::Implied {
            lesser: "a".into(),
            greater: "c".into(),
            witness: "b".into(),
        };
        assert_eq!(implied.kind(), ErrorKind::InvariantViolation);
        assert_eq!(PosetError::IdsExhausted.kind(), ErrorKind::Exhausted);
    }

    #[test]
    fn messages_name_the_elements() {
        let err = PosetError::Implied {
            lesser: "a".into(),
            greater: "c".into(),
            witness: "b".into(),
        };
        assert_eq!(err.to_string(), "`a` < `c` is implied through `b`");
        assert_eq!(PosetError::UnknownPoset(PosetId(7)).to_string(), "poset 7 does not exist");
    }
}
