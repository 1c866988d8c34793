//! Error types for comparisons and tree operations.

use crate::compare::Kind;

/// Failure of a three-way comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// The two elements belong to kinds that have no order between them.
    #[error("type mismatch: cannot compare {left} with {right}")]
    KindMismatch {
        /// The kind of the left operand.
        left: Kind,
        /// The kind of the right operand.
        right: Kind,
    },
}

/// Failure of a modifying [`crate::WBTree`] operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The new element could not be compared with the tree's elements.
    /// The tree was not modified.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// A comparison failed while the tree was being restructured, so its
    /// contents can no longer be trusted. No further modifications are accepted.
    #[error("tree is poisoned: a comparison failed during rebalancing")]
    Poisoned,
}
