//! A sorted multiset backed by a weight-balanced binary search tree.
//!
//! Every node keeps the exact number of values in its subtree, and the two
//! sons of any node differ in weight by at most `1`. Rebalancing promotes the
//! minimum or maximum of the heavier side to be the new root of a subtree,
//! which is why extraction and insertion call each other. See
//! [`weight_balanced`] for the details.
//!
//!```
//! use wbtree::WBTree;
//!
//! let mut tree = WBTree::new();
//! for word in ["d", "b", "f", "a", "c", "e", "g"] {
//!     tree.insert(word).unwrap();
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["a", "b", "c", "d", "e", "f", "g"]);
//! assert_eq!(tree.len(), 7);
//!```

pub mod compare;
pub mod error;
#[cfg(feature = "stream")]
pub mod stream;
pub mod trees;

pub use compare::{Compare, Element, Kind};
pub use error::{CompareError, TreeError};
pub use trees::*;
