//! This module contains the tree types.
//! [`basic_tree`] holds the owned nodes and their weights, and
//! [`weight_balanced`] keeps them balanced.

pub mod basic_tree;
pub mod weight_balanced;

pub use weight_balanced::WBTree;
