//! The basic tree module.
//! This module implements owned binary trees whose nodes know the size of
//! their subtree. The balancing itself lives in [`crate::weight_balanced`].

pub mod iterators;

use crate::compare::{Compare, CompareError};
use std::cmp::Ordering;

/// The type that is used for weight bookkeeping.
pub type Weight = usize;

/// A basic tree. might be empty.
/// Every node exclusively owns its subtrees, so moving a subtree from one
/// node to another is a move of its [`Box`].
#[derive(Clone)]
pub enum BasicTree<T> {
    Empty,
    Root(Box<BasicNode<T>>),
}
use BasicTree::*;

/// A basic node. can be viewed as a non-empty basic tree: it always has at least one value.
#[derive(Clone)]
pub struct BasicNode<T> {
    pub(crate) value: T,
    pub(crate) weight: Weight,
    pub(crate) left: BasicTree<T>,
    pub(crate) right: BasicTree<T>,
}

impl<T> BasicNode<T> {
    /// Creates a leaf of weight `1`.
    pub fn new(value: T) -> BasicNode<T> {
        BasicNode {
            value,
            weight: 1,
            left: Empty,
            right: Empty,
        }
    }

    /// Returns the value stored in this node specifically.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The number of values in this node's subtree, including itself.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn left(&self) -> &BasicTree<T> {
        &self.left
    }

    pub fn right(&self) -> &BasicTree<T> {
        &self.right
    }

    /// Returns `right.weight() - left.weight()`
    pub fn weight_diff(&self) -> isize {
        self.right.weight() as isize - self.left.weight() as isize
    }

    /// Recomputes the weight from the sons' weights.
    pub(crate) fn rebuild(&mut self) {
        self.weight = 1 + self.left.weight() + self.right.weight();
    }

    /// Checks that the stored weight is the sum of the sons' weights,
    /// and that the sons' roots are ordered around this node's value:
    /// the left son compares less or equal, the right son greater or equal.
    /// Otherwise, panics.
    pub fn assert_correctness_locally(&self)
    where
        T: Compare,
    {
        assert_eq!(
            self.weight,
            1 + self.left.weight() + self.right.weight(),
            "weight is not the size of the subtree"
        );
        if let Some(left) = self.left.node() {
            let ord = left.value.compare(&self.value);
            assert!(
                matches!(ord, Ok(Ordering::Less | Ordering::Equal)),
                "left son is out of order"
            );
        }
        if let Some(right) = self.right.node() {
            let ord = right.value.compare(&self.value);
            assert!(
                matches!(ord, Ok(Ordering::Greater | Ordering::Equal)),
                "right son is out of order"
            );
        }
    }

    #[cfg(debug_assertions)]
    fn representation<F>(&self, print: &F) -> String
    where
        F: Fn(&T) -> String,
    {
        format!(
            "{} {} {}",
            self.left.representation(print),
            print(&self.value),
            self.right.representation(print)
        )
    }
}

impl<T> BasicTree<T> {
    pub fn new() -> Self {
        Empty
    }

    /// Constructs a new non-empty tree from a node.
    pub fn from_node(node: BasicNode<T>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// The number of values in the tree. `0` for an empty tree.
    pub fn weight(&self) -> Weight {
        match self {
            Empty => 0,
            Root(node) => node.weight,
        }
    }

    /// Returns `right.weight() - left.weight()` at the root, `0` for an empty tree.
    pub fn weight_diff(&self) -> isize {
        match self.node() {
            None => 0,
            Some(node) => node.weight_diff(),
        }
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        match self.node() {
            None => 0,
            Some(node) => 1 + std::cmp::max(node.left.height(), node.right.height()),
        }
    }

    /// Returns The inner node.
    pub fn node(&self) -> Option<&BasicNode<T>> {
        match self {
            Empty => None,
            Root(node) => Some(&**node),
        }
    }

    /// Returns The inner node.
    pub fn node_mut(&mut self) -> Option<&mut BasicNode<T>> {
        match self {
            Empty => None,
            Root(node) => Some(&mut **node),
        }
    }

    /// Returns The inner node, still boxed.
    pub fn into_node_boxed(self) -> Option<Box<BasicNode<T>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Moves the tree out, leaving an empty tree in its place.
    pub fn take(&mut self) -> BasicTree<T> {
        std::mem::replace(self, Empty)
    }

    /// The leftmost value.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.value)
    }

    /// The rightmost value.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns the value at position `index` in the in-order sequence,
    /// walking down by the subtree weights.
    pub fn select(&self, mut index: usize) -> Option<&T> {
        let mut tree = self;
        while let Some(node) = tree.node() {
            let left_weight = node.left.weight();
            match index.cmp(&left_weight) {
                Ordering::Less => tree = &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => {
                    index -= left_weight + 1;
                    tree = &node.right;
                }
            }
        }
        None
    }

    /// Counts the values that compare strictly less than `value`.
    pub fn rank(&self, value: &T) -> Result<usize, CompareError>
    where
        T: Compare,
    {
        let mut tree = self;
        let mut res = 0;
        while let Some(node) = tree.node() {
            if value.compare(&node.value)? == Ordering::Greater {
                res += node.left.weight() + 1;
                tree = &node.right;
            } else {
                tree = &node.left;
            }
        }
        Ok(res)
    }

    /// Searches for a value comparing equal to `value`.
    pub fn contains(&self, value: &T) -> Result<bool, CompareError>
    where
        T: Compare,
    {
        let mut tree = self;
        while let Some(node) = tree.node() {
            match value.compare(&node.value)? {
                Ordering::Less => tree = &node.left,
                Ordering::Equal => return Ok(true),
                Ordering::Greater => tree = &node.right,
            }
        }
        Ok(false)
    }

    /// Performs every comparison that inserting `value` would perform on its
    /// way down, without modifying anything.
    /// Equal values go left.
    pub fn probe(&self, value: &T) -> Result<(), CompareError>
    where
        T: Compare,
    {
        let mut tree = self;
        while let Some(node) = tree.node() {
            tree = match value.compare(&node.value)? {
                Ordering::Greater => &node.right,
                _ => &node.left,
            };
        }
        Ok(())
    }

    /// Runs `func` on every node of the tree. `func` is expected to panic
    /// on any violated invariant.
    pub fn assert_correctness_with<F>(&self, func: F)
    where
        F: Fn(&BasicNode<T>) + Copy,
    {
        if let Some(node) = self.node() {
            func(node);
            node.left.assert_correctness_with(func);
            node.right.assert_correctness_with(func);
        }
    }

    /// Checks that invariants remain correct. i.e., that every node's weight
    /// is the size of its subtree, and that the values are ordered.
    /// If it is not, panics.
    pub fn assert_correctness(&self)
    where
        T: Compare,
    {
        self.assert_correctness_with(BasicNode::assert_correctness_locally);
        self.assert_ordered();
    }

    /// Checks the in-order sequence is sorted. The local checks of
    /// [`BasicNode::assert_correctness_locally`] only compare neighbouring nodes.
    fn assert_ordered(&self)
    where
        T: Compare,
    {
        let mut iter = self.iter();
        if let Some(mut prev) = iter.next() {
            for value in iter {
                assert!(
                    matches!(
                        prev.compare(value),
                        Ok(Ordering::Less | Ordering::Equal)
                    ),
                    "in-order sequence is out of order"
                );
                prev = value;
            }
        }
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> iterators::Iter<'_, T> {
        iterators::Iter::new(self)
    }

    #[cfg(debug_assertions)]
    /// Used for debugging. Prints a representation of the tree, like so:
    /// `< < * a * > b * >`
    /// Each pair of triangle brackets is a node, and `*` denotes empty trees.
    pub fn representation<F>(&self, print: &F) -> String
    where
        F: Fn(&T) -> String,
    {
        if let Some(node) = self.node() {
            format!("<{} >", node.representation(print))
        } else {
            String::from("*")
        }
    }
}

impl<T> Default for BasicTree<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> From<BasicNode<T>> for BasicTree<T> {
    fn from(node: BasicNode<T>) -> Self {
        BasicTree::from_node(node)
    }
}

impl<T> From<Box<BasicNode<T>>> for BasicTree<T> {
    fn from(node: Box<BasicNode<T>>) -> Self {
        Root(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> BasicTree<i32> {
        BasicTree::from_node(BasicNode::new(value))
    }

    /// Builds `< < * 1 * > 2 < * 3 * > >` by hand.
    fn small() -> BasicTree<i32> {
        let mut node = BasicNode::new(2);
        node.left = leaf(1);
        node.right = leaf(3);
        node.rebuild();
        node.into()
    }

    #[test]
    fn weights_and_height() {
        let tree = small();
        assert_eq!(tree.weight(), 3);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.weight_diff(), 0);
        assert_eq!(BasicTree::<i32>::new().weight(), 0);
        assert_eq!(BasicTree::<i32>::new().height(), 0);
    }

    #[test]
    fn select_and_rank() {
        let tree = small();
        assert_eq!(tree.select(0), Some(&1));
        assert_eq!(tree.select(2), Some(&3));
        assert_eq!(tree.select(3), None);
        assert_eq!(tree.rank(&0), Ok(0));
        assert_eq!(tree.rank(&2), Ok(1));
        assert_eq!(tree.rank(&10), Ok(3));
    }

    #[test]
    fn first_last_contains() {
        let tree = small();
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&3));
        assert_eq!(tree.contains(&3), Ok(true));
        assert_eq!(tree.contains(&4), Ok(false));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn representation_shows_the_shape() {
        let tree = small();
        assert_eq!(
            tree.representation(&|v: &i32| v.to_string()),
            "<<* 1 * > 2 <* 3 * > >"
        );
    }

    #[test]
    #[should_panic(expected = "weight is not the size of the subtree")]
    fn wrong_weight_is_caught() {
        let mut tree = small();
        if let Some(node) = tree.node_mut() {
            node.weight = 5;
        }
        tree.assert_correctness();
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn misplaced_value_is_caught() {
        let mut node = BasicNode::new(2);
        node.left = leaf(3);
        node.rebuild();
        BasicTree::from(node).assert_correctness();
    }
}
