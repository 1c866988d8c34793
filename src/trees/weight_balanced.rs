//! Implementation of weight-balanced trees.
//!
//! Every node stores its weight, the number of values in its subtree, and the
//! weights of the two sons of any node differ by at most `1`. This keeps the
//! height at `ceil(log2(n + 1))`.
//!
//! Instead of rotations, an imbalance is fixed by promoting the value nearest
//! to the center of the heavy side to be the new local root, and pushing the
//! old root's value down the light side. Extracting the extreme node of a
//! subtree (see [`extract_min`] and [`extract_max`]) rebalances the spine it
//! walks in the same way, so the two operations recurse into each other.
//! Since the demoted value is inserted again from inside an insertion,
//! inserting takes `O(log² n)` time. Everything else is `O(log n)`.
//!
//! Values comparing equal to an existing value are inserted to its left.
//! Rebalancing can still leave equal values on both sides of a node: when a
//! value is demoted into the right side of a promoted maximum, it may equal
//! the new root. So the left subtree of a node holds values less or equal to
//! it, and the right subtree values greater or equal. The relative order of
//! equal values isn't preserved.

use super::basic_tree::iterators::{IntoIter, Iter};
use super::basic_tree::*;
use crate::compare::{Compare, CompareError};
use crate::error::TreeError;
use std::cmp::Ordering;
use tracing::{debug, error, trace};

/// A sorted multiset, stored in a weight-balanced tree.
///
///```
/// use wbtree::WBTree;
///
/// let mut tree = WBTree::new();
/// for c in ["d", "b", "f", "a", "c", "e", "g", "a"] {
///     tree.insert(c).unwrap();
/// }
/// assert_eq!(
///     tree.iter().copied().collect::<Vec<_>>(),
///     ["a", "a", "b", "c", "d", "e", "f", "g"]
/// );
/// assert_eq!(tree.len(), 8);
/// # tree.assert_correctness();
///```
#[derive(Clone)]
pub struct WBTree<T> {
    tree: BasicTree<T>,
    poisoned: bool,
}

impl<T> WBTree<T> {
    /// Creates an empty [`WBTree`].
    pub fn new() -> Self {
        WBTree {
            tree: BasicTree::Empty,
            poisoned: false,
        }
    }

    /// The number of values in the tree, counting duplicates.
    /// This is the weight of the root.
    pub fn len(&self) -> usize {
        self.tree.weight()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns `true` if a comparison failed in the middle of restructuring
    /// the tree. A poisoned tree refuses further modifications.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// The underlying tree.
    pub fn inner(&self) -> &BasicTree<T> {
        &self.tree
    }

    pub fn into_inner(self) -> BasicTree<T> {
        self.tree
    }

    /// Iterates over the values in ascending order.
    /// The iterator is lazy and borrows the tree, so the tree can't change while it runs.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// The smallest value.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// The largest value.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the value at position `index` in ascending order.
    ///```
    /// use wbtree::WBTree;
    ///
    /// let tree = WBTree::try_from_iter((0..100).rev()).unwrap();
    /// assert_eq!(tree.get(17), Some(&17));
    /// assert_eq!(tree.get(100), None);
    ///```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.tree.select(index)
    }

    /// Removes every value. Also clears the poisoned state.
    pub fn clear(&mut self) {
        self.tree = BasicTree::Empty;
        self.poisoned = false;
    }

    #[cfg(debug_assertions)]
    /// Used for debugging. Prints a representation of the tree, like so:
    /// `< < * a * > b * >`
    /// Each pair of triangle brackets is a node, and `*` denotes empty trees.
    pub fn representation<F>(&self, print: &F) -> String
    where
        F: Fn(&T) -> String,
    {
        self.tree.representation(print)
    }

    fn poison(&mut self, err: CompareError) -> TreeError {
        error!(%err, len = self.len(), "comparison failed while rebalancing, the tree is poisoned");
        self.poisoned = true;
        TreeError::Poisoned
    }

    fn check_poisoned(&self) -> Result<(), TreeError> {
        if self.poisoned {
            Err(TreeError::Poisoned)
        } else {
            Ok(())
        }
    }
}

impl<T: Compare> WBTree<T> {
    /// Inserts a value. Values equal to existing ones are kept as well.
    ///
    /// All the comparisons against the new value are made before anything is
    /// changed, so if the value can't be compared with the tree's values,
    /// [`TreeError::Compare`] is returned and the tree is left as it was.
    ///```
    /// use wbtree::WBTree;
    ///
    /// let mut tree = WBTree::new();
    /// for x in 0..31 {
    ///     tree.insert(x).unwrap();
    /// }
    /// assert_eq!(tree.len(), 31);
    /// assert_eq!(tree.height(), 5);
    /// # tree.assert_correctness();
    ///```
    pub fn insert(&mut self, value: T) -> Result<(), TreeError> {
        self.check_poisoned()?;
        self.tree.probe(&value)?;
        insert(&mut self.tree, value).map_err(|err| self.poison(err))
    }

    /// Inserts all the values in order. Stops at the first value that fails.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Builds a tree by inserting all the values in order.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = WBTree::new();
        tree.try_extend(iter)?;
        Ok(tree)
    }

    /// Removes and returns the smallest value.
    ///```
    /// use wbtree::WBTree;
    ///
    /// let mut tree = WBTree::try_from_iter([5, 1, 4]).unwrap();
    /// assert_eq!(tree.pop_first(), Ok(Some(1)));
    /// assert_eq!(tree.pop_first(), Ok(Some(4)));
    /// assert_eq!(tree.pop_first(), Ok(Some(5)));
    /// assert_eq!(tree.pop_first(), Ok(None));
    ///```
    pub fn pop_first(&mut self) -> Result<Option<T>, TreeError> {
        self.check_poisoned()?;
        match extract_min(self.tree.take()) {
            Ok(None) => Ok(None),
            Ok(Some(min)) => {
                let BasicNode { value, right, .. } = *min;
                self.tree = right;
                debug!(len = self.len(), "popped the first value");
                Ok(Some(value))
            }
            Err(err) => Err(self.poison(err)),
        }
    }

    /// Removes and returns the largest value.
    pub fn pop_last(&mut self) -> Result<Option<T>, TreeError> {
        self.check_poisoned()?;
        match extract_max(self.tree.take()) {
            Ok(None) => Ok(None),
            Ok(Some(max)) => {
                let BasicNode { value, left, .. } = *max;
                self.tree = left;
                debug!(len = self.len(), "popped the last value");
                Ok(Some(value))
            }
            Err(err) => Err(self.poison(err)),
        }
    }

    /// Returns `true` if some value in the tree compares equal to `value`.
    pub fn contains(&self, value: &T) -> Result<bool, CompareError> {
        self.tree.contains(value)
    }

    /// The number of values strictly smaller than `value`.
    ///```
    /// use wbtree::WBTree;
    ///
    /// let tree = WBTree::try_from_iter([10, 20, 20, 30]).unwrap();
    /// assert_eq!(tree.rank(&20), Ok(1));
    /// assert_eq!(tree.rank(&25), Ok(3));
    ///```
    pub fn rank(&self, value: &T) -> Result<usize, CompareError> {
        self.tree.rank(value)
    }

    /// Checks that every node's weight is the size of its subtree, that the
    /// values are in order, and that the weights of every node's sons differ
    /// by at most `1`. Otherwise, panics.
    pub fn assert_correctness(&self) {
        self.tree.assert_correctness();
        self.assert_balance();
    }

    /// Checks that the weights of every node's sons differ by at most `1`.
    /// Otherwise, panics.
    pub fn assert_balance(&self) {
        self.tree.assert_correctness_with(Self::assert_balance_locally);
    }

    fn assert_balance_locally(node: &BasicNode<T>) {
        assert!(
            node.weight_diff().abs() <= 1,
            "node is out of balance: left weight {}, right weight {}",
            node.left().weight(),
            node.right().weight()
        );
    }
}

impl<T> Default for WBTree<T> {
    fn default() -> Self {
        WBTree::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for WBTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for WBTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a WBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts `value` into the subtree, and restores the balance on the way back up.
/// Greater values go right, equal and smaller values go left.
///
/// The comparison at a node is made before recursing, and the weights are only
/// updated after the recursive call returns, so an error on the way down
/// leaves the subtree untouched.
pub(crate) fn insert<T: Compare>(tree: &mut BasicTree<T>, value: T) -> Result<(), CompareError> {
    let node = match tree {
        BasicTree::Empty => {
            *tree = BasicTree::from_node(BasicNode::new(value));
            return Ok(());
        }
        BasicTree::Root(node) => node,
    };
    match value.compare(&node.value)? {
        Ordering::Greater => insert(&mut node.right, value)?,
        Ordering::Less | Ordering::Equal => insert(&mut node.left, value)?,
    }
    node.weight += 1;
    rebalance(tree)
}

/// Fixes the root of `tree` if one son outweighs the other by `2`.
fn rebalance<T: Compare>(tree: &mut BasicTree<T>) -> Result<(), CompareError> {
    let diff = tree.weight_diff();
    if diff.abs() < 2 {
        return Ok(());
    }
    if let Some(node) = tree.take().into_node_boxed() {
        let BasicNode {
            value, left, right, ..
        } = *node;
        let pivot = if diff > 0 {
            promote_min(value, left, right)?
        } else {
            promote_max(value, left, right)?
        };
        *tree = pivot.into();
    }
    Ok(())
}

/// Rebuilds a node out of `value` and its sons, where `right` is heavier:
/// the minimum of `right` becomes the root, and `value` is inserted into `left`.
fn promote_min<T: Compare>(
    value: T,
    left: BasicTree<T>,
    right: BasicTree<T>,
) -> Result<Box<BasicNode<T>>, CompareError> {
    let mut pivot = match extract_min(right)? {
        Some(pivot) => pivot,
        None => return Ok(join(value, left, BasicTree::Empty)),
    };
    trace!(
        left = left.weight(),
        right = pivot.weight() - 1,
        "promoting the minimum of the right side"
    );
    pivot.left = left;
    insert(&mut pivot.left, value)?;
    pivot.weight += pivot.left.weight();
    Ok(pivot)
}

/// Mirror image of [`promote_min`]: the maximum of `left` becomes the root,
/// and `value` is inserted into `right`.
fn promote_max<T: Compare>(
    value: T,
    left: BasicTree<T>,
    right: BasicTree<T>,
) -> Result<Box<BasicNode<T>>, CompareError> {
    let mut pivot = match extract_max(left)? {
        Some(pivot) => pivot,
        None => return Ok(join(value, BasicTree::Empty, right)),
    };
    trace!(
        left = pivot.weight() - 1,
        right = right.weight(),
        "promoting the maximum of the left side"
    );
    pivot.right = right;
    insert(&mut pivot.right, value)?;
    pivot.weight += pivot.right.weight();
    Ok(pivot)
}

fn join<T>(value: T, left: BasicTree<T>, right: BasicTree<T>) -> Box<BasicNode<T>> {
    let mut node = Box::new(BasicNode::new(value));
    node.left = left;
    node.right = right;
    node.rebuild();
    node
}

/// Detaches the node holding the minimum of the subtree.
///
/// The returned node has no left son, and its right son holds the rest of the
/// subtree, balanced. Its weight counts itself and its right son, so it can
/// serve directly as a new root once a left son is given to it.
/// Returns `None` for an empty subtree.
pub fn extract_min<T: Compare>(
    tree: BasicTree<T>,
) -> Result<Option<Box<BasicNode<T>>>, CompareError> {
    match tree.into_node_boxed() {
        None => Ok(None),
        Some(node) => extract_min_node(node).map(Some),
    }
}

fn extract_min_node<T: Compare>(
    mut node: Box<BasicNode<T>>,
) -> Result<Box<BasicNode<T>>, CompareError> {
    let left = match node.left.take().into_node_boxed() {
        // this node is the minimum, and its right son is everything else.
        None => return Ok(node),
        Some(left) => left,
    };

    let mut min = extract_min_node(left)?;
    node.left = min.right.take();
    node.weight -= 1;
    let weight = node.weight;

    // the left side lost a value, so the right side might be too heavy now.
    let right_weight = node.right.weight();
    min.right = if right_weight > weight - right_weight {
        let BasicNode {
            value, left, right, ..
        } = *node;
        promote_min(value, left, right)?.into()
    } else {
        node.into()
    };
    min.weight = weight + 1;
    Ok(min)
}

/// Detaches the node holding the maximum of the subtree.
///
/// Mirror image of [`extract_min`]: the returned node has no right son, and
/// its left son holds the rest of the subtree, balanced.
/// Returns `None` for an empty subtree.
pub fn extract_max<T: Compare>(
    tree: BasicTree<T>,
) -> Result<Option<Box<BasicNode<T>>>, CompareError> {
    match tree.into_node_boxed() {
        None => Ok(None),
        Some(node) => extract_max_node(node).map(Some),
    }
}

fn extract_max_node<T: Compare>(
    mut node: Box<BasicNode<T>>,
) -> Result<Box<BasicNode<T>>, CompareError> {
    let right = match node.right.take().into_node_boxed() {
        None => return Ok(node),
        Some(right) => right,
    };

    let mut max = extract_max_node(right)?;
    node.right = max.left.take();
    node.weight -= 1;
    let weight = node.weight;

    let left_weight = node.left.weight();
    max.left = if left_weight > weight - left_weight {
        let BasicNode {
            value, left, right, ..
        } = *node;
        promote_max(value, left, right)?.into()
    } else {
        node.into()
    };
    max.weight = weight + 1;
    Ok(max)
}
