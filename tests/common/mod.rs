use itertools::Itertools;
use rand::{self, Rng};
use wbtree::basic_tree::BasicTree;
use wbtree::{Compare, WBTree};

/// Inserts the values one by one, checking the whole tree after every insertion.
pub fn build_checked<T: Compare>(values: impl IntoIterator<Item = T>) -> WBTree<T> {
    let mut tree = WBTree::new();
    for (i, value) in values.into_iter().enumerate() {
        tree.insert(value).unwrap();
        assert_eq!(tree.len(), i + 1);
        tree.assert_correctness();
    }
    tree
}

/// Asserts the traversal is non-decreasing.
pub fn assert_sorted<T: Ord + std::fmt::Debug>(tree: &WBTree<T>) {
    for (a, b) in tree.iter().tuple_windows() {
        assert!(a <= b, "{:?} comes before {:?}", a, b);
    }
}

/// Checks `weight(n) == 1 + weight(n.left) + weight(n.right)` everywhere,
/// without relying on the tree's own assertions.
pub fn count_nodes<T>(tree: &BasicTree<T>) -> usize {
    match tree.node() {
        None => 0,
        Some(node) => {
            let count = 1 + count_nodes(node.left()) + count_nodes(node.right());
            assert_eq!(node.weight(), count);
            count
        }
    }
}

/// The smallest possible height of a binary tree with `len` nodes.
pub fn min_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

pub fn random_values(len: usize, max: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}
