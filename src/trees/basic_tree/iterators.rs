//! In-order iterators over a [`BasicTree`].
//!
//! Both iterators are lazy: they keep a stack holding the path from the root
//! to the next value, so at any moment they hold `O(height)` entries.

use super::*;

/// Borrowing iterator, yielding the values in ascending order.
///
/// Since every node knows its weight, the iterator knows exactly how many
/// values remain.
pub struct Iter<'a, T> {
    // every node on the stack still has to yield its value and its right subtree.
    stack: Vec<&'a BasicNode<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(tree: &'a BasicTree<T>) -> Self {
        let mut res = Iter {
            stack: vec![],
            remaining: tree.weight(),
        };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: &'a BasicTree<T>) {
        while let Some(node) = tree.node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, yielding the values in ascending order.
/// Nodes are taken apart as the iteration passes them, so dropping the
/// iterator midway drops only what is left.
pub struct IntoIter<T> {
    // the nodes on the stack have had their left subtree removed already.
    stack: Vec<Box<BasicNode<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub fn new(tree: BasicTree<T>) -> Self {
        let mut res = IntoIter {
            stack: vec![],
            remaining: tree.weight(),
        };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: BasicTree<T>) {
        while let Some(mut node) = tree.into_node_boxed() {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let BasicNode { value, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// A left-leaning chain `3 -> 2 -> 1`, with `4` right of `3`.
    fn chain() -> BasicTree<i32> {
        let mut two = BasicNode::new(2);
        two.left = BasicNode::new(1).into();
        two.rebuild();
        let mut three = BasicNode::new(3);
        three.left = two.into();
        three.right = BasicNode::new(4).into();
        three.rebuild();
        three.into()
    }

    #[test]
    fn iter_is_in_order() {
        let tree = chain();
        assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn iter_knows_its_length() {
        let tree = chain();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.clone().count(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_is_in_order() {
        let iter = IntoIter::new(chain());
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_tree() {
        let tree: BasicTree<i32> = BasicTree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(IntoIter::new(tree).next(), None);
    }
}
