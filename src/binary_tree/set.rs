use crate::binary_tree::node::Node;
use crate::binary_tree::tree;
use crate::error::Violation;
use crate::traversal::{self, InOrder, Order, Traversal};
use crate::OrderedSet;
use log::debug;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Keys are placed by plain comparison and the tree is never restructured, so its shape depends
/// entirely on insertion order. Random input gives an expected height of `O(log n)`; sorted input
/// gives a height of `n`.
///
/// # Examples
///
/// ```
/// use ordered_trees::binary_tree::BinarySet;
///
/// let mut set = BinarySet::new();
/// set.insert(1);
/// set.insert(2);
/// set.insert(3);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.height(), 3);
/// assert_eq!(set.remove(&2), Some(2));
/// ```
pub struct BinarySet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> BinarySet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySet<T>`.
    pub fn new() -> Self {
        BinarySet { tree: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key is
    /// already present.
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None`.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        debug!("clearing binary set of {} keys", self.len);
        tree::dismantle(&mut self.tree);
        self.len = 0;
    }

    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        traversal::height(self.root())
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> BinarySetIter<'_, T> {
        BinarySetIter {
            inner: InOrder::new(self.root()),
        }
    }

    /// Returns every key of the set in the given traversal order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        traversal::traverse(self.root(), order, self.len)
    }

    /// Checks that in-order keys are strictly increasing and that the length matches the node
    /// count.
    pub fn validate(&self) -> Result<(), Violation> {
        traversal::check_order(self.root(), self.len)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.tree.as_deref()
    }
}

impl<T> OrderedSet<T> for BinarySet<T>
where
    T: Ord,
{
    const NAME: &'static str = "binary tree";

    fn insert(&mut self, key: T) -> bool {
        BinarySet::insert(self, key)
    }

    fn remove(&mut self, key: &T) -> bool {
        BinarySet::remove(self, key).is_some()
    }

    fn contains(&self, key: &T) -> bool {
        BinarySet::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        BinarySet::height(self)
    }

    fn traverse(&self, order: Order) -> Traversal<'_, T> {
        BinarySet::traverse(self, order)
    }

    fn validate(&self) -> Result<(), Violation> {
        BinarySet::validate(self)
    }
}

impl<T> Drop for BinarySet<T> {
    fn drop(&mut self) {
        tree::dismantle(&mut self.tree);
    }
}

impl<'a, T> IntoIterator for &'a BinarySet<T>
where
    T: 'a + Ord,
{
    type IntoIter = BinarySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `BinarySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BinarySetIter<'a, T> {
    inner: InOrder<'a, &'a Node<T>>,
}

impl<'a, T> Iterator for BinarySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> Default for BinarySet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinarySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = BinarySet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for BinarySet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Debug for BinarySet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
