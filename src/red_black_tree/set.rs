use crate::error::Violation;
use crate::red_black_tree::node::{Color, NodeRef};
use crate::red_black_tree::tree::Tree;
use crate::traversal::{self, InOrder, Order, Traversal};
use crate::OrderedSet;
use log::debug;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, a red node never has a red child, and every path from a node down to an
/// absent child passes through the same number of black nodes. Together these bound the height
/// of the tree by `2 * log2(n + 1)`.
///
/// Nodes live in an arena and link to their parents by index, so rebalancing walks upward from
/// the mutated node without re-descending from the root.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert!(set.contains(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the set.
    pub fn contains(&self, key: &T) -> bool {
        self.tree.contains(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing red black set of {} keys", self.len());
        self.tree.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        traversal::height(self.tree.root())
    }

    /// Returns `true` if the root is black, or the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (1..=1000).collect();
    /// assert!(set.is_root_black());
    /// assert!(set.height() <= 20);
    /// ```
    pub fn is_root_black(&self) -> bool {
        self.tree.root_color() != Some(Color::Red)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            inner: InOrder::new(self.tree.root()),
        }
    }

    /// Returns every key of the set in the given traversal order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        traversal::traverse(self.tree.root(), order, self.len())
    }

    /// Checks every structural invariant of the underlying tree: strictly increasing in-order
    /// keys, a length matching the node count, the red black coloring rules, and consistent
    /// parent links.
    pub fn validate(&self) -> Result<(), Violation> {
        self.tree.check_colors()?;
        traversal::check_order(self.tree.root(), self.len())
    }
}

impl<T> OrderedSet<T> for RedBlackSet<T>
where
    T: Ord,
{
    const NAME: &'static str = "RedBlack tree";

    fn insert(&mut self, key: T) -> bool {
        RedBlackSet::insert(self, key)
    }

    fn remove(&mut self, key: &T) -> bool {
        RedBlackSet::remove(self, key).is_some()
    }

    fn contains(&self, key: &T) -> bool {
        RedBlackSet::contains(self, key)
    }

    fn len(&self) -> usize {
        RedBlackSet::len(self)
    }

    fn height(&self) -> usize {
        RedBlackSet::height(self)
    }

    fn traverse(&self, order: Order) -> Traversal<'_, T> {
        RedBlackSet::traverse(self, order)
    }

    fn validate(&self) -> Result<(), Violation> {
        RedBlackSet::validate(self)
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a + Ord,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    inner: InOrder<'a, NodeRef<'a, T>>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
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

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
