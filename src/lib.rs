//! Ordered sets backed by three kinds of binary search tree, and a driver that compares them.
//!
//! - [`binary_tree::BinarySet`] never rebalances and serves as the baseline.
//! - [`avl_tree::AvlSet`] keeps the heights of sibling subtrees within one of each other.
//! - [`red_black_tree::RedBlackSet`] colors nodes red or black and keeps every root-to-leaf path
//!   at the same black height.
//!
//! All three implement [`OrderedSet`], so callers such as the [`bench`] driver can feed them the
//! same key sequence and compare them.
//!
//! # Examples
//!
//! ```
//! use ordered_trees::avl_tree::AvlSet;
//! use ordered_trees::red_black_tree::RedBlackSet;
//! use ordered_trees::{Order, OrderedSet};
//!
//! fn load<S: OrderedSet<u32> + Default>(keys: &[u32]) -> S {
//!     let mut set = S::default();
//!     for key in keys {
//!         set.insert(*key);
//!     }
//!     set
//! }
//!
//! let avl: AvlSet<u32> = load(&[5, 1, 4, 2, 3]);
//! let red_black: RedBlackSet<u32> = load(&[5, 1, 4, 2, 3]);
//! assert!(avl.traverse(Order::In).eq(red_black.traverse(Order::In)));
//! ```

pub mod arena;
pub mod avl_tree;
pub mod bench;
pub mod binary_tree;
mod error;
pub mod red_black_tree;
mod traversal;

pub use self::error::Violation;
pub use self::traversal::{Order, ParseOrderError, Traversal};

/// The operations shared by every set in this crate.
///
/// Sets hold distinct keys: inserting a key that is already present is a no-op, as is removing a
/// key that is absent.
pub trait OrderedSet<T>
where
    T: Ord,
{
    /// A human readable name for the underlying tree, used in reports.
    const NAME: &'static str;

    /// Inserts a key, returning `false` if it was already present.
    fn insert(&mut self, key: T) -> bool;

    /// Removes a key, returning `false` if it was not present.
    fn remove(&mut self, key: &T) -> bool;

    fn contains(&self, key: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes on the longest root-to-leaf path. An empty set has height 0.
    fn height(&self) -> usize;

    fn traverse(&self, order: Order) -> Traversal<'_, T>;

    /// Checks the structural invariants of the underlying tree.
    fn validate(&self) -> Result<(), Violation>;
}
