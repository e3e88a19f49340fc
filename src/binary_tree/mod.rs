//! Binary search tree without any rebalancing, kept as a baseline for the balanced trees.
//!
//! Sorted input degrades the tree into a linked list, so every operation walks the tree
//! iteratively instead of recursing.

mod node;
mod set;
mod tree;

pub use self::set::{BinarySet, BinarySetIter};
