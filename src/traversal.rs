//! Whole-tree traversals shared by every set in this crate.

use crate::error::Violation;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::vec;

/// The order in which `traverse` visits the keys of a tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

impl Order {
    /// All traversal orders, in the order the driver prints them.
    pub const ALL: [Order; 3] = [Order::In, Order::Pre, Order::Post];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::In => write!(f, "in-order"),
            Order::Pre => write!(f, "pre-order"),
            Order::Post => write!(f, "post-order"),
        }
    }
}

/// Error returned when parsing an unknown traversal order name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOrderError(String);

impl fmt::Display for ParseOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown traversal order `{}` (expected in, pre, or post)", self.0)
    }
}

impl std::error::Error for ParseOrderError {}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "inorder" | "in-order" => Ok(Order::In),
            "pre" | "preorder" | "pre-order" => Ok(Order::Pre),
            "post" | "postorder" | "post-order" => Ok(Order::Post),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

/// A finite sequence of keys produced by a single traversal of a tree.
///
/// Calling `traverse` again on an unmodified tree produces the same sequence.
pub struct Traversal<'a, T> {
    keys: vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Traversal<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Traversal<'a, T> {}

/// A read-only view of a tree node that the shared traversal routines can walk.
///
/// Box-linked trees implement this on `&Node<T>`; arena-backed trees implement it on a small
/// copyable (arena, handle) pair.
pub(crate) trait Cursor<'a>: Copy {
    type Key: 'a;

    fn key(self) -> &'a Self::Key;

    fn left(self) -> Option<Self>;

    fn right(self) -> Option<Self>;
}

pub(crate) fn traverse<'a, C>(root: Option<C>, order: Order, len: usize) -> Traversal<'a, C::Key>
where
    C: Cursor<'a>,
{
    let mut keys = Vec::with_capacity(len);
    match order {
        Order::In => keys.extend(InOrder::new(root)),
        Order::Pre => {
            let mut stack: Vec<C> = root.into_iter().collect();
            while let Some(node) = stack.pop() {
                keys.push(node.key());
                stack.extend(node.right());
                stack.extend(node.left());
            }
        },
        Order::Post => {
            // node, right, left reversed is left, right, node
            let mut stack: Vec<C> = root.into_iter().collect();
            while let Some(node) = stack.pop() {
                keys.push(node.key());
                stack.extend(node.left());
                stack.extend(node.right());
            }
            keys.reverse();
        },
    }
    Traversal {
        keys: keys.into_iter(),
    }
}

/// Lazy in-order iterator over a tree, driven by an explicit stack.
pub(crate) struct InOrder<'a, C> {
    current: Option<C>,
    stack: Vec<C>,
    marker: PhantomData<&'a ()>,
}

impl<'a, C> InOrder<'a, C> {
    pub(crate) fn new(root: Option<C>) -> Self {
        InOrder {
            current: root,
            stack: Vec::new(),
            marker: PhantomData,
        }
    }
}

impl<'a, C> Iterator for InOrder<'a, C>
where
    C: Cursor<'a>,
{
    type Item = &'a C::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            node.key()
        })
    }
}

/// Number of nodes on the longest root-to-leaf path. An empty tree has height 0.
pub(crate) fn height<'a, C>(root: Option<C>) -> usize
where
    C: Cursor<'a>,
{
    let mut max_depth = 0;
    let mut stack: Vec<(C, usize)> = root.into_iter().map(|node| (node, 1)).collect();
    while let Some((node, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        stack.extend(node.left().map(|child| (child, depth + 1)));
        stack.extend(node.right().map(|child| (child, depth + 1)));
    }
    max_depth
}

/// Checks that an in-order walk yields strictly increasing keys and exactly `len` of them.
pub(crate) fn check_order<'a, C>(root: Option<C>, len: usize) -> Result<(), Violation>
where
    C: Cursor<'a>,
    C::Key: Ord,
{
    let mut count = 0;
    let mut prev: Option<&C::Key> = None;
    for key in InOrder::new(root) {
        if let Some(prev) = prev {
            if prev >= key {
                return Err(Violation::Unordered { position: count });
            }
        }
        prev = Some(key);
        count += 1;
    }
    if count != len {
        return Err(Violation::LengthMismatch {
            expected: len,
            actual: count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Order;

    #[test]
    fn test_parse_order() {
        assert_eq!("in".parse::<Order>(), Ok(Order::In));
        assert_eq!("PreOrder".parse::<Order>(), Ok(Order::Pre));
        assert_eq!("post-order".parse::<Order>(), Ok(Order::Post));
        assert!("level".parse::<Order>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for order in Order::ALL.iter() {
            assert_eq!(order.to_string().parse::<Order>(), Ok(*order));
        }
    }
}
