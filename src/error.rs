use std::error;
use std::fmt;

/// A broken structural invariant reported by a set's `validate` method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    /// The in-order key at `position` is not strictly greater than the key before it.
    Unordered { position: usize },
    /// The stored length does not match the number of reachable nodes.
    LengthMismatch { expected: usize, actual: usize },
    /// An avl node's cached height differs from the height of its subtree.
    StaleHeight { stored: usize, actual: usize },
    /// An avl node's subtrees differ in height by more than one.
    Unbalanced { balance: isize },
    /// The root of a red black tree is red.
    RedRoot,
    /// A red node has a red child.
    RedRed,
    /// Two paths below the same node pass through different numbers of black nodes.
    BlackHeight { left: usize, right: usize },
    /// A child's parent link does not point back at the node that owns it.
    BrokenParent,
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unordered { position } => {
                write!(f, "key at in-order position {} is out of order", position)
            },
            Violation::LengthMismatch { expected, actual } => {
                write!(f, "expected {} keys but found {}", expected, actual)
            },
            Violation::StaleHeight { stored, actual } => {
                write!(f, "node caches height {} but its subtree has height {}", stored, actual)
            },
            Violation::Unbalanced { balance } => {
                write!(f, "node has balance factor {}", balance)
            },
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RedRed => write!(f, "red node has a red child"),
            Violation::BlackHeight { left, right } => {
                write!(f, "black heights differ: left {} and right {}", left, right)
            },
            Violation::BrokenParent => write!(f, "child does not link back to its parent"),
        }
    }
}
