use crate::avl_tree::node::Node;
use crate::error::Violation;
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn balance_factor<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Outcome of inserting into a subtree, as seen by the subtree's parent.
enum Inserted {
    /// The key was already present and nothing changed.
    Duplicate,
    /// A node was attached. Holds the comparison of the new key against the subtree's root, or
    /// `None` if the new node is the subtree's root.
    Added(Option<Ordering>),
}

// `child_ord` is the comparison of the inserted key against the child on the heavy side.
fn rebalance_insert<T>(mut node: Box<Node<T>>, child_ord: Option<Ordering>) -> Box<Node<T>> {
    node.update();
    let balance = node.balance();

    if balance > 1 {
        match child_ord {
            Some(Ordering::Less) => {
                trace!("avl insert: left-left case, rotating right");
                rotate_right(node)
            },
            Some(Ordering::Greater) => {
                trace!("avl insert: left-right case, double rotation");
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            },
            _ => node,
        }
    } else if balance < -1 {
        match child_ord {
            Some(Ordering::Greater) => {
                trace!("avl insert: right-right case, rotating left");
                rotate_left(node)
            },
            Some(Ordering::Less) => {
                trace!("avl insert: right-left case, double rotation");
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            },
            _ => node,
        }
    } else {
        node
    }
}

fn insert_node<T>(tree: &mut Tree<T>, key: T) -> Inserted
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Inserted::Added(None);
        },
    };

    let ord = key.cmp(&node.key);
    let child_ret = match ord {
        Ordering::Less => insert_node(&mut node.left, key),
        Ordering::Greater => insert_node(&mut node.right, key),
        Ordering::Equal => Inserted::Duplicate,
    };

    match child_ret {
        Inserted::Duplicate => {
            *tree = Some(node);
            Inserted::Duplicate
        },
        Inserted::Added(child_ord) => {
            *tree = Some(rebalance_insert(node, child_ord));
            Inserted::Added(Some(ord))
        },
    }
}

/// Inserts `key` into the tree, returning `false` without modifying the tree if the key is
/// already present.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match insert_node(tree, key) {
        Inserted::Duplicate => false,
        Inserted::Added(_) => true,
    }
}

// Rebalancing after a removal keys on the child's balance factor since the removed key is gone.
fn rebalance_remove<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();
    let balance = node.balance();

    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            trace!("avl remove: left-right case, double rotation");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!("avl remove: left-left case, rotating right");
        }
        rotate_right(node)
    } else if balance < -1 {
        if balance_factor(&node.right) > 0 {
            trace!("avl remove: right-left case, double rotation");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!("avl remove: right-right case, rotating left");
        }
        rotate_left(node)
    } else {
        node
    }
}

// precondition: the tree is non-empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.left.is_some() {
        let ret = remove_min(&mut node.left);
        *tree = Some(rebalance_remove(node));
        ret
    } else {
        let Node { key, right, .. } = *node;
        *tree = right;
        key
    }
}

/// Removes `key` from the tree and returns it, or returns `None` if the key is not present.
///
/// Every ancestor of the removed node is rebalanced on the way back up.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = tree.take()?;

    let ret = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() || node.right.is_none() {
                let Node {
                    key: removed,
                    left,
                    right,
                    ..
                } = *node;
                *tree = left.or(right);
                return Some(removed);
            }
            let successor = remove_min(&mut node.right);
            Some(mem::replace(&mut node.key, successor))
        },
    };

    *tree = Some(if ret.is_some() {
        rebalance_remove(node)
    } else {
        node
    });
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Recomputes every subtree height and checks it against the cached height and the balance
/// bound. Returns the height of `tree`.
pub fn check_balance<T>(tree: &Tree<T>) -> Result<usize, Violation> {
    match tree {
        None => Ok(0),
        Some(ref node) => {
            let left = check_balance(&node.left)?;
            let right = check_balance(&node.right)?;
            let actual = cmp::max(left, right) + 1;
            if node.height != actual {
                return Err(Violation::StaleHeight {
                    stored: node.height,
                    actual,
                });
            }
            let balance = left as isize - right as isize;
            if balance.abs() > 1 {
                return Err(Violation::Unbalanced { balance });
            }
            Ok(actual)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{check_balance, insert, remove, Tree};
    use crate::avl_tree::node::Node;

    fn root_key(tree: &Tree<u32>) -> u32 {
        tree.as_ref().map(|node| node.key).unwrap()
    }

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            assert!(insert(&mut tree, *key));
            check_balance(&tree).unwrap();
        }
        tree
    }

    #[test]
    fn test_insert_left_left() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_insert_right_right() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_insert_left_right() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_insert_right_left() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_insert_duplicate_is_noop() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!insert(&mut tree, 1));
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_remove_left_left() {
        // removing 5 leaves 3 with a left-heavy left child
        let mut tree = build(&[3, 2, 5, 1]);
        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(root_key(&tree), 2);
        check_balance(&tree).unwrap();
    }

    #[test]
    fn test_remove_left_balanced_child() {
        // the left child has balance factor zero, so a single rotation suffices
        let mut tree = build(&[4, 2, 5, 1, 3]);
        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(3));
    }

    #[test]
    fn test_remove_left_right() {
        let mut tree = build(&[3, 1, 4, 2]);
        assert_eq!(remove(&mut tree, &4), Some(4));
        assert_eq!(root_key(&tree), 2);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_remove_right_right() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(root_key(&tree), 3);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_remove_right_left() {
        let mut tree = build(&[2, 1, 4, 3]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(root_key(&tree), 3);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = build(&[2, 1, 4, 3, 5]);
        assert_eq!(remove(&mut tree, &2), Some(2));
        assert_eq!(root_key(&tree), 3);
        check_balance(&tree).unwrap();
    }

    #[test]
    fn test_remove_rebalances_every_ancestor() {
        // a fibonacci-shaped tree where one removal triggers rotations at two levels
        let mut tree = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        check_balance(&tree).unwrap();
        assert_eq!(remove(&mut tree, &12), Some(12));
        check_balance(&tree).unwrap();
        assert_eq!(root_key(&tree), 5);
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &4), None);
        assert_eq!(check_balance(&tree), Ok(2));
    }

    #[test]
    fn test_check_balance_detects_stale_height() {
        let mut node = Box::new(Node::new(1));
        node.height = 3;
        assert!(check_balance(&Some(node)).is_err());
    }
}
