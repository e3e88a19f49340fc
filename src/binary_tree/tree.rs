use crate::binary_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *curr = Some(Box::new(Node::new(key)));
    true
}

// precondition: the tree is non-empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = match curr {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    match curr.take() {
        Some(node) => {
            let Node { key, right, .. } = *node;
            *curr = right;
            key
        },
        None => unreachable!(),
    }
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let mut curr = tree;
    loop {
        let ord = key.cmp(&curr.as_ref()?.key);
        curr = match ord {
            Ordering::Less => &mut curr.as_mut()?.left,
            Ordering::Greater => &mut curr.as_mut()?.right,
            Ordering::Equal => break,
        };
    }

    let mut node = curr.take()?;
    if node.left.is_none() || node.right.is_none() {
        let Node {
            key: removed,
            left,
            right,
        } = *node;
        *curr = left.or(right);
        return Some(removed);
    }

    let successor = remove_min(&mut node.right);
    let removed = mem::replace(&mut node.key, successor);
    *curr = Some(node);
    Some(removed)
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

/// Drops every node of the tree without recursing, since a degenerate tree can be as deep as it
/// is large.
pub fn dismantle<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{dismantle, insert, remove, Tree};
    use crate::binary_tree::node::Node;

    fn root_key(tree: &Tree<u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.key)
    }

    #[test]
    fn test_insert_does_not_rebalance() {
        let mut tree = None;
        for key in 1..=3 {
            assert!(insert(&mut tree, key));
        }
        assert_eq!(root_key(&tree), Some(1));
        assert!(!insert(&mut tree, 2));
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = None;
        for key in &[2, 1, 3, 4] {
            insert(&mut tree, *key);
        }
        assert_eq!(remove(&mut tree, &4), Some(4));
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(remove(&mut tree, &2), Some(2));
        assert_eq!(root_key(&tree), Some(3));
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = None;
        for key in &[2, 1, 5, 3, 4] {
            insert(&mut tree, *key);
        }
        assert_eq!(remove(&mut tree, &2), Some(2));
        assert_eq!(root_key(&tree), Some(3));
        // the successor's right child moved up into its place
        let right = tree.as_ref().and_then(|node| node.right.as_ref()).unwrap();
        assert_eq!(right.left.as_ref().map(|node| node.key), Some(4));
    }

    #[test]
    fn test_remove_absent() {
        let mut tree: Tree<u32> = None;
        assert_eq!(remove(&mut tree, &1), None);
        insert(&mut tree, 1);
        assert_eq!(remove(&mut tree, &0), None);
        assert_eq!(remove(&mut tree, &2), None);
        assert_eq!(root_key(&tree), Some(1));
    }

    #[test]
    fn test_dismantle_degenerate_tree() {
        // the shape ascending inserts produce, built directly to keep the test linear
        let mut tree: Tree<u32> = None;
        for key in (0..200_000).rev() {
            let mut node = Box::new(Node::new(key));
            node.right = tree.take();
            tree = Some(node);
        }
        dismantle(&mut tree);
        assert!(tree.is_none());
    }
}
