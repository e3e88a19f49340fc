use crate::arena::{Arena, Handle};
use crate::error::Violation;
use crate::red_black_tree::node::{Color, Link, Node, NodeRef};
use log::trace;
use std::cmp::Ordering;
use std::mem;

/// Arena-backed red black tree. Every node stores the handle of its parent so that fixups can
/// walk upwards from the point of mutation.
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Link,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|handle| NodeRef {
            arena: &self.arena,
            handle,
        })
    }

    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|handle| self.arena[handle].color)
    }

    fn color(&self, link: Link) -> Color {
        match link {
            None => Color::Black,
            Some(handle) => self.arena[handle].color,
        }
    }

    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(handle) = link {
            self.arena[handle].color = color;
        }
    }

    // Points whatever linked to `old` (its parent's child slot or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    fn rotate_left(&mut self, node: Handle) {
        let child = self.arena[node]
            .right
            .expect("Expected right child node to be `Some`.");
        let grandchild = self.arena[child].left;

        self.arena[node].right = grandchild;
        if let Some(grandchild) = grandchild {
            self.arena[grandchild].parent = Some(node);
        }

        let parent = self.arena[node].parent;
        self.arena[child].parent = parent;
        self.replace_child(parent, node, Some(child));

        self.arena[child].left = Some(node);
        self.arena[node].parent = Some(child);
    }

    fn rotate_right(&mut self, node: Handle) {
        let child = self.arena[node]
            .left
            .expect("Expected left child node to be `Some`.");
        let grandchild = self.arena[child].right;

        self.arena[node].left = grandchild;
        if let Some(grandchild) = grandchild {
            self.arena[grandchild].parent = Some(node);
        }

        let parent = self.arena[node].parent;
        self.arena[child].parent = parent;
        self.replace_child(parent, node, Some(child));

        self.arena[child].right = Some(node);
        self.arena[node].parent = Some(child);
    }

    fn min_node(&self, mut node: Handle) -> Handle {
        while let Some(left) = self.arena[node].left {
            node = left;
        }
        node
    }

    fn max_node(&self, mut node: Handle) -> Handle {
        while let Some(right) = self.arena[node].right {
            node = right;
        }
        node
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.min_node(root)].key)
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.max_node(root)].key)
    }

    fn find(&self, key: &T) -> Link
    where
        T: Ord,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.find(key).is_some()
    }

    /// Inserts `key` as a red leaf and restores the red black properties. Returns `false` without
    /// modifying the tree if the key is already present.
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let mut parent = None;
        let mut curr = self.root;
        let mut ord = Ordering::Equal;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            ord = key.cmp(&node.key);
            parent = curr;
            curr = match ord {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return false,
            };
        }

        let new_node = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(new_node),
            Some(parent) => {
                if ord == Ordering::Less {
                    self.arena[parent].left = Some(new_node);
                } else {
                    self.arena[parent].right = Some(new_node);
                }
            },
        }

        self.fix_insert(new_node);
        true
    }

    fn fix_insert(&mut self, mut node: Handle) {
        while Some(node) != self.root && self.arena[node].color == Color::Red {
            let mut parent = match self.arena[node].parent {
                Some(parent) if self.arena[parent].color == Color::Red => parent,
                _ => break,
            };
            // a red parent is never the root, so the grandparent exists
            let grandparent = match self.arena[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            if self.arena[grandparent].left == Some(parent) {
                let uncle = self.arena[grandparent].right;
                if self.color(uncle) == Color::Red {
                    trace!("red black insert: red uncle, recoloring");
                    self.set_color(uncle, Color::Black);
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    node = grandparent;
                } else {
                    if self.arena[parent].right == Some(node) {
                        trace!("red black insert: left-right shape, rotating parent left");
                        self.rotate_left(parent);
                        mem::swap(&mut node, &mut parent);
                    }
                    trace!("red black insert: left-left shape, rotating grandparent right");
                    self.rotate_right(grandparent);
                    self.swap_colors(parent, grandparent);
                    node = parent;
                }
            } else {
                let uncle = self.arena[grandparent].left;
                if self.color(uncle) == Color::Red {
                    trace!("red black insert: red uncle, recoloring");
                    self.set_color(uncle, Color::Black);
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    node = grandparent;
                } else {
                    if self.arena[parent].left == Some(node) {
                        trace!("red black insert: right-left shape, rotating parent right");
                        self.rotate_right(parent);
                        mem::swap(&mut node, &mut parent);
                    }
                    trace!("red black insert: right-right shape, rotating grandparent left");
                    self.rotate_left(grandparent);
                    self.swap_colors(parent, grandparent);
                    node = parent;
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn swap_colors(&mut self, a: Handle, b: Handle) {
        let a_color = self.arena[a].color;
        self.arena[a].color = self.arena[b].color;
        self.arena[b].color = a_color;
    }

    /// Removes `key` from the tree and returns it, or returns `None` if the key is not present.
    ///
    /// A node with two children takes over its in-order successor's key and the successor node is
    /// spliced out in its place.
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let found = self.find(key)?;

        let target = match (self.arena[found].left, self.arena[found].right) {
            (Some(_), Some(right)) => self.min_node(right),
            _ => found,
        };

        // `target` has at most one child, which takes its place
        let child = self.arena[target].left.or(self.arena[target].right);
        let parent = self.arena[target].parent;
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        self.replace_child(parent, target, child);

        let Node {
            key: spliced_key,
            color: spliced_color,
            ..
        } = self.arena.free(target);

        let removed = if target == found {
            spliced_key
        } else {
            mem::replace(&mut self.arena[found].key, spliced_key)
        };

        match (spliced_color, parent) {
            (Color::Black, Some(parent)) => self.fix_remove(child, parent),
            (Color::Black, None) => self.set_color(child, Color::Black),
            (Color::Red, _) => {},
        }

        Some(removed)
    }

    // `node` carries an extra black. It may be absent, so its parent is passed separately.
    fn fix_remove(&mut self, mut node: Link, mut parent: Handle) {
        while node != self.root && self.color(node) == Color::Black {
            if self.arena[parent].left == node {
                let mut sibling = self.arena[parent]
                    .right
                    .expect("Expected sibling of a black-deficient node to be `Some`.");

                if self.arena[sibling].color == Color::Red {
                    trace!("red black remove: red sibling, rotating parent left");
                    self.arena[sibling].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_left(parent);
                    sibling = self.arena[parent]
                        .right
                        .expect("Expected sibling of a black-deficient node to be `Some`.");
                }

                let near = self.arena[sibling].left;
                let far = self.arena[sibling].right;
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    trace!("red black remove: black nephews, moving deficiency up");
                    self.arena[sibling].color = Color::Red;
                    node = Some(parent);
                    parent = match self.arena[parent].parent {
                        Some(grandparent) => grandparent,
                        None => break,
                    };
                } else {
                    if self.color(far) == Color::Black {
                        trace!("red black remove: red near nephew, rotating sibling right");
                        self.set_color(near, Color::Black);
                        self.arena[sibling].color = Color::Red;
                        self.rotate_right(sibling);
                        sibling = self.arena[parent]
                            .right
                            .expect("Expected sibling of a black-deficient node to be `Some`.");
                    }
                    trace!("red black remove: red far nephew, rotating parent left");
                    self.arena[sibling].color = self.arena[parent].color;
                    self.arena[parent].color = Color::Black;
                    let far = self.arena[sibling].right;
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    node = self.root;
                    break;
                }
            } else {
                let mut sibling = self.arena[parent]
                    .left
                    .expect("Expected sibling of a black-deficient node to be `Some`.");

                if self.arena[sibling].color == Color::Red {
                    trace!("red black remove: red sibling, rotating parent right");
                    self.arena[sibling].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_right(parent);
                    sibling = self.arena[parent]
                        .left
                        .expect("Expected sibling of a black-deficient node to be `Some`.");
                }

                let near = self.arena[sibling].right;
                let far = self.arena[sibling].left;
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    trace!("red black remove: black nephews, moving deficiency up");
                    self.arena[sibling].color = Color::Red;
                    node = Some(parent);
                    parent = match self.arena[parent].parent {
                        Some(grandparent) => grandparent,
                        None => break,
                    };
                } else {
                    if self.color(far) == Color::Black {
                        trace!("red black remove: red near nephew, rotating sibling left");
                        self.set_color(near, Color::Black);
                        self.arena[sibling].color = Color::Red;
                        self.rotate_left(sibling);
                        sibling = self.arena[parent]
                            .left
                            .expect("Expected sibling of a black-deficient node to be `Some`.");
                    }
                    trace!("red black remove: red far nephew, rotating parent right");
                    self.arena[sibling].color = self.arena[parent].color;
                    self.arena[parent].color = Color::Black;
                    let far = self.arena[sibling].left;
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    node = self.root;
                    break;
                }
            }
        }

        self.set_color(node, Color::Black);
    }

    /// Checks the red black properties and the parent links of every node.
    pub fn check_colors(&self) -> Result<(), Violation> {
        if self.color(self.root) == Color::Red {
            return Err(Violation::RedRoot);
        }
        self.check_node(self.root, None).map(|_| ())
    }

    // Returns the number of black nodes on every path from `link` down to an absent child,
    // counting the absent child itself.
    fn check_node(&self, link: Link, parent: Link) -> Result<usize, Violation> {
        let handle = match link {
            None => return Ok(1),
            Some(handle) => handle,
        };
        let node = &self.arena[handle];
        if node.parent != parent {
            return Err(Violation::BrokenParent);
        }
        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return Err(Violation::RedRed);
        }

        let left = self.check_node(node.left, link)?;
        let right = self.check_node(node.right, link)?;
        if left != right {
            return Err(Violation::BlackHeight { left, right });
        }
        Ok(match node.color {
            Color::Black => left + 1,
            Color::Red => left,
        })
    }
}
