use crate::arena::{Arena, Handle};
use crate::traversal::Cursor;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A link to another node in the same arena. `None` is an absent (black) child, or the parent of
/// the root.
pub type Link = Option<Handle>;

/// A struct representing an internal node of a red black tree.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub left: Link,
    pub right: Link,
    pub parent: Link,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Link) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }
}

/// A borrowed node inside an arena, walkable by the shared traversal routines.
pub struct NodeRef<'a, T> {
    pub arena: &'a Arena<Node<T>>,
    pub handle: Handle,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    fn follow(self, link: Link) -> Option<Self> {
        link.map(|handle| NodeRef {
            arena: self.arena,
            handle,
        })
    }
}

impl<'a, T> Cursor<'a> for NodeRef<'a, T> {
    type Key = T;

    fn key(self) -> &'a T {
        let arena = self.arena;
        &arena[self.handle].key
    }

    fn left(self) -> Option<Self> {
        let link = self.arena[self.handle].left;
        self.follow(link)
    }

    fn right(self) -> Option<Self> {
        let link = self.arena[self.handle].right;
        self.follow(link)
    }
}
