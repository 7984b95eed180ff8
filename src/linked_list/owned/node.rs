use alloc::boxed::Box;

use super::{iter::Iter, traits::Consumer};

/// A node in a singly linked list.
///
/// Each node exclusively owns its successor, so every node is reachable from
/// exactly one predecessor (or from a list handle when it is the head).
#[derive(Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }

    /// Get the value stored in the node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the value stored in the node.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Get the successor node, if any.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Get the successor node mutably, if any.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Splice a new node holding `value` in immediately after `self`.
    ///
    /// The new node takes over whatever `self.next` was, and `self.next`
    /// becomes the new node. Returns the inserted node, so repeated pushes
    /// can be chained to grow a tail.
    pub fn push(&mut self, value: T) -> &mut Node<T> {
        let node = Box::new(Node {
            value,
            next: self.next.take(),
        });
        self.next.insert(node)
    }

    /// Iterate over the values reachable from this node, `self` included.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_node(Some(self))
    }

    /// Emit every reachable value, in traversal order, to `consumer`.
    ///
    /// Traversal never mutates the chain, so emitting twice from the same
    /// starting node yields the same sequence.
    pub fn emit<C: Consumer<T>>(&self, consumer: &mut C) {
        for value in self.iter() {
            consumer.emit(value);
        }
    }
}
