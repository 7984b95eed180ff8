use alloc::boxed::Box;
use core::fmt;

use super::{iter::Iter, node::Node, traits::Consumer};

/// A singly linked list addressed purely through its head.
///
/// `Chain` carries no size field; its length is whatever a traversal finds.
/// Because the handle owns the head node, operations that replace the head
/// (deleting the first element, moving the middle node to the front) simply
/// update the handle instead of leaving the caller with a stale node
/// reference.
#[derive(Debug, PartialEq, Eq)]
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Chain<T> {
    /// Creates a new, empty chain.
    pub const fn new() -> Self {
        Chain { head: None }
    }

    /// Get the head node, if any.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Get the head node mutably, if any.
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Whether the chain holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, counted by traversal in O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Prepend `value`; the new node becomes the head.
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
    }

    /// Iterate over the values of the chain in traversal order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_node(self.head.as_deref())
    }

    /// Emit every value, in traversal order, to `consumer`.
    pub fn emit<C: Consumer<T>>(&self, consumer: &mut C) {
        for value in self.iter() {
            consumer.emit(value);
        }
    }

    /// Removes the first node whose value equals `key`.
    ///
    /// Returns whether a deletion occurred. `false` means no matching
    /// element was found and nothing changed, so the call is safe to retry.
    pub fn delete_key(&mut self, key: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor.take() {
            if node.value == *key {
                *cursor = node.next;
                return true;
            }
            cursor = &mut cursor.insert(node).next;
        }
        false
    }

    /// Removes the node at zero-based `index`.
    ///
    /// Returns whether a deletion occurred. Out-of-range indices (including
    /// `index == len`) return `false` without mutating the chain.
    pub fn delete_at(&mut self, index: usize) -> bool {
        self.detach_at(index).is_some()
    }

    /// Moves the middle node to the front of the chain.
    ///
    /// The middle is located with a slow/fast cursor pair: the fast cursor
    /// advances two nodes per step, so counting its steps places the slow
    /// cursor at index `len / 2`. For even lengths the later of the two
    /// central nodes wins. Chains of length 0 or 1 are left untouched.
    pub fn make_middle_first(&mut self) {
        let mut middle = 0usize;
        let mut fast = self.head.as_deref();
        while let Some(node) = fast {
            match node.next() {
                Some(next) => {
                    middle += 1;
                    fast = next.next();
                }
                None => break,
            }
        }
        if middle == 0 {
            return;
        }
        if let Some(mut node) = self.detach_at(middle) {
            node.next = self.head.take();
            self.head = Some(node);
        }
    }

    /// Merges two chains that are each sorted ascending into one sorted
    /// chain.
    ///
    /// Both inputs are consumed; their nodes are relinked into the result
    /// rather than copied. On equal values the node from `a` goes first.
    /// Once one input runs out, the remainder of the other is transferred
    /// wholesale. Inputs that are not sorted ascending produce an
    /// unspecified interleaving.
    pub fn merge_sorted(a: Chain<T>, b: Chain<T>) -> Chain<T>
    where
        T: Ord,
    {
        let mut a = a.take_head();
        let mut b = b.take_head();
        let mut merged = Chain::new();
        let mut cursor = &mut merged.head;
        loop {
            match (a, b) {
                (Some(mut x), Some(mut y)) => {
                    if x.value <= y.value {
                        a = x.next.take();
                        b = Some(y);
                        cursor = &mut cursor.insert(x).next;
                    } else {
                        b = y.next.take();
                        a = Some(x);
                        cursor = &mut cursor.insert(y).next;
                    }
                }
                (rest, None) | (None, rest) => {
                    *cursor = rest;
                    break;
                }
            }
        }
        merged
    }

    /// Unlinks and returns the node at `index`, fixing up the predecessor's
    /// link to skip it. `None` when the index is out of range.
    fn detach_at(&mut self, index: usize) -> Option<Box<Node<T>>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut node = cursor.take()?;
        *cursor = node.next.take();
        Some(node)
    }

    fn take_head(mut self) -> Option<Box<Node<T>>> {
        self.head.take()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain { head: None }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping the boxed `next` chain recursively
        // would overflow the stack on long lists.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            cursor = &mut cursor.insert(Box::new(Node::new(value))).next;
        }
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
