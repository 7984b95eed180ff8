use alloc::boxed::Box;
use core::fmt;

use super::{error::ListError, iter::Iter, node::Node, traits::Consumer};

/// A singly linked list handle that tracks its element count.
///
/// The count is maintained incrementally: every successful insertion
/// increments it and every successful removal decrements it, always next to
/// the relink itself, so `size` equals the number of nodes reachable from
/// the head at all times. Removals from an empty list fail with
/// [`ListError::EmptyList`] before any bookkeeping happens, so the count can
/// never underflow.
#[derive(Debug, PartialEq, Eq)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    /// Number of elements in the list.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the first value, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    /// Prepend `value` in O(1); the new node becomes the head.
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.size += 1;
    }

    /// Append `value` at the tail, scanning the whole list in O(n).
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
        self.size += 1;
    }

    /// Removes the head and returns its value.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::EmptyList)?;
        self.head = node.next;
        self.size -= 1;
        Ok(node.value)
    }

    /// Removes the tail and returns its value, scanning to the
    /// second-to-last node in O(n).
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        let node = cursor.take().ok_or(ListError::EmptyList)?;
        self.size -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the value at zero-based `index`, or
    /// [`ListError::NotFound`] when `index` is past the last element.
    pub fn value_at(&self, index: usize) -> Result<&T, ListError> {
        self.iter().nth(index).ok_or(ListError::NotFound)
    }

    /// Inserts `value` before the node currently at `index`; `index == size`
    /// appends. Indices past that fail with [`ListError::NotFound`] and
    /// leave the list unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return Err(ListError::NotFound),
            }
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { value, next }));
        self.size += 1;
        Ok(())
    }

    /// Removes the node at zero-based `index` and returns its value.
    /// Out-of-range indices fail with [`ListError::NotFound`] and leave the
    /// list unchanged.
    pub fn erase(&mut self, index: usize) -> Result<T, ListError> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return Err(ListError::NotFound),
            }
        }
        let mut node = cursor.take().ok_or(ListError::NotFound)?;
        *cursor = node.next.take();
        self.size -= 1;
        Ok(node.value)
    }

    /// Reverses the list in place; the head becomes the former tail.
    ///
    /// O(n) time, O(1) extra space: each node is unlinked from the remainder
    /// and relinked in front of the already-reversed prefix.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Iterate over the values of the list in traversal order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_node(self.head.as_deref())
    }

    /// Emit every value, in traversal order, to `consumer`.
    pub fn emit<C: Consumer<T>>(&self, consumer: &mut C) {
        for value in self.iter() {
            consumer.emit(value);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping the boxed `next` chain recursively
        // would overflow the stack on long lists.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            cursor = &mut cursor.insert(Box::new(Node::new(value))).next;
            self.size += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
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
