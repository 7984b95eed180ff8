use super::node::Node;

/// An iterator over the values of a linked list.
///
/// The iterator borrows the chain and never mutates it, so any traversal is
/// finite and restartable: a fresh iterator from the same starting node
/// yields the same sequence again.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator starting at the given node.
    pub(super) fn from_node(start: Option<&'a Node<T>>) -> Self {
        Self { current: start }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next();
            node.value()
        })
    }
}
