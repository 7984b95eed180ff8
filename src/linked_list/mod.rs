//! Singly linked lists with owned nodes.
//!
//! Every node owns its successor through an `Option<Box<Node<T>>>` link, so
//! a node is reachable from exactly one predecessor (or from the list handle
//! when it is the head). Relinking moves that ownership around instead of
//! rewiring raw pointers.
//!
//! Two handles are provided:
//!
//! - [`owned::chain::Chain`]: addressed purely through its head, with no
//!   size bookkeeping. Carries the splice-style operations: delete by key or
//!   by index, move the middle node to the front, merge two sorted chains.
//! - [`owned::list::LinkedList`]: maintains an element count and offers the
//!   index-based operations (`value_at`, `insert`, `erase`) along with
//!   `reverse` and front/back push/pop.
//!
//! # Examples
//!
//! ```
//! use chain_collections::linked_list::owned::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = (1..=3).collect();
//! list.push_front(0);
//!
//! assert_eq!(list.size(), 4);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//!
//! list.reverse();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
//! ```
pub mod owned;
