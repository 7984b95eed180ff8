//! # Owned Singly Linked List
//!
//! This module provides singly linked lists built from exclusively owned
//! nodes.
//!
//! ## Core Components
//!
//! - [`node::Node`]: a list cell holding one value and owning its successor.
//! - [`chain::Chain`]: a handle addressed purely through its head.
//! - [`list::LinkedList`]: a handle that also tracks its element count.
//! - [`iter::Iter`]: a lazy, restartable traversal over borrowed values.
//! - [`traits::Consumer`]: the boundary that receives values in traversal
//!   order.
//! - [`error::ListError`]: the failure modes of the fallible operations.
//!
//! All relinking moves ownership through `Option::take`; nothing in this
//! module uses `unsafe`.

pub mod chain;
pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod traits;
