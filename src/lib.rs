#![no_std]
//! Singly linked list collections with owned nodes.
//!
//! The crate is `no_std`; nodes are heap-allocated through `alloc` and every
//! link is an exclusive-ownership relation, so the usual linked-list hazards
//! (dangling successors, double frees, accidental sharing) are ruled out at
//! compile time.

extern crate alloc;

pub mod linked_list;
