//! Two generic sequence containers: [`LinkedList`], a doubly linked list
//! whose nodes live in a growable slot arena and reference each other by
//! index, and [`DynamicArray`], a contiguous buffer with an exact observable
//! capacity and generation-stamped positions.
//!
//! Both are single-threaded values. Nothing here synchronizes; sharing a
//! container across threads is the caller's responsibility, behind external
//! locking.

pub mod shared;
pub mod state;
pub mod utils;


pub use shared::error::{ContainerError, ContainerResult};
pub use state::{array::DynamicArray, list::LinkedList};
