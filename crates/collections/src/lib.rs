//! Containers backing the chained hash map:
//! a singly linked list keyed by strings, and an index-addressable dynamic array.

mod macros;

pub mod dynamic_array;
pub mod linked_list;

pub use dynamic_array::{ArrayError, DynamicArray};
pub use linked_list::{List, Node};
