//! # sorted-linked-list
//!
//! A singly-linked list that keeps its elements sorted at all times.
//!
//! ## Overview
//!
//! [`SortedList`](sorted::SortedList) stores either integers or text, never
//! both. The kind of the first inserted element becomes the kind of the list
//! until it is cleared. It provides:
//!
//! - Ordered insertion, stable among equal values
//! - Exact-equality deletion and membership tests
//! - `first` / `last` access, counting and clearing
//! - Conversion to a `Vec`, `" -> "` rendering and borrowing iteration
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for [`Element`](sorted::Element)
//!   and [`SortedList`](sorted::SortedList)
//!
//! ## Example
//!
//! ```rust
//! use sorted_linked_list::prelude::*;
//!
//! let mut list = SortedList::new();
//! list.add(10).unwrap();
//! list.add(3).unwrap();
//! list.add(1).unwrap();
//!
//! assert_eq!(list.to_string(), "1 -> 3 -> 10");
//! assert!(list.add("testing").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use sorted_linked_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sorted::*;
}

pub mod sorted;

pub use sorted::{Element, ElementKind, ElementRef, SortedList, TypeError};
