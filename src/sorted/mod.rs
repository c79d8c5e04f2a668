//! Sorted single-kind collections.
//!
//! This module provides [`SortedList`], a singly-linked list that inserts
//! every element at its sorted position, together with the element model it
//! stores:
//!
//! - [`Element`]: an integer or a text value
//! - [`ElementKind`]: the tag of an [`Element`], used as the list's kind
//! - [`ElementRef`]: a borrowed view used for lookups
//! - [`TypeError`]: returned when a value cannot join a list
//!
//! # Examples
//!
//! ```rust
//! use sorted_linked_list::sorted::{ElementKind, SortedList};
//!
//! let mut list = SortedList::new();
//! list.add("PHP").unwrap();
//! list.add("Javascript").unwrap();
//! list.add("MySql").unwrap();
//!
//! assert_eq!(list.kind(), Some(ElementKind::Text));
//! assert_eq!(list.to_string(), "Javascript -> MySql -> PHP");
//!
//! // The kind is fixed until the list is cleared
//! assert!(list.add(42).is_err());
//! list.clear();
//! assert!(list.add(42).is_ok());
//! ```

mod element;
mod error;
mod list;

pub use element::Element;
pub use element::ElementKind;
pub use element::ElementRef;
pub use error::TypeError;
pub use list::SortedList;
pub use list::SortedListIntoIterator;
pub use list::SortedListIterator;
