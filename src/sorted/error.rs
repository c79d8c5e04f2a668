//! Error type for sorted collections.
//!
//! Inserting into a [`SortedList`](super::SortedList) is the only fallible
//! operation. Every failure mode is reported through [`TypeError`] and is
//! told apart by its variant and message.

use thiserror::Error;

use super::element::ElementKind;

/// Represents a value that cannot be stored in a [`SortedList`](super::SortedList).
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::{ElementKind, SortedList, TypeError};
///
/// let mut list = SortedList::new();
/// list.add(1).unwrap();
///
/// let error = list.add("testing").unwrap_err();
/// assert_eq!(
///     error,
///     TypeError::KindMismatch {
///         committed: ElementKind::Integer,
///         found: ElementKind::Text,
///     }
/// );
/// assert_eq!(error.to_string(), "cannot mix integer with text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The value is neither an integer nor text.
    #[error("only integer or text values are allowed, got `{type_name}`")]
    UnsupportedKind {
        /// Name of the rejected value's type.
        type_name: &'static str,
    },

    /// The value is an integer that does not fit in `i64`.
    #[error("integer `{value}` of type `{type_name}` does not fit in i64")]
    IntegerOutOfRange {
        /// Name of the rejected value's type.
        type_name: &'static str,
        /// The rejected value in decimal.
        value: String,
    },

    /// The value's kind differs from the kind already committed by the list.
    #[error("cannot mix {committed} with {found}")]
    KindMismatch {
        /// The kind fixed by the list's first insertion.
        committed: ElementKind,
        /// The kind of the rejected value.
        found: ElementKind,
    },
}

impl TypeError {
    /// Returns `true` if the value was neither an integer nor text.
    #[must_use]
    pub const fn is_unsupported_kind(&self) -> bool {
        matches!(self, Self::UnsupportedKind { .. })
    }

    /// Returns `true` if the value was an integer outside the `i64` range.
    #[must_use]
    pub const fn is_integer_out_of_range(&self) -> bool {
        matches!(self, Self::IntegerOutOfRange { .. })
    }

    /// Returns `true` if the value's kind conflicted with the list's kind.
    #[must_use]
    pub const fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::KindMismatch { .. })
    }
}
