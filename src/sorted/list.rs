//! Sorted singly-linked list.
//!
//! This module provides [`SortedList`], a mutable singly-linked list that
//! inserts every element at its sorted position.
//!
//! # Overview
//!
//! A `SortedList` holds either integers or text. The kind of the first
//! inserted element is committed and every later insertion must match it
//! until the list is cleared. It provides:
//!
//! - O(n) ordered insertion, stable among equal values
//! - O(n) deletion and membership test by exact equality
//! - O(1) `len` and `first`
//! - O(n) `last`, `to_vec` and rendering
//!
//! # Examples
//!
//! ```rust
//! use sorted_linked_list::sorted::SortedList;
//!
//! let mut list = SortedList::new();
//! list.add(9).unwrap();
//! list.add(4).unwrap();
//! list.add(3).unwrap();
//! assert_eq!(list.to_string(), "3 -> 4 -> 9");
//!
//! assert!(list.delete(4));
//! assert!(!list.exists(4));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Ownership
//!
//! Each node is owned by its predecessor, the first node by the list:
//!
//! ```text
//! head -> [3] -> [4] -> [9] -> None
//! ```
//!
//! Insertion and deletion relink a single `Option<Box<Node>>` slot. Nodes are
//! released iteratively, so dropping or clearing a long list does not recurse.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use tracing::{debug, trace};

use super::element::{Element, ElementKind, ElementRef};
use super::error::TypeError;

/// A single link in the chain.
struct Node {
    element: Element,
    next: Option<Box<Self>>,
}

/// A singly-linked list that keeps its elements sorted.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `add`     | O(n)       |
/// | `delete`  | O(n)       |
/// | `exists`  | O(n)       |
/// | `len`     | O(1)       |
/// | `first`   | O(1)       |
/// | `last`    | O(n)       |
/// | `to_vec`  | O(n)       |
/// | `clear`   | O(n)       |
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::{Element, SortedList};
///
/// let mut list = SortedList::new();
/// list.add(15).unwrap();
/// list.add(4).unwrap();
/// list.add(20).unwrap();
///
/// assert_eq!(list.first(), Some(&Element::Integer(4)));
/// assert_eq!(list.last(), Some(&Element::Integer(20)));
/// ```
pub struct SortedList {
    head: Option<Box<Node>>,
    /// Cached length for O(1) access.
    length: usize,
    /// Set by the first insertion, reset only by `clear`.
    kind: Option<ElementKind>,
}

impl SortedList {
    /// Creates a new empty list with no committed kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list = SortedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.kind(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
            kind: None,
        }
    }

    /// Builds a list from elements that are already sorted and share `kind`.
    ///
    /// Nodes are linked from the back using `Vec::pop()`, so no cursor walk
    /// is needed.
    fn build_from_sorted_vec(mut elements: Vec<Element>, kind: Option<ElementKind>) -> Self {
        let length = elements.len();
        let mut head: Option<Box<Node>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Box::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length, kind }
    }

    /// Builds a list from elements of a single kind in any order.
    ///
    /// `sort` is stable, so equal elements keep their input order exactly as
    /// repeated calls to [`add`](Self::add) would.
    fn build_from_single_kind(mut elements: Vec<Element>) -> Self {
        elements.sort();
        let kind = elements.first().map(Element::kind);
        Self::build_from_sorted_vec(elements, kind)
    }

    /// Inserts a value at its sorted position.
    ///
    /// The value is placed before the first element strictly greater than it,
    /// so among equal values the newest one comes last.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::KindMismatch`] if the list already holds elements
    /// of the other kind. A rejected value leaves the list unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(10).unwrap();
    /// list.add(3).unwrap();
    /// list.add(1).unwrap();
    /// assert_eq!(list.to_string(), "1 -> 3 -> 10");
    ///
    /// assert!(list.add("testing").is_err());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn add(&mut self, value: impl Into<Element>) -> Result<(), TypeError> {
        let element = value.into();
        self.commit_kind(element.kind())?;
        self.insert_sorted(element);
        Ok(())
    }

    /// Inserts a dynamically typed value at its sorted position.
    ///
    /// The value is converted with [`Element::from_any`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnsupportedKind`] if the value is neither an
    /// integer nor text, and [`TypeError::KindMismatch`] if its kind differs
    /// from the list's kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::{SortedList, TypeError};
    ///
    /// let mut list = SortedList::new();
    /// list.add_dynamic(3_u8).unwrap();
    /// assert_eq!(
    ///     list.add_dynamic(2.5_f32),
    ///     Err(TypeError::UnsupportedKind { type_name: "f32" })
    /// );
    /// ```
    pub fn add_dynamic<T: Any>(&mut self, value: T) -> Result<(), TypeError> {
        let element = Element::from_any(value)
            .inspect_err(|error| debug!(%error, "rejected element"))?;
        self.add(element)
    }

    /// Adds every value in order, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// Returns the first [`TypeError`] raised by [`add`](Self::add). Values
    /// added before the failure remain in the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.try_extend(["b", "c", "a"]).unwrap();
    /// assert_eq!(list.to_string(), "a -> b -> c");
    /// ```
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), TypeError>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    fn commit_kind(&mut self, found: ElementKind) -> Result<(), TypeError> {
        match self.kind {
            None => {
                debug!(kind = %found, "committed list kind");
                self.kind = Some(found);
                Ok(())
            }
            Some(committed) if committed == found => Ok(()),
            Some(committed) => {
                let error = TypeError::KindMismatch { committed, found };
                debug!(%error, "rejected element");
                Err(error)
            }
        }
    }

    fn insert_sorted(&mut self, element: Element) {
        trace!(%element, "inserting element");
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.element <= element) {
            let Some(node) = cursor else {
                break;
            };
            cursor = &mut node.next;
        }

        let next = cursor.take();
        *cursor = Some(Box::new(Node { element, next }));
        self.length += 1;
    }

    /// Removes the first element equal to `value`.
    ///
    /// Equality is exact: a value of the other kind never matches. Only one
    /// occurrence is removed even if duplicates exist.
    ///
    /// # Returns
    ///
    /// `true` if an element was removed, `false` if none matched
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(5).unwrap();
    /// list.add(3).unwrap();
    ///
    /// assert!(list.delete(5));
    /// assert!(!list.delete(44));
    /// assert!(!list.delete("3"));
    /// assert_eq!(list.to_string(), "3");
    /// ```
    pub fn delete<'a>(&mut self, value: impl Into<ElementRef<'a>>) -> bool {
        let target = value.into();
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.element != target) {
            let Some(node) = cursor else {
                break;
            };
            cursor = &mut node.next;
        }

        let Some(removed) = cursor.take() else {
            return false;
        };
        let Node { element, next } = *removed;
        *cursor = next;
        self.length -= 1;
        trace!(%element, length = self.length, "deleted element");
        true
    }

    /// Returns `true` if some element equals `value` exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list: SortedList = ["PHP", "MySql"].into_iter().collect();
    /// assert!(list.exists("PHP"));
    /// assert!(!list.exists("php"));
    /// ```
    #[must_use]
    pub fn exists<'a>(&self, value: impl Into<ElementRef<'a>>) -> bool {
        let target = value.into();
        self.iter().any(|element| *element == target)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the committed kind, or `None` before the first insertion and
    /// after [`clear`](Self::clear).
    ///
    /// Deleting every element does not reset the kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Option<ElementKind> {
        self.kind
    }

    /// Returns the smallest element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Element> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Returns the largest element, or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n): the tail is reached by walking the whole chain.
    #[must_use]
    pub fn last(&self) -> Option<&Element> {
        self.iter().last()
    }

    /// Returns an iterator over the elements in sorted order.
    ///
    /// Each call starts from the current head. The borrow keeps the list from
    /// being mutated while the iterator is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::{Element, SortedList};
    ///
    /// let list: SortedList = [3_i64, 2].into_iter().collect();
    /// let collected: Vec<&Element> = list.iter().collect();
    /// assert_eq!(collected, vec![&Element::Integer(2), &Element::Integer(3)]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedListIterator<'_> {
        SortedListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Copies the elements into a new `Vec` in sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::{Element, SortedList};
    ///
    /// let list: SortedList = ["PHP", "Javascript", "MySql"].into_iter().collect();
    /// assert_eq!(
    ///     list.to_vec(),
    ///     vec![
    ///         Element::from("Javascript"),
    ///         Element::from("MySql"),
    ///         Element::from("PHP"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<Element> {
        self.iter().cloned().collect()
    }

    /// Removes every element and resets the committed kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(10).unwrap();
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert!(list.add("text").is_ok());
    /// ```
    pub fn clear(&mut self) {
        debug!(length = self.length, "clearing list");
        self.release_nodes();
        self.length = 0;
        self.kind = None;
    }

    /// Unlinks the first node and returns its element.
    fn take_first(&mut self) -> Option<Element> {
        self.head.take().map(|node| {
            let Node { element, next } = *node;
            self.head = next;
            self.length -= 1;
            element
        })
    }

    fn release_nodes(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`SortedList`].
#[derive(Clone)]
pub struct SortedListIterator<'a> {
    current: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for SortedListIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SortedListIterator<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for SortedListIterator<'_> {}

/// An owning iterator over elements of a [`SortedList`].
pub struct SortedListIntoIterator {
    list: SortedList,
}

impl Iterator for SortedListIntoIterator {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl ExactSizeIterator for SortedListIntoIterator {
    fn len(&self) -> usize {
        self.list.length
    }
}

impl FusedIterator for SortedListIntoIterator {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for SortedList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SortedList {
    fn drop(&mut self) {
        self.release_nodes();
    }
}

impl Clone for SortedList {
    fn clone(&self) -> Self {
        Self::build_from_sorted_vec(self.to_vec(), self.kind)
    }
}

impl FromIterator<i64> for SortedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::build_from_single_kind(iter.into_iter().map(Element::Integer).collect())
    }
}

impl FromIterator<String> for SortedList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::build_from_single_kind(iter.into_iter().map(Element::Text).collect())
    }
}

impl<'a> FromIterator<&'a str> for SortedList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::build_from_single_kind(iter.into_iter().map(Element::from).collect())
    }
}

/// Builds a list from elements in any order.
///
/// # Errors
///
/// Returns [`TypeError::KindMismatch`] for the first element whose kind
/// differs from the first element's kind.
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::{Element, SortedList};
///
/// let list = SortedList::try_from(vec![Element::from(2), Element::from(1)]).unwrap();
/// assert_eq!(list.to_string(), "1 -> 2");
///
/// assert!(SortedList::try_from(vec![Element::from(1), Element::from("one")]).is_err());
/// ```
impl TryFrom<Vec<Element>> for SortedList {
    type Error = TypeError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        if let Some(committed) = elements.first().map(Element::kind)
            && let Some(mismatched) = elements.iter().find(|element| element.kind() != committed)
        {
            return Err(TypeError::KindMismatch {
                committed,
                found: mismatched.kind(),
            });
        }
        Ok(Self::build_from_single_kind(elements))
    }
}

impl IntoIterator for SortedList {
    type Item = Element;
    type IntoIter = SortedListIntoIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedListIntoIterator { list: self }
    }
}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Element;
    type IntoIter = SortedListIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two lists are equal when they hold the same elements and have the same
/// committed kind, so an emptied list still differs from a fresh one.
impl PartialEq for SortedList {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length || self.kind != other.kind {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for SortedList {}

/// Hashes the length and kind, then each element in order, consistent with `Eq`.
impl Hash for SortedList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.kind.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl fmt::Debug for SortedList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements joined by `" -> "`; an empty list renders as `""`.
impl fmt::Display for SortedList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, " -> ")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SortedList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct SortedListVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for SortedListVisitor {
    type Value = SortedList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers or a sequence of strings")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;
        let mut list = SortedList::new();
        while let Some(element) = access.next_element::<Element>()? {
            list.add(element).map_err(A::Error::custom)?;
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SortedList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedListVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
