//! Element model for sorted collections.
//!
//! A [`SortedList`](super::SortedList) stores [`Element`] values. Each
//! element is either an integer or a text value; its [`ElementKind`] is the
//! tag that a list commits to on its first insertion.
//!
//! # Comparison Rule
//!
//! Integers compare numerically and text compares byte-lexicographically,
//! which for UTF-8 is the same as comparing by code point. A list never holds
//! both kinds, but [`Element`] still needs a total order, so every integer
//! sorts before every text value.
//!
//! ```rust
//! use sorted_linked_list::sorted::Element;
//!
//! assert!(Element::from(-3) < Element::from(2));
//! assert!(Element::from("MySql") < Element::from("PHP"));
//! assert!(Element::from("Z") < Element::from("a"));
//! ```

use std::any::Any;
use std::fmt;

use super::error::TypeError;

/// The kind of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A signed 64-bit integer.
    Integer,
    /// A UTF-8 string.
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => formatter.write_str("integer"),
            Self::Text => formatter.write_str("text"),
        }
    }
}

/// A value stored in a [`SortedList`](super::SortedList).
///
/// The derived ordering compares the variant first, then the content, which
/// gives numeric order for integers and byte order for text.
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::{Element, ElementKind};
///
/// let element = Element::from("PHP");
/// assert_eq!(element.kind(), ElementKind::Text);
/// assert_eq!(element.as_text(), Some("PHP"));
/// assert_eq!(element.as_integer(), None);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    /// An integer element.
    Integer(i64),
    /// A text element.
    Text(String),
}

impl Element {
    /// Returns the kind of this element.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Integer(_) => ElementKind::Integer,
            Self::Text(_) => ElementKind::Text,
        }
    }

    /// Returns the integer value, or `None` for text.
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, or `None` for integers.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Returns a borrowed view of this element.
    #[inline]
    #[must_use]
    pub fn as_element_ref(&self) -> ElementRef<'_> {
        match self {
            Self::Integer(integer) => ElementRef::Integer(*integer),
            Self::Text(text) => ElementRef::Text(text),
        }
    }

    /// Converts an arbitrary value into an element.
    ///
    /// This is the boundary for dynamically typed input. Every primitive
    /// integer type becomes [`Element::Integer`] as long as the value fits in
    /// `i64`; `String` and `&'static str` become [`Element::Text`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::IntegerOutOfRange`] for an integer outside the
    /// `i64` range and [`TypeError::UnsupportedKind`] naming the Rust type of
    /// any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::{Element, TypeError};
    ///
    /// assert_eq!(Element::from_any(7_u8), Ok(Element::Integer(7)));
    /// assert_eq!(Element::from_any(7_usize), Ok(Element::Integer(7)));
    /// assert_eq!(Element::from_any("text"), Ok(Element::from("text")));
    /// assert_eq!(
    ///     Element::from_any(1.5_f64),
    ///     Err(TypeError::UnsupportedKind { type_name: "f64" })
    /// );
    /// ```
    pub fn from_any<T: Any>(value: T) -> Result<Self, TypeError> {
        let value: Box<dyn Any> = Box::new(value);
        let value = match value.downcast::<String>() {
            Ok(text) => return Ok(Self::Text(*text)),
            Err(value) => value,
        };
        if let Some(text) = value.downcast_ref::<&'static str>() {
            return Ok(Self::Text((*text).to_owned()));
        }

        macro_rules! downcast_integer {
            ($($integer:ty),*) => {
                $(
                    if let Some(integer) = value.downcast_ref::<$integer>() {
                        return Ok(Self::Integer(i64::from(*integer)));
                    }
                )*
            };
        }
        downcast_integer!(i64, i32, i16, i8, u32, u16, u8);

        macro_rules! downcast_wide_integer {
            ($($integer:ty),*) => {
                $(
                    if let Some(integer) = value.downcast_ref::<$integer>() {
                        return i64::try_from(*integer).map(Self::Integer).map_err(|_| {
                            TypeError::IntegerOutOfRange {
                                type_name: stringify!($integer),
                                value: integer.to_string(),
                            }
                        });
                    }
                )*
            };
        }
        downcast_wide_integer!(isize, usize, u64, i128, u128);

        Err(TypeError::UnsupportedKind {
            type_name: std::any::type_name::<T>(),
        })
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(formatter, "{integer:?}"),
            Self::Text(text) => write!(formatter, "{text:?}"),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::Text(text) => formatter.write_str(text),
        }
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Element {
                #[inline]
                fn from(value: $integer) -> Self {
                    Self::Integer(i64::from(value))
                }
            }

            impl From<$integer> for ElementRef<'_> {
                #[inline]
                fn from(value: $integer) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i64, i32, i16, i8, u32, u16, u8);

impl From<String> for Element {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Element {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for Element {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<ElementRef<'_>> for Element {
    #[inline]
    fn from(value: ElementRef<'_>) -> Self {
        match value {
            ElementRef::Integer(integer) => Self::Integer(integer),
            ElementRef::Text(text) => Self::Text(text.to_owned()),
        }
    }
}

/// A borrowed view of an [`Element`].
///
/// Lookups such as [`SortedList::delete`](super::SortedList::delete) and
/// [`SortedList::exists`](super::SortedList::exists) take anything that
/// converts into an `ElementRef`, so searching for text does not allocate.
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::{Element, ElementRef};
///
/// let owned = String::from("MySql");
/// assert_eq!(ElementRef::from(&owned), ElementRef::Text("MySql"));
/// assert_eq!(Element::from(5), ElementRef::from(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef<'a> {
    /// An integer value.
    Integer(i64),
    /// A borrowed text value.
    Text(&'a str),
}

impl ElementRef<'_> {
    /// Returns the kind of the referenced value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Integer(_) => ElementKind::Integer,
            Self::Text(_) => ElementKind::Text,
        }
    }
}

impl<'a> From<&'a str> for ElementRef<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for ElementRef<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a Element> for ElementRef<'a> {
    #[inline]
    fn from(value: &'a Element) -> Self {
        value.as_element_ref()
    }
}

impl PartialEq<ElementRef<'_>> for Element {
    fn eq(&self, other: &ElementRef<'_>) -> bool {
        match (self, other) {
            (Self::Integer(left), ElementRef::Integer(right)) => left == right,
            (Self::Text(left), ElementRef::Text(right)) => left == right,
            _ => false,
        }
    }
}

impl PartialEq<Element> for ElementRef<'_> {
    #[inline]
    fn eq(&self, other: &Element) -> bool {
        other == self
    }
}

impl PartialEq<i64> for Element {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

impl PartialEq<&str> for Element {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Integer(integer) => serializer.serialize_i64(*integer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(feature = "serde")]
struct ElementVisitor;

#[cfg(feature = "serde")]
impl ElementVisitor {
    fn unsupported<E: serde::de::Error>(type_name: &'static str) -> E {
        E::custom(TypeError::UnsupportedKind { type_name })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string")
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Element::Integer(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value).map(Element::Integer).map_err(|_| {
            E::custom(TypeError::IntegerOutOfRange {
                type_name: "u64",
                value: value.to_string(),
            })
        })
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Element::Text(value.to_owned()))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Element::Text(value))
    }

    fn visit_f64<E: serde::de::Error>(self, _value: f64) -> Result<Self::Value, E> {
        Err(Self::unsupported("f64"))
    }

    fn visit_bool<E: serde::de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Err(Self::unsupported("bool"))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::unsupported("()"))
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::unsupported("Option"))
    }

    fn visit_seq<A>(self, _access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        Err(Self::unsupported("sequence"))
    }

    fn visit_map<A>(self, _access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        Err(Self::unsupported("map"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ElementVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Element::from(1), ElementKind::Integer)]
    #[case(Element::from(-1_i8), ElementKind::Integer)]
    #[case(Element::from(u32::MAX), ElementKind::Integer)]
    #[case(Element::from("text"), ElementKind::Text)]
    #[case(Element::from(String::new()), ElementKind::Text)]
    fn test_kind(#[case] element: Element, #[case] expected: ElementKind) {
        assert_eq!(element.kind(), expected);
        assert_eq!(element.as_element_ref().kind(), expected);
    }

    #[rstest]
    fn test_integers_compare_numerically() {
        let mut elements = [Element::from(10), Element::from(-7), Element::from(3)];
        elements.sort();
        assert_eq!(
            elements,
            [Element::from(-7), Element::from(3), Element::from(10)]
        );
    }

    #[rstest]
    fn test_text_compares_by_bytes() {
        let mut elements = [
            Element::from("b"),
            Element::from("B"),
            Element::from("ab"),
            Element::from("é"),
            Element::from("a"),
        ];
        elements.sort();
        let rendered: Vec<String> = elements.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["B", "a", "ab", "b", "é"]);
    }

    #[rstest]
    fn test_integer_sorts_before_text() {
        assert!(Element::Integer(i64::MAX) < Element::Text(String::new()));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Element::from(-42).to_string(), "-42");
        assert_eq!(Element::from("MySql").to_string(), "MySql");
        assert_eq!(ElementKind::Integer.to_string(), "integer");
        assert_eq!(ElementKind::Text.to_string(), "text");
    }

    #[rstest]
    fn test_debug_is_unwrapped() {
        assert_eq!(format!("{:?}", Element::from(7)), "7");
        assert_eq!(format!("{:?}", Element::from("PHP")), "\"PHP\"");
    }

    #[rstest]
    fn test_exact_equality_against_ref() {
        assert_eq!(Element::from(5), ElementRef::Integer(5));
        assert_ne!(Element::from(5), ElementRef::Text("5"));
        assert_ne!(Element::from("5"), ElementRef::Integer(5));
        assert_eq!(ElementRef::Text("5"), Element::from("5"));
    }

    #[rstest]
    fn test_equality_against_primitives() {
        assert_eq!(Element::from(5), 5_i64);
        assert_eq!(Element::from("PHP"), "PHP");
        assert_ne!(Element::from("5"), 5_i64);
    }

    #[rstest]
    fn test_round_trip_through_ref() {
        let element = Element::from("owned");
        assert_eq!(Element::from(element.as_element_ref()), element);
    }

    #[rstest]
    fn test_from_any_accepts_integers_and_text() {
        assert_eq!(Element::from_any(-8_i64), Ok(Element::Integer(-8)));
        assert_eq!(Element::from_any(8_i32), Ok(Element::Integer(8)));
        assert_eq!(Element::from_any(8_u16), Ok(Element::Integer(8)));
        assert_eq!(
            Element::from_any(String::from("owned")),
            Ok(Element::from("owned"))
        );
        assert_eq!(Element::from_any("static"), Ok(Element::from("static")));
    }

    #[rstest]
    #[case::usize(Element::from_any(5_usize))]
    #[case::isize(Element::from_any(5_isize))]
    #[case::u64(Element::from_any(5_u64))]
    #[case::i128(Element::from_any(5_i128))]
    #[case::u128(Element::from_any(5_u128))]
    fn test_from_any_accepts_wide_integers_in_range(#[case] result: Result<Element, TypeError>) {
        assert_eq!(result, Ok(Element::Integer(5)));
    }

    #[rstest]
    fn test_from_any_accepts_wide_integer_bounds() {
        assert_eq!(
            Element::from_any(i128::from(i64::MIN)),
            Ok(Element::Integer(i64::MIN))
        );
        assert_eq!(
            Element::from_any(i64::MAX.unsigned_abs()),
            Ok(Element::Integer(i64::MAX))
        );
        assert_eq!(Element::from_any(-5_isize), Ok(Element::Integer(-5)));
    }

    #[rstest]
    fn test_from_any_rejects_wide_integers_out_of_range() {
        let error = Element::from_any(u64::MAX).unwrap_err();
        assert_eq!(
            error,
            TypeError::IntegerOutOfRange {
                type_name: "u64",
                value: u64::MAX.to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "integer `18446744073709551615` of type `u64` does not fit in i64"
        );
        assert!(
            Element::from_any(i128::from(i64::MIN) - 1)
                .unwrap_err()
                .is_integer_out_of_range()
        );
    }

    #[rstest]
    fn test_from_any_rejects_other_types() {
        assert_eq!(
            Element::from_any(true),
            Err(TypeError::UnsupportedKind { type_name: "bool" })
        );
        assert_eq!(
            Element::from_any(1.5_f32),
            Err(TypeError::UnsupportedKind { type_name: "f32" })
        );
        assert!(Element::from_any(vec![1, 2]).is_err());
        assert!(Element::from_any('c').is_err());
    }
}
