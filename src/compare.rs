//! Three-way comparison over the element kinds a tree can store.
//!
//! Any type implementing [`Compare`] can be stored in a [`crate::WBTree`].
//! Primitive integers and strings compare numerically and lexically. Trees
//! that must hold several kinds of values can use [`Element`], which compares
//! values of the same kind and reports a [`CompareError::KindMismatch`]
//! otherwise.

use std::cmp::Ordering;
use std::fmt;

use void::Void;

pub use crate::error::CompareError;

/// A total three-way comparison that may refuse to compare values of
/// incompatible kinds.
///
/// Implementations must be a strict weak ordering over every set of mutually
/// comparable values. Comparability itself must be an equivalence relation:
/// if `a` compares with `b`, and `b` with `c`, then `a` compares with `c`.
/// The tree relies on this to validate a new element once, on its way down,
/// before it starts moving nodes around.
pub trait Compare {
    fn compare(&self, other: &Self) -> Result<Ordering, CompareError>;
}

/// Compares two values. Same as [`Compare::compare`].
///```
/// use wbtree::compare::{compare, Element};
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&3, &5), Ok(Ordering::Less));
/// assert_eq!(compare(&"b", &"a"), Ok(Ordering::Greater));
/// let one: Element = 1.into();
/// assert!(compare(&one, &"one".into()).is_err());
///```
pub fn compare<T: Compare + ?Sized>(a: &T, b: &T) -> Result<Ordering, CompareError> {
    a.compare(b)
}

/// Implements [`Compare`] for types that already implement [`Ord`].
/// The comparison never fails.
///```
/// use wbtree::impl_compare_by_ord;
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Version(u32, u32);
/// impl_compare_by_ord!(Version);
///
/// let mut tree = wbtree::WBTree::new();
/// tree.insert(Version(1, 2)).unwrap();
/// tree.insert(Version(0, 9)).unwrap();
/// assert_eq!(tree.first(), Some(&Version(0, 9)));
///```
#[macro_export]
macro_rules! impl_compare_by_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::compare::Compare for $t {
                fn compare(
                    &self,
                    other: &Self,
                ) -> ::std::result::Result<::std::cmp::Ordering, $crate::compare::CompareError> {
                    ::std::result::Result::Ok(::std::cmp::Ord::cmp(self, other))
                }
            }
        )*
    };
}

impl_compare_by_ord!(i8, i16, i32, i64, i128, isize);
impl_compare_by_ord!(u8, u16, u32, u64, u128, usize);
impl_compare_by_ord!(bool, char, String, str, Box<str>);

impl<'a, T: Compare + ?Sized> Compare for &'a T {
    fn compare(&self, other: &Self) -> Result<Ordering, CompareError> {
        (**self).compare(*other)
    }
}

impl Compare for Void {
    fn compare(&self, _: &Self) -> Result<Ordering, CompareError> {
        void::unreachable(*self)
    }
}

/// The kind of an [`Element`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Text,
    Custom,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Text => "text",
            Kind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A value of one of a closed set of kinds.
///
/// Integers compare numerically, text compares lexically, and custom values
/// use their own [`Compare`] implementation. Values of different kinds don't
/// compare at all. The default custom kind is [`Void`], meaning there is none.
///```
/// use wbtree::{WBTree, Element, TreeError};
///
/// let mut tree: WBTree<Element> = WBTree::new();
/// tree.insert("pear".into()).unwrap();
/// tree.insert("apple".into()).unwrap();
/// assert!(matches!(tree.insert(7.into()), Err(TreeError::Compare(_))));
/// assert_eq!(tree.len(), 2);
///```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element<U = Void> {
    Integer(i64),
    Text(String),
    Custom(U),
}

impl<U> Element<U> {
    pub fn kind(&self) -> Kind {
        match self {
            Element::Integer(_) => Kind::Integer,
            Element::Text(_) => Kind::Text,
            Element::Custom(_) => Kind::Custom,
        }
    }
}

impl<U: Compare> Compare for Element<U> {
    fn compare(&self, other: &Self) -> Result<Ordering, CompareError> {
        use Element::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(a.cmp(b)),
            (Text(a), Text(b)) => Ok(a.cmp(b)),
            (Custom(a), Custom(b)) => a.compare(b),
            _ => Err(CompareError::KindMismatch {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl<U> From<i64> for Element<U> {
    fn from(value: i64) -> Self {
        Element::Integer(value)
    }
}

impl<U> From<i32> for Element<U> {
    fn from(value: i32) -> Self {
        Element::Integer(value.into())
    }
}

impl<U> From<String> for Element<U> {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

impl<U> From<&str> for Element<U> {
    fn from(value: &str) -> Self {
        Element::Text(value.to_owned())
    }
}

impl<U: fmt::Display> fmt::Display for Element<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => write!(f, "{}", n),
            Element::Text(s) => f.write_str(s),
            Element::Custom(u) => write!(f, "{}", u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Orders by the length of the name only.
    #[derive(Debug, PartialEq, Eq)]
    struct ByLength(&'static str);

    impl Compare for ByLength {
        fn compare(&self, other: &Self) -> Result<Ordering, CompareError> {
            Ok(self.0.len().cmp(&other.0.len()))
        }
    }

    #[test]
    fn integers_compare_numerically() {
        assert_eq!(compare(&-4i64, &3), Ok(Ordering::Less));
        assert_eq!(compare(&10u8, &9), Ok(Ordering::Greater));
        assert_eq!(compare(&7usize, &7), Ok(Ordering::Equal));
    }

    #[test]
    fn text_compares_lexically() {
        assert_eq!(compare(&"ab", &"b"), Ok(Ordering::Less));
        assert_eq!(
            compare(&String::from("e9"), &String::from("e10")),
            Ok(Ordering::Greater)
        );
        assert_eq!(compare("same", "same"), Ok(Ordering::Equal));
    }

    #[test]
    fn elements_of_the_same_kind() {
        let a: Element = 12.into();
        let b: Element = 100.into();
        assert_eq!(a.compare(&b), Ok(Ordering::Less));

        let c: Element = "12".into();
        let d: Element = "100".into();
        assert_eq!(c.compare(&d), Ok(Ordering::Greater));
    }

    #[test]
    fn elements_of_different_kinds_mismatch() {
        let a: Element = 1.into();
        let b: Element = "1".into();
        assert_eq!(
            a.compare(&b),
            Err(CompareError::KindMismatch {
                left: Kind::Integer,
                right: Kind::Text
            })
        );
        assert_eq!(
            b.compare(&a),
            Err(CompareError::KindMismatch {
                left: Kind::Text,
                right: Kind::Integer
            })
        );
    }

    #[test]
    fn custom_elements_use_their_own_order() {
        let short: Element<ByLength> = Element::Custom(ByLength("zz"));
        let long: Element<ByLength> = Element::Custom(ByLength("aaaa"));
        assert_eq!(short.compare(&long), Ok(Ordering::Less));
        assert_eq!(short.kind(), Kind::Custom);

        let text: Element<ByLength> = "zz".into();
        assert!(short.compare(&text).is_err());
    }

    #[test]
    fn mismatch_message_names_both_kinds() {
        let err = CompareError::KindMismatch {
            left: Kind::Custom,
            right: Kind::Integer,
        };
        assert_eq!(
            err.to_string(),
            "type mismatch: cannot compare custom with integer"
        );
    }
}
