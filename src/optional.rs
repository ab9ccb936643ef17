//! # Optional Module
//!
//! The [`Optional`] container: a value that is either present (`Some`) or
//! absent (`None`).
//!
//! Instances are immutable. Every operation on the container is total, so
//! nothing here can fail or panic except [`Optional::expect_present`], which
//! exists for tests and demos.
//!
//! ## Equality
//!
//! Two optionals are equal when both are absent, or both are present with
//! equal payloads. An optional also compares against a bare payload:
//!
//! ```
//! use sundry_option::{some, none};
//!
//! assert!(some("orange") == "orange");
//! assert!("orange" == some("orange"));
//! assert!(none::<&str>() != "orange");
//! assert!(some("apple") != some("orange"));
//! ```
//!
//! `Optional<T> == T` works for every `T: PartialEq`. The reverse direction
//! is implemented for the primitive types and strings; for any other payload
//! type use [`eq_raw`].

use std::fmt;

use crate::error::{OptionalError, Result};

/// A value that may or may not be present.
///
/// Prefer the combinators (`map`, `bind`, `match_with`, ...) over matching on
/// the variants directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// A payload is present.
    Some(T),
    /// No payload.
    None,
}

/// Wraps `value` as a present optional. No validation is performed.
#[inline]
pub fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// The absent optional for `T`.
#[inline]
pub fn none<T>() -> Optional<T> {
    Optional::None
}

/// Compares a bare payload against an optional.
///
/// True iff `option` is present and its payload equals `raw`. Agrees with
/// `option == raw` for every payload type, including the ones that have no
/// `raw == option` operator.
pub fn eq_raw<T: PartialEq>(raw: &T, option: &Optional<T>) -> bool {
    option.holds(raw)
}

impl<T> Optional<T> {
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the payload, keeping the presence state.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// True iff present and the payload equals `raw`.
    pub fn holds(&self, raw: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Optional::Some(value) => value == raw,
            Optional::None => false,
        }
    }

    /// Returns the payload, or [`OptionalError::Absent`] naming the payload type.
    pub fn value(self) -> Result<T> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(OptionalError::Absent {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    /// Returns the payload, panicking with `msg` when absent.
    #[track_caller]
    pub fn expect_present(self, msg: &str) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => panic!("{}", msg),
        }
    }

    /// Narrows to the bare payload type.
    ///
    /// This conversion is lossy: an absent optional becomes `T::default()`,
    /// so afterwards "absent" and "present with the default value" cannot be
    /// told apart. Same as [`Optional::get_or_default`].
    pub fn into_raw(self) -> T
    where
        T: Default,
    {
        self.get_or_default()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Present values render as their payload, absent values as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(value) => write!(f, "{}", value),
            Optional::None => Ok(()),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<T: PartialEq> PartialEq<T> for Optional<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.holds(other)
    }
}

// `impl<T> PartialEq<Optional<T>> for T` is rejected by the orphan rules, so
// the bare-on-the-left direction is spelled out per type.
macro_rules! impl_raw_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<Optional<$ty>> for $ty {
                #[inline]
                fn eq(&self, other: &Optional<$ty>) -> bool {
                    other.holds(self)
                }
            }
        )*
    };
}

impl_raw_eq!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, String,
);

impl<'a> PartialEq<Optional<&'a str>> for &'a str {
    fn eq(&self, other: &Optional<&'a str>) -> bool {
        other.holds(self)
    }
}

impl PartialEq<str> for Optional<String> {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Optional::Some(value) if value == other)
    }
}

impl<'a> PartialEq<&'a str> for Optional<String> {
    fn eq(&self, other: &&'a str) -> bool {
        self == *other
    }
}

impl PartialEq<Optional<String>> for str {
    fn eq(&self, other: &Optional<String>) -> bool {
        other == self
    }
}

impl<'a> PartialEq<Optional<String>> for &'a str {
    fn eq(&self, other: &Optional<String>) -> bool {
        other == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_presence() {
        assert!(some(1).is_present());
        assert!(!some(1).is_absent());
        assert!(none::<i32>().is_absent());
        assert!(!none::<i32>().is_present());
    }

    #[test]
    fn test_some_wraps_default_verbatim() {
        let zero = some(0);
        assert!(zero.is_present());
        assert_ne!(zero, none());
    }

    #[test]
    fn test_equality_between_optionals() {
        assert_eq!(some(3), some(3));
        assert_ne!(some(3), some(4));
        assert_eq!(none::<i32>(), none::<i32>());
        assert_ne!(some(0), none::<i32>());
    }

    #[test]
    fn test_equality_against_raw_is_symmetric() {
        assert!(some(7i32) == 7);
        assert!(7i32 == some(7));
        assert!(some(7i32) != 8);
        assert!(8i32 != some(7));
        assert!(none::<i32>() != 0);
        assert!(0 != none::<i32>());
    }

    #[test]
    fn test_string_equality_across_borrowed_and_owned() {
        let owned = some("orange".to_string());
        assert!(owned == "orange");
        assert!("orange" == owned);
        assert!(owned == *"orange");
        assert!(*"orange" == owned);
        assert!(none::<String>() != "orange");
        assert!("orange" != none::<String>());
        assert!(String::from("orange") == owned);
    }

    #[test]
    fn test_eq_raw_for_custom_payload() {
        #[derive(Debug, PartialEq)]
        struct Crate(u32);

        assert!(eq_raw(&Crate(2), &some(Crate(2))));
        assert!(!eq_raw(&Crate(2), &some(Crate(3))));
        assert!(!eq_raw(&Crate(2), &none()));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        assert_eq!(hash_of(&none::<u8>()), hash_of(&none::<u8>()));
        assert_eq!(hash_of(&some("x")), hash_of(&some("x")));
        assert_ne!(hash_of(&some(0u8)), hash_of(&none::<u8>()));
    }

    #[test]
    fn test_display() {
        assert_eq!(some("apple").to_string(), "apple");
        assert_eq!(some(42).to_string(), "42");
        assert_eq!(none::<&str>().to_string(), "");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", some(1)), "Some(1)");
        assert_eq!(format!("{:?}", none::<i32>()), "None");
    }

    #[test]
    fn test_default_is_absent() {
        let value: Optional<String> = Optional::default();
        assert!(value.is_absent());
    }

    #[test]
    fn test_into_raw_is_lossy() {
        assert_eq!(some(5).into_raw(), 5);
        assert_eq!(none::<i32>().into_raw(), 0);
        assert_eq!(some(0).into_raw(), none::<i32>().into_raw());
    }

    #[test]
    fn test_value_reports_type_when_absent() {
        assert_eq!(some(5).value(), Ok(5));
        assert_eq!(
            none::<u16>().value(),
            Err(OptionalError::Absent { type_name: "u16" })
        );
    }

    #[test]
    #[should_panic(expected = "no stock")]
    fn test_expect_present_panics_when_absent() {
        none::<i32>().expect_present("no stock");
    }

    #[test]
    fn test_std_option_interop() {
        assert_eq!(Optional::from(Some(1)), some(1));
        assert_eq!(Optional::<i32>::from(None), none());
        assert_eq!(some(1).into_option(), Some(1));
        assert_eq!(none::<i32>().into_option(), None);
    }

    #[test]
    fn test_as_ref_keeps_state() {
        let owned = some(String::from("pear"));
        assert_eq!(owned.as_ref().map(|s| s.len()), some(4));
        assert!(none::<String>().as_ref().is_absent());
    }
}
