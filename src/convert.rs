//! Bridges from nullable values and strings into [`Optional`].

use std::str::FromStr;

use crate::error::{OptionalError, Result};
use crate::optional::{none, some, Optional};

/// Lifts a nullable reference. `None` (the null reference) becomes absent.
pub fn of_object<T: ?Sized>(value: Option<&T>) -> Optional<&T> {
    match value {
        Some(value) => some(value),
        None => none(),
    }
}

/// Lifts a nullable value. `None` becomes absent, `Some(v)` becomes present with `v`.
pub fn of_nullable<T>(value: Option<T>) -> Optional<T> {
    value.into()
}

/// Lifts a nullable string.
///
/// Both a missing string and an empty one are treated as absent. This is
/// stricter than [`of_object`], which only rejects a missing reference.
pub fn of_string<S: AsRef<str>>(value: Option<S>) -> Optional<S> {
    match value {
        Some(value) if !value.as_ref().is_empty() => some(value),
        _ => none(),
    }
}

/// Parses a nullable string into a typed optional.
///
/// Missing or empty input yields `Ok(None)`, like [`of_string`]. Non-empty
/// input that fails to parse is an [`OptionalError::Parse`].
pub fn parse_optional<T>(value: Option<&str>) -> Result<Optional<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match of_string(value) {
        Optional::Some(input) => input
            .parse::<T>()
            .map(some)
            .map_err(|e| OptionalError::Parse {
                input: input.to_string(),
                reason: e.to_string(),
            }),
        Optional::None => Ok(none()),
    }
}

/// Method-call form of the conversions above.
pub trait ToOptional {
    type Payload;

    fn to_optional(self) -> Optional<Self::Payload>;
}

impl<T> ToOptional for Option<T> {
    type Payload = T;

    fn to_optional(self) -> Optional<T> {
        of_nullable(self)
    }
}

impl<'a> ToOptional for &'a str {
    type Payload = &'a str;

    fn to_optional(self) -> Optional<&'a str> {
        of_string(Some(self))
    }
}

impl ToOptional for String {
    type Payload = String;

    fn to_optional(self) -> Optional<String> {
        of_string(Some(self))
    }
}
