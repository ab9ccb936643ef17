//! # Combinators
//!
//! Transformations, defaulting and conditional side effects over [`Optional`].
//!
//! Every combinator takes the optional by value and never changes it. The
//! closures are called at most once, synchronously, and only for the state
//! that the combinator documents. A panic inside a closure reaches the caller
//! unchanged.
//!
//! ```
//! use sundry_option::{some, none};
//!
//! let basket = some(3).map(|n| n * 2).bind(|n| if n > 4 { some(n) } else { none() });
//! assert_eq!(basket, some(6));
//!
//! let label = none::<i32>().match_with(|n| n.to_string(), || "empty".to_string());
//! assert_eq!(label, "empty");
//! ```

use crate::optional::Optional;

impl<T> Optional<T> {
    /// Calls `on_some` with the payload when present, otherwise `on_none`.
    /// Exactly one of the two is invoked.
    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Optional::Some(value) => on_some(value),
            Optional::None => on_none(),
        }
    }

    /// `Some(mapper(v))` when present, otherwise `None`. `mapper` is not
    /// called for an absent value.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(mapper(value)),
            Optional::None => Optional::None,
        }
    }

    /// Chains a computation that may itself produce an absent value.
    pub fn bind<U, F>(self, binder: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(value) => binder(value),
            Optional::None => Optional::None,
        }
    }

    /// The payload, or `T::default()` when absent.
    ///
    /// An explicitly meaningful default (`0`, `""`) is indistinguishable from
    /// absence in the result. Use [`Optional::get_or`] to pick the fallback.
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or(T::default())
    }

    /// The payload, or `fallback` when absent. `fallback` is evaluated eagerly.
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => fallback,
        }
    }

    /// `getter(payload)` when present, otherwise `U::default()`.
    pub fn get_with_or_default<U, G>(self, getter: G) -> U
    where
        U: Default,
        G: FnOnce(T) -> U,
    {
        self.get_with_or(getter, U::default())
    }

    /// `getter(payload)` when present, otherwise `fallback`.
    pub fn get_with_or<U, G>(self, getter: G, fallback: U) -> U
    where
        G: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => getter(value),
            Optional::None => fallback,
        }
    }

    /// Runs `action` on the payload when present. Returns `self` unchanged.
    pub fn when_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Optional::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` when absent. Returns `self` unchanged.
    pub fn when_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }
}
