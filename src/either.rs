//! Either type - an explicit success/failure value.
//!
//! This module provides the `Either<L, R>` type, a two-variant sum type in
//! which `Right` carries a success value and `Left` carries a caller-defined
//! failure payload. Unlike [`Maybe`](crate::maybe::Maybe), construction is
//! always explicit: no blank classification decides the variant, only the
//! constructor the caller picked (or, for the [`try_either`] adapter,
//! whether the computation panicked).
//!
//! # Examples
//!
//! ```rust
//! use kleisli::either::Either;
//!
//! fn divide(x: i32, y: i32) -> Either<String, i32> {
//!     if y == 0 {
//!         Either::Left("Cannot divide by 0".to_string())
//!     } else {
//!         Either::Right(x / y)
//!     }
//! }
//!
//! let failure = divide(10, 0);
//! assert!(failure.is_failure());
//! assert_eq!(failure.failure(), Some("Cannot divide by 0".to_string()));
//!
//! let success = divide(10, 2);
//! assert!(success.is_success());
//! assert_eq!(success.value(), 5);
//! ```

use std::fmt;

use crate::blank::Blank;
use crate::fault;

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// The variant tag is immutable once constructed. Conversion between
/// `Either` and `Maybe` is never implicit; each monad has its own `Try`
/// adapter bound to its own failure variant.
///
/// # Examples
///
/// ```rust
/// use kleisli::either::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let doubled = success.map_success(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant, carrying a caller-defined error payload.
    Left(L),
    /// The success variant, carrying the computed value.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Right` (success) value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(42);
    /// assert!(success.is_success());
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is a `Left` (failure) value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let failure: Either<String, i32> = Either::Left("nope".to_string());
    /// assert!(failure.is_failure());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(42);
    /// assert_eq!(success.success(), Some(42));
    ///
    /// let failure: Either<String, i32> = Either::Left("nope".to_string());
    /// assert_eq!(failure.success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let failure: Either<String, i32> = Either::Left("nope".to_string());
    /// assert_eq!(failure.failure(), Some("nope".to_string()));
    /// ```
    #[inline]
    pub fn failure(self) -> Option<L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the success payload, panicking when it is absent or blank.
    ///
    /// This is the asserted extraction: reaching for the value of a failure,
    /// or a success whose payload classifies blank, is a programming error
    /// and is signalled louder than the silent absence handling of
    /// [`Maybe::unwrap`](crate::maybe::Maybe::unwrap). Use
    /// [`try_value`](Either::try_value) for the non-panicking form.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyValueError`] message if this is a `Left`, or a
    /// `Right` whose payload is blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(5);
    /// assert_eq!(success.value(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(self) -> R
    where
        R: Blank,
    {
        match self.try_value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success payload, or an [`EmptyValueError`] when it is
    /// absent or blank.
    ///
    /// # Errors
    ///
    /// Returns `Err` if this is a `Left`, or a `Right` whose payload is
    /// blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(5);
    /// assert_eq!(success.try_value(), Ok(5));
    ///
    /// let blank: Either<String, &str> = Either::Right("   ");
    /// assert!(blank.try_value().is_err());
    /// ```
    pub fn try_value(self) -> Result<R, EmptyValueError>
    where
        R: Blank,
    {
        match self {
            Self::Right(value) if value.is_present() => Ok(value),
            Self::Right(_) => Err(EmptyValueError {
                found: "a blank success payload",
            }),
            Self::Left(_) => Err(EmptyValueError { found: "a failure" }),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(42);
    /// assert_eq!(success.success_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the failure payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let failure: Either<i32, String> = Either::Left(404);
    /// assert_eq!(failure.failure_ref(), Some(&404));
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(21);
    /// assert_eq!(success.map_success(|x| x * 2), Either::Right(42));
    ///
    /// let failure: Either<String, i32> = Either::Left("nope".to_string());
    /// assert_eq!(failure.map_success(|x| x * 2), Either::Left("nope".to_string()));
    /// ```
    #[inline]
    pub fn map_success<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the failure payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let failure: Either<i32, String> = Either::Left(21);
    /// assert_eq!(failure.map_failure(|x| x * 2), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the variant, keeping the
    /// result wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = success.bimap(|code: i32| code * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, failure_function: F, success_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(failure_function(error)),
            Self::Right(value) => Either::Right(success_function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    ///
    /// This is the canonical total-pattern-match terminal:
    /// `failure_function` receives the `Left` payload, `success_function`
    /// the `Right` payload, and both branches must produce the same output
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let failure: Either<String, i32> = Either::Left("Cannot divide by 0".to_string());
    /// let message = failure.fold(|error| error, |value| format!("got {value}"));
    /// assert_eq!(message, "Cannot divide by 0");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, failure_function: F, success_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => failure_function(error),
            Self::Right(value) => success_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the variants: `Left(l)` becomes `Right(l)` and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let failure: Either<i32, String> = Either::Left(42);
    /// assert_eq!(failure.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Invokes `hook` with the success payload when this is a `Right`, then
    /// returns the receiver unchanged. No-op on `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let mut seen = None;
    /// let success: Either<String, i32> = Either::Right(5);
    /// let result = success.on_success(|value| seen = Some(*value));
    /// assert_eq!(seen, Some(5));
    /// assert!(result.is_success());
    /// ```
    pub fn on_success<F>(self, hook: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            hook(value);
        }
        self
    }

    /// Invokes `hook` with the failure payload when this is a `Left`, then
    /// returns the receiver unchanged. No-op on `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let mut noted = None;
    /// let failure: Either<String, i32> = Either::Left("nope".to_string());
    /// let result = failure.on_failure(|error| noted = Some(error.clone()));
    /// assert_eq!(noted.as_deref(), Some("nope"));
    /// assert!(result.is_failure());
    /// ```
    pub fn on_failure<F>(self, hook: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(error) = &self {
            hook(error);
        }
        self
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`: `Ok` becomes `Right`, `Err`
    /// becomes `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let parsed: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = parsed.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`: `Right` becomes `Ok`, `Left`
    /// becomes `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::either::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(42);
    /// let result: Result<i32, String> = success.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Empty Value Error
// =============================================================================

/// The condition signalled by [`Either::value`] and [`Either::try_value`]
/// when the caller asserted a present success payload that did not hold.
///
/// # Examples
///
/// ```rust
/// use kleisli::either::Either;
///
/// let failure: Either<String, i32> = Either::Left("nope".to_string());
/// let error = failure.try_value().unwrap_err();
/// assert_eq!(format!("{error}"), "value is empty: found a failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyValueError {
    /// What the extraction found instead of a present success payload.
    pub found: &'static str,
}

impl fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "value is empty: found {}", self.found)
    }
}

impl std::error::Error for EmptyValueError {}

// =============================================================================
// Free Constructors
// =============================================================================

/// Creates a `Right` (success) value.
///
/// # Examples
///
/// ```rust
/// use kleisli::either::{self, Either};
///
/// let success: Either<String, i32> = either::right(42);
/// assert!(success.is_success());
/// ```
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Creates a `Left` (failure) value.
///
/// # Examples
///
/// ```rust
/// use kleisli::either::{self, Either};
///
/// let failure: Either<String, i32> = either::left("nope".to_string());
/// assert!(failure.is_failure());
/// ```
#[inline]
pub const fn left<L, R>(error: L) -> Either<L, R> {
    Either::Left(error)
}

// =============================================================================
// Try Adapter
// =============================================================================

/// Runs `computation`, wrapping completion as `Right` and converting a panic
/// into `Left(fallback)`.
///
/// The fault detail is discarded; `fallback` is the caller-defined failure
/// payload for the panic case.
///
/// # Examples
///
/// ```rust
/// use kleisli::either::{self, Either};
///
/// let success = either::try_either("went wrong", || 21 * 2);
/// assert_eq!(success, Either::Right(42));
///
/// let failure = either::try_either("went wrong", || -> i32 { panic!("boom") });
/// assert_eq!(failure, Either::Left("went wrong"));
/// ```
pub fn try_either<L, R, F>(fallback: L, computation: F) -> Either<L, R>
where
    F: FnOnce() -> R,
{
    match fault::run_caught(computation) {
        Ok(value) => Either::Right(value),
        Err(_) => Either::Left(fallback),
    }
}

// =============================================================================
// Opt-in Factory Methods
// =============================================================================

/// Opt-in factory shorthands for `Either`.
///
/// A host type gains the monad's constructors as its own associated
/// functions by declaring an empty conformance:
///
/// ```rust
/// use kleisli::either::{Either, Eitherable};
///
/// struct Billing;
/// impl Eitherable for Billing {}
///
/// let charged: Either<String, u32> = Billing::right(100);
/// assert!(charged.is_success());
/// ```
///
/// All methods are provided; conforming types override nothing.
pub trait Eitherable {
    /// Creates a `Right` (success) value.
    #[inline]
    fn right<L, R>(value: R) -> Either<L, R> {
        Either::Right(value)
    }

    /// Creates a `Left` (failure) value.
    #[inline]
    fn left<L, R>(error: L) -> Either<L, R> {
        Either::Left(error)
    }

    /// Runs `computation`, converting a panic into `Left(fallback)`.
    #[inline]
    fn try_either<L, R, F>(fallback: L, computation: F) -> Either<L, R>
    where
        F: FnOnce() -> R,
    {
        try_either(fallback, computation)
    }
}
