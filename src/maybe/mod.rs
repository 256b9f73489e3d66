//! Maybe type - an optional value with blank-aware construction.
//!
//! This module provides the `Maybe<T>` type, a two-variant sum type
//! representing the presence (`Some`) or absence (`None`) of a value.
//! Unlike [`Option`], construction through [`Maybe::of`] classifies *blank*
//! values (see [`Blank`]) as absent, and the `None` variant carries an
//! optional human-readable diagnostic for debugging. The diagnostic is
//! never required for correctness and does not participate in comparisons.
//!
//! # Laws
//!
//! All composition operators preserve these laws:
//!
//! ## Identity on Absence
//!
//! Mapping over a `None` returns it unchanged and never invokes the function:
//!
//! ```text
//! none.map(f) == none
//! ```
//!
//! ## Short-Circuit
//!
//! Once a chain reaches `None`, no subsequent operand is evaluated:
//!
//! ```text
//! none >> f == none    (f is never called)
//! ```
//!
//! ## Composition
//!
//! For functions whose outputs are never blank:
//!
//! ```text
//! some(v).map(f).map(g) == some(v).map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::maybe::{self, Maybe};
//!
//! // Blank-aware construction
//! assert!(Maybe::of("   ").is_none());
//! assert!(Maybe::of(0).is_some());
//!
//! // Chaining with short-circuit
//! let result = (maybe::some(2) >> (|x| maybe::some(x * 5))) >> (|x| maybe::some(x + 1));
//! assert_eq!(result.unwrap(), Some(11));
//!
//! // Absence flows through untouched
//! let absent = maybe::none::<i32>().map(|x| x + 1);
//! assert!(absent.is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Shr;

use crate::blank::Blank;
use crate::fault;
use crate::outcome::Outcome;

mod dig;

pub use dig::Dig;

/// An optional value with blank-aware construction and a diagnostic-carrying
/// absent variant.
///
/// `Maybe<T>` is either `Some(value)` or `None(diagnostic)`. The variant tag
/// is immutable once constructed; only [`map_in_place`](Maybe::map_in_place)
/// replaces the payload of an existing `Some`, never the tag.
///
/// The `None` diagnostic is an optional note (for example a captured panic
/// message). It is carried for debugging only: two `None`s compare equal
/// whatever their diagnostics say.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe::Maybe;
///
/// let present = Maybe::of(10);
/// assert_eq!(present.unwrap(), Some(10));
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.or(7), 7);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// An absent value, with an optional human-readable diagnostic.
    None(Option<String>),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Classifies `value` through the blank predicate: blank values become
    /// `None`, everything else becomes `Some(value)`.
    ///
    /// A panic raised while classifying is swallowed: the result is `None`
    /// carrying the panic message as its diagnostic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// assert!(Maybe::of(10).is_some());
    /// assert!(Maybe::of(0).is_some());
    /// assert!(Maybe::of("  ").is_none());
    /// assert!(Maybe::of(false).is_none());
    /// ```
    pub fn of(value: T) -> Self
    where
        T: Blank,
    {
        match fault::run_caught(|| value.is_blank()) {
            Ok(true) => Self::None(Option::None),
            Ok(false) => Self::Some(value),
            Err(message) => Self::None(message),
        }
    }

    /// Creates a `None` without a diagnostic.
    ///
    /// Direct constructors bypass the blank predicate entirely; see also the
    /// `Maybe::Some` variant constructor, which keeps a blank payload
    /// `Some` rather than reclassifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert!(absent.is_none());
    /// assert_eq!(absent.diagnostic(), None);
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None(Option::None)
    }

    /// Creates a `None` carrying `diagnostic`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none_with("user not found");
    /// assert_eq!(absent.diagnostic(), Some("user not found"));
    /// ```
    #[inline]
    pub fn none_with(diagnostic: impl Into<String>) -> Self {
        Self::None(Option::Some(diagnostic.into()))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// assert!(Maybe::Some(1).is_some());
    /// assert!(!Maybe::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_none());
    /// assert!(!Maybe::Some(1).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None(_))
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the payload if this is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(5).value_ref(), Some(&5));
    /// assert_eq!(Maybe::<i32>::none().value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None(_) => Option::None,
        }
    }

    /// Returns the diagnostic note if this is a `None` carrying one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none_with("boom");
    /// assert_eq!(absent.diagnostic(), Some("boom"));
    /// assert_eq!(Maybe::Some(1).diagnostic(), None);
    /// ```
    #[inline]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::None(Option::Some(message)) => Option::Some(message.as_str()),
            _ => Option::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the payload, re-classifying the output through
    /// the blank predicate.
    ///
    /// On `Some(v)` the result is `Maybe::of(function(v))`; a panic inside
    /// `function` is converted into `None` carrying the panic message. On
    /// `None` the receiver flows through unchanged and `function` is never
    /// invoked.
    ///
    /// Use [`fmap`](Maybe::fmap) to keep a blank output `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::{self, Maybe};
    ///
    /// assert_eq!(maybe::some(1).map(|n| n + 2).unwrap(), Some(3));
    ///
    /// // The output is re-classified: an all-whitespace string is absent
    /// assert!(maybe::some(1).map(|_| "  ").is_none());
    ///
    /// // A panic becomes an absent value carrying the message
    /// let burst = maybe::some(1).map(|_| -> i32 { panic!("boom") });
    /// assert_eq!(burst.diagnostic(), Some("boom"));
    /// ```
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        U: Blank,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => match fault::run_caught(move || function(value)) {
                Ok(result) => Maybe::of(result),
                Err(message) => Maybe::None(message),
            },
            Self::None(diagnostic) => Maybe::None(diagnostic),
        }
    }

    /// Alias of [`map`](Maybe::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// assert_eq!(maybe::some(2).apply(|n| n * 3).unwrap(), Some(6));
    /// ```
    #[inline]
    pub fn apply<U, F>(self, function: F) -> Maybe<U>
    where
        U: Blank,
        F: FnOnce(T) -> U,
    {
        self.map(function)
    }

    /// Like [`map`](Maybe::map) followed by [`unwrap`](Maybe::unwrap) — a
    /// terminal convenience that hands back the raw output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// assert_eq!(maybe::some(2).apply_unwrap(|n| n * 3), Some(6));
    /// assert_eq!(maybe::none::<i32>().apply_unwrap(|n| n * 3), None);
    /// ```
    #[inline]
    pub fn apply_unwrap<U, F>(self, function: F) -> Option<U>
    where
        U: Blank,
        F: FnOnce(T) -> U,
    {
        self.map(function).unwrap()
    }

    /// Applies `function` to the payload and always rewraps the output as
    /// `Some`, without consulting the blank predicate and without capturing
    /// panics. Identity on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// // fmap keeps a blank output present where map would classify it away
    /// assert!(maybe::some(1).fmap(|_| "  ").is_some());
    /// assert!(maybe::some(1).map(|_| "  ").is_none());
    /// ```
    pub fn fmap<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None(diagnostic) => Maybe::None(diagnostic),
        }
    }

    /// Mutates the payload of a `Some` in place and returns the
    /// re-classified result.
    ///
    /// This is the one operator that mutates the receiver rather than
    /// returning a replacement; observers holding the receiver see the new
    /// payload. On `None` the receiver is left untouched and a clone of it
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::{self, Maybe};
    ///
    /// let mut price = maybe::some(9.0);
    /// let bumped = price.map_in_place(|n| *n += 1.0);
    ///
    /// assert_eq!(bumped.unwrap(), Some(10.0));
    /// assert_eq!(price.unwrap(), Some(10.0));
    /// ```
    pub fn map_in_place<F>(&mut self, function: F) -> Self
    where
        T: Blank + Clone,
        F: FnOnce(&mut T),
    {
        match self {
            Self::Some(value) => {
                function(value);
                Self::of(value.clone())
            }
            Self::None(diagnostic) => Self::None(diagnostic.clone()),
        }
    }

    // =========================================================================
    // Binding Operations
    // =========================================================================

    /// Right-bind: evaluates `function` with the payload and returns its
    /// `Maybe` result; short-circuits on `None` without evaluating
    /// `function`.
    ///
    /// This is the method form of the `>>` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// let chained = maybe::some(10).and_then(|n| maybe::some(n / 2));
    /// assert_eq!(chained.unwrap(), Some(5));
    ///
    /// let skipped = maybe::none::<i32>().and_then(|n| maybe::some(n / 2));
    /// assert!(skipped.is_none());
    /// ```
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None(diagnostic) => Maybe::None(diagnostic),
        }
    }

    /// Replaces a `Some` with `other`; short-circuits on `None`.
    ///
    /// This is the literal-operand sibling of [`and_then`](Maybe::and_then):
    /// where the bind operator takes a function of the payload, `and` takes
    /// an already-computed `Maybe` and returns it whenever the receiver is
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// assert_eq!(maybe::some(1).and(maybe::some("next")).unwrap(), Some("next"));
    /// assert!(maybe::none::<i32>().and(maybe::some("next")).is_none());
    /// ```
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None(diagnostic) => Maybe::None(diagnostic),
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Returns the payload for `Some`, or [`Option::None`] for `None` —
    /// never panics. The diagnostic is not a payload and is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::{self, Maybe};
    ///
    /// assert_eq!(maybe::some(1).unwrap(), Some(1));
    /// assert_eq!(Maybe::<i32>::none_with("boom").unwrap(), None);
    /// ```
    #[inline]
    pub fn unwrap(self) -> Option<T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None(_) => Option::None,
        }
    }

    /// Returns the payload when it classifies as present, else `default`.
    ///
    /// The check runs against the raw payload independent of the variant
    /// tag, mirroring the classification applied at construction: a `Some`
    /// holding a blank payload (asserted through the direct constructor)
    /// also falls back to `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(1).or(2), 1);
    /// assert_eq!(Maybe::of("").or("fallback"), "fallback");
    /// assert_eq!(Maybe::Some("  ").or("fallback"), "fallback");
    /// ```
    pub fn or(self, default: T) -> T
    where
        T: Blank,
    {
        match self {
            Self::Some(value) if value.is_present() => value,
            _ => default,
        }
    }

    /// Variant dispatch: invokes `some_function` with the payload of a
    /// `Some`, or `none_function` (no argument) for a `None`.
    ///
    /// This is the canonical total-pattern-match terminal; both branches
    /// must produce the same output type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::{self, Maybe};
    ///
    /// let described = maybe::some(3).fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(described, "got 3");
    ///
    /// let described = Maybe::<i32>::none().fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(described, "nothing");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, some_function: F, none_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None(_) => none_function(),
        }
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Invokes `hook` with the receiver when it is `Some`, then returns the
    /// receiver unchanged. No-op on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// let mut seen = None;
    /// let result = maybe::some(5).on_success(|some| seen = some.value_ref().copied());
    /// assert_eq!(seen, Some(5));
    /// assert!(result.is_some());
    /// ```
    pub fn on_success<F>(self, hook: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_some() {
            hook(&self);
        }
        self
    }

    /// Invokes `hook` with the receiver when it is `None`, then returns the
    /// receiver unchanged. No-op on `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::{self, Maybe};
    ///
    /// let mut noted = None;
    /// let result = Maybe::<i32>::none_with("missing")
    ///     .on_failure(|none| noted = none.diagnostic().map(str::to_string));
    /// assert_eq!(noted.as_deref(), Some("missing"));
    /// assert!(result.is_none());
    /// ```
    pub fn on_failure<F>(self, hook: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_none() {
            hook(&self);
        }
        self
    }

    /// Dispatches to [`on_success`](Maybe::on_success) or
    /// [`on_failure`](Maybe::on_failure) based on `outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    /// use kleisli::outcome::Outcome;
    ///
    /// let mut fired = false;
    /// maybe::some(1).on(Outcome::Failure, |_| fired = true);
    /// assert!(!fired);
    /// ```
    pub fn on<F>(self, outcome: Outcome, hook: F) -> Self
    where
        F: FnOnce(&Self),
    {
        match outcome {
            Outcome::Success => self.on_success(hook),
            Outcome::Failure => self.on_failure(hook),
        }
    }
}

// =============================================================================
// Pipe Operator
// =============================================================================

/// The pipe operator: `value >> function`.
///
/// `Some(v) >> f` evaluates `f(v)`, which must itself return a `Maybe`;
/// `None >> f` short-circuits without evaluating `f`. Chains are
/// left-associative, so in `a >> f >> g` the function `g` only runs when
/// `a >> f` produced a `Some`.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe::{self, Maybe};
///
/// let result = (maybe::some(20.0) >> (|x: f64| maybe::some(x * 0.9))) >> (|x| maybe::some(x / 2.0));
/// assert_eq!(result.unwrap(), Some(9.0));
///
/// let skipped = maybe::none::<f64>() >> (|x: f64| maybe::some(x / 2.0));
/// assert!(skipped.is_none());
/// ```
impl<T, U, F> Shr<F> for Maybe<T>
where
    F: FnOnce(T) -> Maybe<U>,
{
    type Output = Maybe<U>;

    #[inline]
    fn shr(self, function: F) -> Maybe<U> {
        self.and_then(function)
    }
}

// =============================================================================
// Comparison Implementations
// =============================================================================

/// Equality ignores diagnostics: any two `None`s are equal.
impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(own), Self::Some(theirs)) => own == theirs,
            (Self::None(_), Self::None(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

/// Ordering places `None` before `Some` and ignores diagnostics.
impl<T: PartialOrd> PartialOrd for Maybe<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Some(own), Self::Some(theirs)) => own.partial_cmp(theirs),
            (Self::Some(_), Self::None(_)) => Option::Some(Ordering::Greater),
            (Self::None(_), Self::Some(_)) => Option::Some(Ordering::Less),
            (Self::None(_), Self::None(_)) => Option::Some(Ordering::Equal),
        }
    }
}

impl<T: Ord> Ord for Maybe<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Some(own), Self::Some(theirs)) => own.cmp(theirs),
            (Self::Some(_), Self::None(_)) => Ordering::Greater,
            (Self::None(_), Self::Some(_)) => Ordering::Less,
            (Self::None(_), Self::None(_)) => Ordering::Equal,
        }
    }
}

/// Hashing is consistent with equality: diagnostics do not participate.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Some(value) => {
                state.write_u8(1);
                value.hash(state);
            }
            Self::None(_) => state.write_u8(0),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None(Option::None) => formatter.write_str("None"),
            Self::None(Option::Some(diagnostic)) => {
                formatter.debug_tuple("None").field(diagnostic).finish()
            }
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T: Blank> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Option::None` becomes `None`; `Option::Some(v)` is classified
    /// through [`Maybe::of`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe::Maybe;
    ///
    /// assert!(Maybe::from(Some(1)).is_some());
    /// assert!(Maybe::from(Some("  ")).is_none());
    /// assert!(Maybe::<i32>::from(None).is_none());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Option::Some(value) => Self::of(value),
            Option::None => Self::None(Option::None),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`, discarding any diagnostic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::maybe;
    ///
    /// let option: Option<i32> = maybe::some(5).into();
    /// assert_eq!(option, Some(5));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.unwrap()
    }
}

// =============================================================================
// Free Constructors
// =============================================================================

/// Creates a `Some` directly, bypassing the blank predicate.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe;
///
/// assert!(maybe::some(0).is_some());
/// assert!(maybe::some("").is_some());
/// ```
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Creates a `None` without a diagnostic.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe;
///
/// assert!(maybe::none::<i32>().is_none());
/// ```
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::none()
}

/// Creates a `None` carrying a diagnostic.
#[inline]
pub fn none_with<T>(diagnostic: impl Into<String>) -> Maybe<T> {
    Maybe::none_with(diagnostic)
}

/// Classifies `value` through the blank predicate — shorthand for
/// [`Maybe::of`].
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe::maybe;
///
/// assert!(maybe(10).is_some());
/// assert!(maybe("   ").is_none());
/// ```
#[inline]
pub fn maybe<T: Blank>(value: T) -> Maybe<T> {
    Maybe::of(value)
}

// =============================================================================
// Try Adapter
// =============================================================================

/// Runs `computation`, wrapping completion as `Some` and converting a panic
/// into `None` carrying the panic message as its diagnostic.
///
/// The output is wrapped directly — the blank predicate is not consulted.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe;
///
/// let parsed = maybe::try_with(|| "42".parse::<i32>().unwrap());
/// assert_eq!(parsed.unwrap(), Some(42));
///
/// let burst = maybe::try_with(|| -> i32 { panic!("bad input") });
/// assert!(burst.is_none());
/// assert_eq!(burst.diagnostic(), Some("bad input"));
/// ```
pub fn try_with<T, F>(computation: F) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    match fault::run_caught(computation) {
        Ok(value) => Maybe::Some(value),
        Err(message) => Maybe::None(message),
    }
}

/// Like [`try_with`], but a panic yields `None` carrying `fallback` as the
/// diagnostic instead of the panic message.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe;
///
/// let burst = maybe::try_or("lookup failed", || -> i32 { panic!("boom") });
/// assert_eq!(burst.diagnostic(), Some("lookup failed"));
/// ```
pub fn try_or<T, F>(fallback: impl Into<String>, computation: F) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    match fault::run_caught(computation) {
        Ok(value) => Maybe::Some(value),
        Err(_) => Maybe::None(Option::Some(fallback.into())),
    }
}

// =============================================================================
// Opt-in Factory Methods
// =============================================================================

/// Opt-in factory shorthands for `Maybe`.
///
/// A host type gains the monad's constructors as its own associated
/// functions by declaring an empty conformance:
///
/// ```rust
/// use kleisli::maybe::{Maybe, Maybeable};
///
/// struct Inventory;
/// impl Maybeable for Inventory {}
///
/// let stock: Maybe<u32> = Inventory::maybe(3);
/// assert!(stock.is_some());
/// ```
///
/// All methods are provided; conforming types override nothing.
pub trait Maybeable {
    /// Creates a `Some` directly, bypassing the blank predicate.
    #[inline]
    fn some<T>(value: T) -> Maybe<T> {
        Maybe::Some(value)
    }

    /// Creates a `None` without a diagnostic.
    #[inline]
    fn none<T>() -> Maybe<T> {
        Maybe::none()
    }

    /// Creates a `None` carrying a diagnostic.
    #[inline]
    fn none_with<T>(diagnostic: impl Into<String>) -> Maybe<T> {
        Maybe::none_with(diagnostic)
    }

    /// Classifies `value` through the blank predicate.
    #[inline]
    fn maybe<T: Blank>(value: T) -> Maybe<T> {
        Maybe::of(value)
    }

    /// Runs `computation`, converting a panic into `None` carrying the panic
    /// message.
    #[inline]
    fn try_maybe<T, F>(computation: F) -> Maybe<T>
    where
        F: FnOnce() -> T,
    {
        try_with(computation)
    }

    /// Runs `computation`, converting a panic into `None` carrying
    /// `fallback` as the diagnostic.
    #[inline]
    fn try_maybe_or<T, F>(fallback: impl Into<String>, computation: F) -> Maybe<T>
    where
        F: FnOnce() -> T,
    {
        try_or(fallback, computation)
    }
}
