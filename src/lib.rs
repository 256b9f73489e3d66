//! # kleisli
//!
//! A small functional toolkit for composing possibly-absent and
//! possibly-failing computations without manual nil/error checks at
//! each step.
//!
//! ## Overview
//!
//! - **`Maybe<T>`**: an optional value (`Some`/`None`) whose construction
//!   classifies *blank* values — the nothing sentinel, whitespace-only
//!   strings, and `false` — as absent.
//! - **`Either<L, R>`**: an explicit success/failure value (`Right`/`Left`)
//!   with no blank classification at construction.
//! - **Try adapters**: run a computation and convert a panic into the
//!   failure variant of the monad the adapter is bound to.
//! - **Steps**: an ordered pipeline of named operations on one receiver,
//!   folded through `Maybe`'s `>>` operator so the first absence
//!   short-circuits the rest.
//!
//! ## Feature Flags
//!
//! - `maybe`: the `Maybe` sum type, the `Blank` predicate and `Dig` traversal
//! - `either`: the `Either` sum type
//! - `steps`: the step pipeline runner (implies `maybe`)
//! - `serde`: `Serialize`/`Deserialize` for the sum types
//! - `json`: `Blank` and `Dig` support for `serde_json::Value`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let price = maybe(20.0_f64)
//!     .map(|x| x - x * 0.1)
//!     .map(|x| x / 2.0);
//!
//! assert_eq!(price.unwrap(), Some(9.0));
//!
//! let absent = maybe("   ").map(|s| s.len());
//! assert!(absent.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and constructor functions.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    pub use crate::blank::Blank;
    pub use crate::outcome::Outcome;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::{
        Dig, Maybe, Maybeable, maybe, none, none_with, some, try_or, try_with,
    };

    #[cfg(feature = "either")]
    pub use crate::either::{Either, Eitherable, EmptyValueError, left, right, try_either};

    #[cfg(feature = "steps")]
    pub use crate::steps::{Step, Steps};
}

pub mod blank;
pub mod outcome;

#[cfg(any(feature = "maybe", feature = "either"))]
mod fault;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "either")]
pub mod either;

#[cfg(feature = "steps")]
pub mod steps;
