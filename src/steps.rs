//! Ordered, short-circuiting step pipelines.
//!
//! This module provides the [`Steps`] trait: a receiver type declares an
//! immutable, ordered registry of named operations (the [`steps!`](crate::steps!)
//! macro builds it at compile time), and the provided [`call`](Steps::call) folds
//! that registry through `Maybe`'s `>>` operator. Each step runs against the
//! receiver — steps read and write receiver state directly rather than
//! threading the previous payload — and the first step returning `None`
//! stops the pipeline: no later step is invoked, and that `None` is the
//! final result.
//!
//! `call` performs no fault recovery of its own. A step that wants
//! absence-on-panic semantics opts in by wrapping its body in
//! [`try_with`](crate::maybe::try_with) (or
//! [`try_maybe`](crate::maybe::Maybeable::try_maybe)); an unguarded panic
//! propagates to the caller.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::maybe::{Maybe, Maybeable};
//! use kleisli::steps::{Step, Steps};
//! use kleisli::steps;
//!
//! struct OrderTax {
//!     x: f64,
//! }
//!
//! impl Maybeable for OrderTax {}
//!
//! impl Steps for OrderTax {
//!     type Output = f64;
//!
//!     const STEPS: &'static [Step<Self>] = steps![positive, apply_tax, divide];
//! }
//!
//! impl OrderTax {
//!     fn positive(&mut self) -> Maybe<f64> {
//!         if self.x > 0.0 { Self::some(self.x) } else { Self::none() }
//!     }
//!
//!     fn apply_tax(&mut self) -> Maybe<f64> {
//!         Self::try_maybe(|| {
//!             self.x -= self.x * 0.1;
//!             self.x
//!         })
//!     }
//!
//!     fn divide(&mut self) -> Maybe<f64> {
//!         Self::try_maybe(|| {
//!             self.x /= 2.0;
//!             self.x
//!         })
//!     }
//! }
//!
//! let mut order = OrderTax { x: 20.0 };
//! assert_eq!(order.call().unwrap(), Some(9.0));
//!
//! let mut negative = OrderTax { x: -1.0 };
//! assert_eq!(negative.call().or(0.0), 0.0);
//! ```

use crate::maybe::{Maybe, Maybeable};

/// One named entry in a step registry.
///
/// The `run` pointer invokes the corresponding method on the receiver;
/// `name` is the registered identifier, kept for diagnostics.
pub struct Step<S: Steps> {
    /// The registered step identifier.
    pub name: &'static str,
    /// Invokes the step against the receiver.
    pub run: fn(&mut S) -> Maybe<S::Output>,
}

impl<S: Steps> Clone for Step<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Steps> Copy for Step<S> {}

impl<S: Steps> std::fmt::Debug for Step<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Step").field("name", &self.name).finish()
    }
}

/// An ordered pipeline of named operations on one receiver.
///
/// Implementors declare the registry once, at definition time, through the
/// [`steps!`](crate::steps!) macro; it is read on every [`call`](Steps::call)
/// and never mutated. All instances of the type share the same registry.
///
/// See the [module documentation](self) for a worked example.
pub trait Steps: Maybeable + Sized + 'static {
    /// The payload type produced by each step.
    type Output;

    /// The registry: step entries in registration order.
    const STEPS: &'static [Step<Self>];

    /// Runs the registered steps in order, short-circuiting at the first
    /// `None`.
    ///
    /// Folds the registry through the `>>` operator: every step is invoked
    /// against the receiver only while the accumulator is present. When all
    /// steps return `Some`, the result is the last step's `Some`; an empty
    /// registry yields `Maybe::none()`, since no step produced a value.
    fn call(&mut self) -> Maybe<Self::Output> {
        let mut registry = Self::STEPS.iter();
        let Some(first) = registry.next() else {
            return Maybe::none();
        };

        let mut outcome = (first.run)(self);
        for step in registry {
            outcome = outcome >> (|_previous| (step.run)(&mut *self));
        }
        outcome
    }
}

/// Builds a step registry from method names, in registration order.
///
/// Expands to a `&'static [Step<Self>]` whose entries invoke the named
/// methods; each method must take `&mut self` and return
/// `Maybe<Self::Output>`.
///
/// # Examples
///
/// ```rust
/// use kleisli::maybe::{Maybe, Maybeable};
/// use kleisli::steps::{Step, Steps};
/// use kleisli::steps;
///
/// struct Countdown {
///     remaining: u32,
/// }
///
/// impl Maybeable for Countdown {}
///
/// impl Steps for Countdown {
///     type Output = u32;
///
///     const STEPS: &'static [Step<Self>] = steps![tick, tick];
/// }
///
/// impl Countdown {
///     fn tick(&mut self) -> Maybe<u32> {
///         match self.remaining.checked_sub(1) {
///             Some(left) => {
///                 self.remaining = left;
///                 Self::some(left)
///             }
///             None => Self::none_with("counted past zero"),
///         }
///     }
/// }
///
/// let mut launch = Countdown { remaining: 2 };
/// assert_eq!(launch.call().unwrap(), Some(0));
///
/// let mut expired = Countdown { remaining: 1 };
/// assert!(expired.call().is_none());
/// ```
#[macro_export]
macro_rules! steps {
    ($($step:ident),+ $(,)?) => {
        &[
            $(
                $crate::steps::Step {
                    name: stringify!($step),
                    run: |receiver| receiver.$step(),
                },
            )+
        ]
    };
}
