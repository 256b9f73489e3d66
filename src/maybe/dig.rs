//! Safe traversal of nested keyed structures.
//!
//! This module provides the [`Dig`] trait, the seam through which
//! [`Maybe::dig`] reaches one level down into a keyed container. Chaining
//! `dig` calls walks a nested structure without manual presence checks at
//! each level: the first missing key (or a `None` receiver) short-circuits
//! the rest of the chain.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use kleisli::maybe::Maybe;
//!
//! let mut banana = HashMap::new();
//! banana.insert("price", 10.0);
//! let mut shopping = HashMap::new();
//! shopping.insert("banana", banana);
//!
//! let price = Maybe::of(shopping.clone()).dig("banana").dig("price");
//! assert_eq!(price.unwrap(), Some(10.0));
//!
//! let missing = Maybe::of(shopping).dig("banana").dig("prices");
//! assert!(missing.is_none());
//! assert_eq!(missing.or(11.5), 11.5);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::blank::Blank;

use super::Maybe;

/// One level of keyed lookup into a container.
///
/// Lookups return an owned copy of the found value so that a `dig` chain
/// can keep moving through the structure; implementations for std maps
/// therefore require `Clone` values.
pub trait Dig<K> {
    /// The value type produced by a successful lookup.
    type Output;

    /// Looks up `key`, returning the value when present.
    fn dig(&self, key: K) -> Option<Self::Output>;
}

impl<K, V, Q, S> Dig<&Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    type Output = V;

    #[inline]
    fn dig(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<K, V, Q> Dig<&Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
    V: Clone,
{
    type Output = V;

    #[inline]
    fn dig(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<T: Clone> Dig<usize> for Vec<T> {
    type Output = T;

    #[inline]
    fn dig(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

/// Object fields dig by string key.
#[cfg(feature = "json")]
impl Dig<&str> for serde_json::Value {
    type Output = Self;

    #[inline]
    fn dig(&self, key: &str) -> Option<Self> {
        self.get(key).cloned()
    }
}

/// Array elements dig by index.
#[cfg(feature = "json")]
impl Dig<usize> for serde_json::Value {
    type Output = Self;

    #[inline]
    fn dig(&self, index: usize) -> Option<Self> {
        self.get(index).cloned()
    }
}

impl<T> Maybe<T> {
    /// Looks up `key` in the payload, re-classifying the found value through
    /// the blank predicate. Missing keys and `None` receivers yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use kleisli::maybe::Maybe;
    ///
    /// let mut prices = HashMap::new();
    /// prices.insert("banana", 10.0);
    ///
    /// assert_eq!(Maybe::of(prices.clone()).dig("banana").unwrap(), Some(10.0));
    /// assert!(Maybe::of(prices).dig("apple").is_none());
    /// ```
    pub fn dig<K>(self, key: K) -> Maybe<T::Output>
    where
        T: Dig<K>,
        T::Output: Blank,
    {
        match self {
            Self::Some(value) => match value.dig(key) {
                Option::Some(found) => Maybe::of(found),
                Option::None => Maybe::None(Option::None),
            },
            Self::None(diagnostic) => Maybe::None(diagnostic),
        }
    }

    /// Like [`dig`](Maybe::dig) followed by [`unwrap`](Maybe::unwrap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use kleisli::maybe::Maybe;
    ///
    /// let mut prices = HashMap::new();
    /// prices.insert("banana", 10.0);
    ///
    /// assert_eq!(Maybe::of(prices).dig_unwrap("banana"), Some(10.0));
    /// ```
    #[inline]
    pub fn dig_unwrap<K>(self, key: K) -> Option<T::Output>
    where
        T: Dig<K>,
        T::Output: Blank,
    {
        self.dig(key).unwrap()
    }
}
