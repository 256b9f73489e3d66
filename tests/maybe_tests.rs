//! Unit tests for the Maybe<T> type.
//!
//! Maybe represents an optional value with blank-aware construction:
//! - `Some(value)`: a present value
//! - `None(diagnostic)`: absence, with an optional debugging note
//!
//! Construction through `of` classifies blank values (nothing sentinels,
//! whitespace-only strings, `false`) as absent; the direct variant
//! constructors never reclassify.

#![cfg(feature = "maybe")]

use std::cell::Cell;
use std::collections::HashMap;

use kleisli::maybe::{self, Maybe, Maybeable};
use kleisli::outcome::Outcome;
use rstest::rstest;

// =============================================================================
// Blank-Aware Construction
// =============================================================================

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n ")]
fn of_classifies_whitespace_strings_as_none(#[case] text: &str) {
    assert!(Maybe::of(text).is_none());
}

#[rstest]
#[case("a")]
#[case(" a ")]
#[case("0")]
fn of_keeps_content_strings_some(#[case] text: &str) {
    assert!(Maybe::of(text).is_some());
}

#[rstest]
fn of_keeps_zero_and_negative_numbers_some() {
    assert!(Maybe::of(0).is_some());
    assert!(Maybe::of(-1).is_some());
    assert!(Maybe::of(0.0).is_some());
}

#[rstest]
fn of_classifies_false_as_none() {
    assert!(Maybe::of(false).is_none());
    assert!(Maybe::of(true).is_some());
}

#[rstest]
fn of_classifies_nothing_sentinels_as_none() {
    assert!(Maybe::of(()).is_none());
    assert!(Maybe::of(Option::<i32>::None).is_none());
}

#[rstest]
fn of_keeps_empty_collections_some() {
    assert!(Maybe::of(Vec::<i32>::new()).is_some());
    assert!(Maybe::of(HashMap::<String, i32>::new()).is_some());
}

#[rstest]
fn direct_constructors_bypass_the_predicate() {
    assert!(maybe::some("").is_some());
    assert!(maybe::some(false).is_some());

    let absent: Maybe<i32> = maybe::none_with("user not found");
    assert!(absent.is_none());
    assert_eq!(absent.diagnostic(), Some("user not found"));
}

// =============================================================================
// Unwrap and Or
// =============================================================================

#[rstest]
fn unwrap_returns_the_payload_for_some() {
    assert_eq!(Maybe::of(1).unwrap(), Some(1));
}

#[rstest]
fn unwrap_returns_nothing_for_none() {
    assert_eq!(Maybe::of("").unwrap(), None);
    let noted: Maybe<i32> = maybe::none_with("boom");
    assert_eq!(noted.unwrap(), None);
}

#[rstest]
fn or_returns_the_payload_when_present() {
    assert_eq!(Maybe::of(1).or(2), 1);
}

#[rstest]
fn or_returns_the_default_when_absent_or_blank() {
    assert_eq!(Maybe::of("").or("fallback"), "fallback");
    assert_eq!(maybe::some("  ").or("fallback"), "fallback");
    assert_eq!(maybe::none::<i32>().or(7), 7);
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn map_transforms_the_payload() {
    let result = Maybe::of(1).map(|n| n + 2);
    assert!(result.is_some());
    assert_eq!(result.unwrap(), Some(3));
}

#[rstest]
fn map_reclassifies_blank_outputs() {
    assert!(maybe::some(1).map(|_| "   ").is_none());
    assert!(maybe::some(1).map(|_| false).is_none());
}

#[rstest]
fn map_never_invokes_the_function_on_none() {
    let fired = Cell::new(false);
    let absent: Maybe<i32> = maybe::none();

    let result = absent.map(|n| {
        fired.set(true);
        n + 2
    });

    assert!(result.is_none());
    assert!(!fired.get());
}

#[rstest]
fn map_converts_a_panic_into_none_with_the_message() {
    let result = Maybe::of(1).map(|_| -> i32 { panic!("error") });
    assert!(result.is_none());
    assert_eq!(result.diagnostic(), Some("error"));
    assert_eq!(result.unwrap(), None);
}

#[rstest]
fn map_catches_a_missing_key_panic() {
    let mut prices = HashMap::new();
    prices.insert("banana", 10.0);

    let result = maybe::some(prices).map(|m| m["apple"]);
    assert!(result.is_none());
}

#[rstest]
fn map_chain_walks_nested_structures() {
    let mut banana = HashMap::new();
    banana.insert("price", 10.0);
    let mut shopping = HashMap::new();
    shopping.insert("banana", banana);

    let price = maybe::some(shopping)
        .map(|m| m["banana"].clone())
        .map(|m| m["price"]);

    assert!(price.is_some());
    assert_eq!(price.unwrap(), Some(10.0));
}

#[rstest]
fn fmap_skips_the_blank_predicate() {
    assert!(maybe::some(1).fmap(|_| "   ").is_some());
    assert!(maybe::some(1).fmap(|_| false).is_some());
}

#[rstest]
fn fmap_is_identity_on_none() {
    let fired = Cell::new(false);
    let absent: Maybe<i32> = maybe::none_with("kept");

    let result = absent.fmap(|n| {
        fired.set(true);
        n
    });

    assert!(result.is_none());
    assert_eq!(result.diagnostic(), Some("kept"));
    assert!(!fired.get());
}

// =============================================================================
// Binding and the Pipe Operator
// =============================================================================

#[rstest]
fn pipe_evaluates_the_function_with_the_payload() {
    let result = maybe::some(1) >> (|n| maybe::maybe(n + 2));
    assert_eq!(result.unwrap(), Some(3));
}

#[rstest]
fn pipe_short_circuits_on_none() {
    let fired = Cell::new(false);
    let absent: Maybe<i32> = maybe::none();

    let result = absent
        >> (|n: i32| {
            fired.set(true);
            maybe::some(n + 2)
        });

    assert!(result.is_none());
    assert!(!fired.get());
}

#[rstest]
fn pipe_chains_left_associatively() {
    let second = Cell::new(0_u32);

    let result = (maybe::some(2) >> (|_: i32| maybe::none::<i32>()))
        >> (|n: i32| {
            second.set(second.get() + 1);
            maybe::some(n)
        });

    assert!(result.is_none());
    assert_eq!(second.get(), 0);
}

#[rstest]
fn and_then_is_the_method_form_of_pipe() {
    let result = maybe::some(10).and_then(|n| maybe::some(n / 2));
    assert_eq!(result.unwrap(), Some(5));
}

#[rstest]
fn and_replaces_a_some_with_the_literal() {
    assert_eq!(maybe::some(1).and(maybe::some("next")).unwrap(), Some("next"));
}

#[rstest]
fn and_short_circuits_on_none() {
    let absent: Maybe<i32> = maybe::none_with("kept");
    let result = absent.and(maybe::some("next"));
    assert!(result.is_none());
    assert_eq!(result.diagnostic(), Some("kept"));
}

// =============================================================================
// Apply Variants
// =============================================================================

#[rstest]
fn apply_is_an_alias_of_map() {
    assert_eq!(maybe::some(2).apply(|n| n * 3).unwrap(), Some(6));
}

#[rstest]
fn apply_unwrap_hands_back_the_raw_output() {
    assert_eq!(maybe::some(2).apply_unwrap(|n| n * 3), Some(6));
    assert_eq!(maybe::none::<i32>().apply_unwrap(|n| n * 3), None);
}

// =============================================================================
// In-Place Mutation
// =============================================================================

#[rstest]
fn map_in_place_mutates_the_receiver_payload() {
    let mut price = maybe::some(9.0);
    let bumped = price.map_in_place(|n| *n += 1.0);

    assert_eq!(bumped.unwrap(), Some(10.0));
    assert_eq!(price.unwrap(), Some(10.0));
}

#[rstest]
fn map_in_place_reclassifies_the_new_payload() {
    let mut text = maybe::some("value".to_string());
    let cleared = text.map_in_place(String::clear);

    assert!(cleared.is_none());
    assert!(text.is_some());
}

#[rstest]
fn map_in_place_leaves_none_untouched() {
    let mut absent: Maybe<i32> = maybe::none_with("kept");
    let result = absent.map_in_place(|n| *n += 1);

    assert!(result.is_none());
    assert_eq!(result.diagnostic(), Some("kept"));
    assert_eq!(absent.diagnostic(), Some("kept"));
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_dispatches_on_the_variant() {
    let described = maybe::some(3).fold(|n| format!("got {n}"), || "nothing".to_string());
    assert_eq!(described, "got 3");

    let described = maybe::none::<i32>().fold(|n| format!("got {n}"), || "nothing".to_string());
    assert_eq!(described, "nothing");
}

// =============================================================================
// Hooks
// =============================================================================

#[rstest]
fn on_success_fires_only_for_some() {
    let mut seen = None;
    let result = maybe::some(5).on_success(|some| seen = some.value_ref().copied());

    assert_eq!(seen, Some(5));
    assert!(result.is_some());

    let mut fired = false;
    maybe::none::<i32>().on_success(|_| fired = true);
    assert!(!fired);
}

#[rstest]
fn on_failure_fires_only_for_none() {
    let mut noted = None;
    let absent: Maybe<i32> = maybe::none_with("missing");
    let result = absent.on_failure(|none| noted = none.diagnostic().map(str::to_string));

    assert_eq!(noted.as_deref(), Some("missing"));
    assert!(result.is_none());

    let mut fired = false;
    maybe::some(1).on_failure(|_| fired = true);
    assert!(!fired);
}

#[rstest]
fn on_dispatches_by_outcome_tag() {
    let mut successes = 0;
    let mut failures = 0;

    maybe::some(1)
        .on(Outcome::Success, |_| successes += 1)
        .on(Outcome::Failure, |_| failures += 1);

    assert_eq!(successes, 1);
    assert_eq!(failures, 0);

    maybe::none::<i32>()
        .on(Outcome::Success, |_| successes += 1)
        .on(Outcome::Failure, |_| failures += 1);

    assert_eq!(successes, 1);
    assert_eq!(failures, 1);
}

// =============================================================================
// Try Adapter
// =============================================================================

#[rstest]
fn try_with_wraps_completion_as_some() {
    let result = maybe::try_with(|| 21 * 2);
    assert_eq!(result.unwrap(), Some(42));
}

#[rstest]
fn try_with_keeps_blank_outputs_some() {
    assert!(maybe::try_with(|| "").is_some());
    assert!(maybe::try_with(|| false).is_some());
}

#[rstest]
fn try_with_converts_a_panic_into_none_with_the_message() {
    let result = maybe::try_with(|| -> i32 { panic!("bad input") });
    assert!(result.is_none());
    assert_eq!(result.diagnostic(), Some("bad input"));
}

#[rstest]
fn try_or_uses_the_fallback_diagnostic() {
    let result = maybe::try_or("lookup failed", || -> i32 { panic!("boom") });
    assert_eq!(result.diagnostic(), Some("lookup failed"));
}

#[rstest]
fn try_with_leaves_opaque_payloads_without_a_diagnostic() {
    let result = maybe::try_with(|| -> i32 { std::panic::panic_any(404_u16) });
    assert!(result.is_none());
    assert_eq!(result.diagnostic(), None);
}

// =============================================================================
// Opt-in Factories
// =============================================================================

struct Inventory;

impl Maybeable for Inventory {}

#[rstest]
fn maybeable_grants_factory_shorthands() {
    assert!(Inventory::some(0).is_some());
    assert!(Inventory::none::<i32>().is_none());
    assert!(Inventory::maybe("   ").is_none());
    assert!(Inventory::maybe(3).is_some());

    let burst: Maybe<i32> = Inventory::try_maybe(|| panic!("boom"));
    assert_eq!(burst.diagnostic(), Some("boom"));

    let noted: Maybe<i32> = Inventory::try_maybe_or("fell over", || panic!("boom"));
    assert_eq!(noted.diagnostic(), Some("fell over"));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn from_option_classifies_through_the_predicate() {
    assert!(Maybe::from(Some(1)).is_some());
    assert!(Maybe::from(Some("   ")).is_none());
    assert!(Maybe::<i32>::from(None).is_none());
}

#[rstest]
fn into_option_discards_the_diagnostic() {
    let option: Option<i32> = maybe::none_with("boom").into();
    assert_eq!(option, None);

    let option: Option<i32> = maybe::some(5).into();
    assert_eq!(option, Some(5));
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use kleisli::maybe::{self, Maybe};
    use rstest::rstest;

    #[rstest]
    fn maybe_round_trips_through_json() {
        let wrapped = maybe::some(5);
        let encoded = serde_json::to_string(&wrapped).unwrap();
        let decoded: Maybe<i32> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, wrapped);
    }

    #[rstest]
    fn none_keeps_its_diagnostic_through_json() {
        let absent: Maybe<i32> = maybe::none_with("boom");
        let encoded = serde_json::to_string(&absent).unwrap();
        let decoded: Maybe<i32> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.diagnostic(), Some("boom"));
    }
}
