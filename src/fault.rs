//! Panic capture at the monad boundaries.
//!
//! Faults (panics) are not part of the normal control flow of either monad.
//! They are converted into the failure variant only at the boundaries the
//! adapters define: `Maybe::of`, `Maybe::map` and the `try_*` constructors.
//! Everywhere else a panic propagates to the caller unmodified.
//!
//! Capture relies on unwinding; under `panic = "abort"` the process aborts
//! before any conversion can happen.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Runs `computation`, converting a panic into its message (if any).
///
/// The computation and everything it captures are consumed either way, so
/// `AssertUnwindSafe` does not expose broken invariants to the caller.
pub(crate) fn run_caught<T, F>(computation: F) -> Result<T, Option<String>>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| fault_message(&*payload))
}

fn fault_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&'static str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
