//! Outcome tags for hook dispatch.
//!
//! The [`Outcome`] pair names the two branches of a monadic value when
//! registering side-effecting hooks through `on`, mirroring the
//! `on_success`/`on_failure` split without naming a variant directly.

/// The branch of a monadic value a hook is interested in.
///
/// # Examples
///
/// ```rust
/// use kleisli::outcome::Outcome;
///
/// let interest = Outcome::Success;
/// assert_ne!(interest, Outcome::Failure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The present/success branch (`Some` / `Right`).
    Success,
    /// The absent/failure branch (`None` / `Left`).
    Failure,
}
