//! Weight capability used for vertex and edge costs.
//!
//! A [`Dag`](crate::graph::Dag) never inspects weights directly; it only combines
//! and compares them through the [`Weight`] trait. Any value type that can be
//! added, subtracted, ordered and rendered qualifies.
//!
//! Two implementations ship with the crate:
//! - the primitive integer types (see [`numeric`])
//! - [`ReverseDigit`], a textual weight ordered by digit-reversed code points
//!
//! ## Laws
//!
//! For every well-formed `x`, `y`, `z` of one concrete type:
//! - `x.subtract(&x)` is the additive identity of the type ([`Weight::zero_like`])
//! - exactly one of `x.less_than(&y)`, `x.greater_than(&y)`, `x.equal_to(&y)` holds
//! - `less_than` and `greater_than` are transitive
//!
//! Because every operation takes `&Self`, two weight kinds cannot be mixed in
//! one graph.

use std::fmt;

pub mod numeric;
mod reverse_digit;

pub use reverse_digit::ReverseDigit;

/// A numeric-like cost attached to vertices and edges.
pub trait Weight: Clone + fmt::Debug {
    /// Integer magnitude of the weight.
    ///
    /// Kinds that are not directly orderable derive their ordering from this value.
    fn as_integer(&self) -> i64;

    /// Human-readable rendering.
    fn display(&self) -> String;

    /// Combines two weights.
    #[must_use]
    fn add(&self, other: &Self) -> Self;

    /// Removes `other` from `self`.
    ///
    /// `x.subtract(&x)` must yield the additive identity.
    #[must_use]
    fn subtract(&self, other: &Self) -> Self;

    /// Strict less-than.
    fn less_than(&self, other: &Self) -> bool;

    /// Strict greater-than.
    fn greater_than(&self, other: &Self) -> bool;

    /// Equality under the weight's ordering.
    fn equal_to(&self, other: &Self) -> bool;

    /// The additive identity of this weight's kind.
    ///
    /// Distance accumulators are seeded with this value.
    #[must_use]
    fn zero_like(&self) -> Self {
        self.subtract(self)
    }
}
