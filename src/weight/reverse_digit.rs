//! A textual weight ordered by digit-reversed character codes.

use super::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A string weight.
///
/// Addition concatenates; subtraction strips a matching suffix. Ordering uses
/// [`Weight::as_integer`]: the sum, over all characters, of the character's
/// code point with its decimal digits reversed (`'c'` = 99 -> 99, `'a'` = 97 -> 79,
/// `'d'` = 100 -> 1). This makes single letters order roughly in reverse
/// alphabetical order, which shows the graph never assumes numeric weights.
///
/// # Examples
///
/// ```
/// use wdag::{ReverseDigit, Weight};
///
/// let w = ReverseDigit::from("ab");
/// assert_eq!(w.as_integer(), 79 + 89);
/// assert_eq!(w.add(&ReverseDigit::from("c")).display(), "abc");
/// assert_eq!(w.subtract(&ReverseDigit::from("b")).display(), "a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReverseDigit(String);

impl ReverseDigit {
    /// Creates a weight from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the underlying text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reverses the decimal digits of `n` (`100` -> `1`, `97` -> `79`).
fn reverse_digits(mut n: u32) -> i64 {
    let mut reversed = 0i64;
    while n > 0 {
        reversed = reversed * 10 + i64::from(n % 10);
        n /= 10;
    }
    reversed
}

impl Weight for ReverseDigit {
    fn as_integer(&self) -> i64 {
        self.0
            .chars()
            .map(|c| reverse_digits(u32::from(c)))
            .fold(0i64, i64::saturating_add)
    }

    fn display(&self) -> String {
        self.0.clone()
    }

    fn add(&self, other: &Self) -> Self {
        let mut text = String::with_capacity(self.0.len() + other.0.len());
        text.push_str(&self.0);
        text.push_str(&other.0);
        Self(text)
    }

    fn subtract(&self, other: &Self) -> Self {
        match self.0.strip_suffix(other.0.as_str()) {
            Some(rest) => Self(rest.to_owned()),
            None => self.clone(),
        }
    }

    fn less_than(&self, other: &Self) -> bool {
        self.as_integer() < other.as_integer()
    }

    fn greater_than(&self, other: &Self) -> bool {
        self.as_integer() > other.as_integer()
    }

    fn equal_to(&self, other: &Self) -> bool {
        self.as_integer() == other.as_integer()
    }
}

impl fmt::Display for ReverseDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReverseDigit {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ReverseDigit {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_reversal() {
        assert_eq!(reverse_digits(0), 0);
        assert_eq!(reverse_digits(97), 79);
        assert_eq!(reverse_digits(100), 1);
        assert_eq!(reverse_digits(123), 321);
    }

    #[test]
    fn letters_order_by_reversed_codes() {
        let a = ReverseDigit::from("a");
        let b = ReverseDigit::from("b");
        let c = ReverseDigit::from("c");
        let d = ReverseDigit::from("d");

        assert_eq!(d.as_integer(), 1);
        assert!(d.less_than(&a));
        assert!(a.less_than(&b));
        assert!(b.less_than(&c));
        assert!(c.greater_than(&d));
    }

    #[test]
    fn subtract_only_strips_suffix() {
        let w = ReverseDigit::from("ccb");
        assert_eq!(w.subtract(&ReverseDigit::from("cb")).as_str(), "c");
        assert_eq!(w.subtract(&ReverseDigit::from("c")).as_str(), "ccb");
        assert_eq!(w.subtract(&w).as_str(), "");
    }

    #[test]
    fn equality_is_by_magnitude() {
        // "ab" and "ba" have the same digit-reversed sum.
        let ab = ReverseDigit::from("ab");
        let ba = ReverseDigit::from("ba");
        assert!(ab.equal_to(&ba));
        assert_ne!(ab, ba);
    }
}
