//! [`Weight`] for the primitive integer types.
//!
//! Arithmetic saturates at the bounds of the type instead of wrapping, so an
//! overlong path reports the largest representable cost rather than a negative one.

use super::Weight;
use num_traits::{SaturatingAdd, SaturatingSub, ToPrimitive, Zero};

macro_rules! impl_integer_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn as_integer(&self) -> i64 {
                    match self.to_i64() {
                        Some(v) => v,
                        None if *self < <$t as Zero>::zero() => i64::MIN,
                        None => i64::MAX,
                    }
                }

                fn display(&self) -> String {
                    self.to_string()
                }

                #[inline]
                fn add(&self, other: &Self) -> Self {
                    SaturatingAdd::saturating_add(self, other)
                }

                #[inline]
                fn subtract(&self, other: &Self) -> Self {
                    SaturatingSub::saturating_sub(self, other)
                }

                #[inline]
                fn less_than(&self, other: &Self) -> bool {
                    self < other
                }

                #[inline]
                fn greater_than(&self, other: &Self) -> bool {
                    self > other
                }

                #[inline]
                fn equal_to(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn zero_like(&self) -> Self {
                    <$t as Zero>::zero()
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
