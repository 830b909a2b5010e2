//! Edge weight capability
//!
//! Path computations need three things from a weight: a starting value, a way
//! to accumulate two weights, and an ordering. Weights opt in through the
//! [`Weight`] trait. All primitive numeric types implement it; domain types
//! (costs, durations, ...) implement it by hand.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A weight that can be accumulated along a path.
///
/// `zero()` is both the additive identity used as the starting weight of a
/// path and the "no edge" sentinel understood by the matrix loader.
pub trait Weight: Clone + PartialEq + PartialOrd + Debug {
    /// Additive identity
    fn zero() -> Self;

    /// Sum of two weights
    fn combine(&self, other: &Self) -> Self;

    /// True when this weight equals [`Weight::zero`]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Strict "less than"; incomparable values (NaN) never win
    fn lighter_than(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                // Overflow clamps to MAX.
                fn combine(&self, other: &Self) -> Self {
                    self.saturating_add(*other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn combine(&self, other: &Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_int_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);
