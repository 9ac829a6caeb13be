//! Edge weight abstraction.
//!
//! The spanning tree builder is comparison-based, so any weight type works as
//! long as its values admit a total order and can be summed. [`Weight`] is
//! implemented for all primitive integers and for `f32`/`f64`.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Numeric type usable as an edge weight.
///
/// Floating-point weights are only totally ordered when they are not NaN;
/// [`Weight::is_ordered`] reports this and inputs are rejected before any
/// comparison is made.
pub trait Weight: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Additive identity, the cost of an empty forest.
    fn zero() -> Self;

    /// Sum of two weights, or `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Whether this value takes part in the total order.
    fn is_ordered(&self) -> bool {
        true
    }

    /// Total order over ordered values.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_weight_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_weight_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    // inf + -inf is the only way to leave the order
                    let sum = self + rhs;
                    if sum.is_nan() { None } else { Some(sum) }
                }

                #[inline]
                fn is_ordered(&self) -> bool {
                    !self.is_nan()
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }
            }
        )*
    };
}

impl_weight_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight_float!(f32, f64);
