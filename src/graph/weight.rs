use std::fmt::Debug;
use std::ops::Add;

/// Numeric edge weights.
///
/// Unreachable distances are the finite sentinel [Weight::INFINITY],
/// which is `MAX / 10` of the underlying type.
/// Adding two finite distances therefore never overflows,
/// as long as every stored distance stays below the sentinel.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    const ZERO: Self;
    const ONE: Self;
    const INFINITY: Self;

    /// Addition that clamps at the bounds of integer types.
    /// Plain `+` for floats.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Whether a distance stands for "no path", i.e. has reached [Weight::INFINITY].
    fn is_unreachable(&self) -> bool {
        *self >= Self::INFINITY
    }

    fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }

    /// The smaller of two weights.
    /// `self` wins when they are incomparable.
    fn min_weight(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const INFINITY: Self = <$t>::MAX / 10;

                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const INFINITY: Self = <$t>::MAX / 10.0;

                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_weight!(f32, f64);
