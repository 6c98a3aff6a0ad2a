//! Floating-point abstraction so bones can be simulated in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Scalar operations the bone simulation needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, which keeps the crate
/// usable without `std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Default
    + core::fmt::Debug
{
    /// 0.0
    fn zero() -> Self;
    /// 1.0
    fn one() -> Self;
    /// 0.5, used to split joint corrections between two bones.
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Arctangent of y/x, with correct quadrant. `atan2(0, 0)` is 0 for both impls.
    fn atan2(y: Self, x: Self) -> Self;
    /// Round towards zero.
    fn trunc(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;

    /// -1, 0 or 1 depending on the sign; zero stays zero.
    fn signum_of(self) -> Self {
        if self > Self::zero() {
            Self::one()
        } else if self < Self::zero() {
            -Self::one()
        } else {
            Self::zero()
        }
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn trunc(self) -> Self { libm::truncf(self) }
    fn from_f32(v: f32) -> Self { v }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn trunc(self) -> Self { libm::trunc(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
}
