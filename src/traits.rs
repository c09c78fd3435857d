use core::fmt::Debug;
use num_traits::{Float, FloatConst, Num, One, Zero};

/// Trait for types that can be used as vector and quaternion components.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for the floating-point types rotations are computed in.
///
/// Required by everything that needs `sqrt`, `sin`, `atan2`, etc.
/// Implemented for `f32` and `f64`.
pub trait FloatScalar: Scalar + Float + FloatConst {
    /// Convert an `f64` literal (tolerances, `0.5`, `360.0`) into `Self`.
    ///
    /// Lossy for `f32`, which is fine for the constants this crate uses.
    fn lit(v: f64) -> Self;
}

/// Concrete impls for real floats.
macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn lit(v: f64) -> $t { v as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
