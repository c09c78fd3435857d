//! Unit quaternion rotations with a Unity-compatible API.
//!
//! Components are stored `x, y, z, w` (scalar last) and the constructor takes
//! them in that order. Angles at the public boundary are in degrees, except for
//! the radian pair [`Quaternion::from_axis_angle`] / [`Quaternion::to_axis_angle`].
//!
//! Most operations normalize their inputs instead of assuming unit length, so a
//! `Quaternion` can also hold intermediate, non-unit values.
//!
//! # Examples
//!
//! ```
//! use quatrot::{Quaternion, Vector3};
//!
//! let yaw = Quaternion::<f64>::angle_axis(90.0, Vector3::y_axis());
//! let v = yaw.rotate_vector(Vector3::z_axis());
//! assert!((v[0] - 1.0).abs() < 1e-12);
//!
//! let e = Quaternion::<f64>::euler(30.0, 45.0, 10.0).euler_angles();
//! assert!((e[0] - 30.0).abs() < 1e-9);
//! assert!((e[1] - 45.0).abs() < 1e-9);
//! assert!((e[2] - 10.0).abs() < 1e-9);
//! ```

mod axis_angle;
mod euler;
mod interp;
mod look;


pub use euler::GIMBAL_LOCK_EPSILON;

use core::iter::Product;
use core::ops::{Mul, Neg};

use crate::traits::FloatScalar;
use crate::vector::Vector3;

/// Errors from the checked normalization paths.
///
/// The unchecked operations never return errors: degenerate inputs propagate
/// as NaN, matching ordinary float arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// Norm is zero (or below machine epsilon), so there is no direction.
    ZeroNorm,
    /// A component is NaN or infinite.
    NonFinite,
}

impl core::fmt::Display for RotationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RotationError::ZeroNorm => write!(f, "cannot normalize a zero-length value"),
            RotationError::NonFinite => write!(f, "value has a NaN or infinite component"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RotationError {}

/// Quaternion `x·i + y·j + z·k + w` representing a 3D rotation.
///
/// Rotation-valid quaternions have unit norm; `q` and `-q` represent the same
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl Quaternion<f32> {
    /// Identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl Quaternion<f64> {
    /// Identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
}

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from raw components. No validation or normalization.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: T::one(),
        }
    }

    /// Overwrite all four components in place.
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    /// Embed a vector as the pure quaternion `(v.x, v.y, v.z, 0)`.
    #[inline]
    pub(crate) fn from_vector(v: Vector3<T>) -> Self {
        Self::new(v[0], v[1], v[2], T::zero())
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Conjugate: `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: T::zero() - self.x,
            y: T::zero() - self.y,
            z: T::zero() - self.z,
            w: self.w,
        }
    }

    /// Squared norm: `x² + y² + z² + w²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Norm (magnitude).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Normalize to a unit quaternion representing the same rotation.
    ///
    /// A zero quaternion has no direction: the result is NaN, and debug builds
    /// assert. See [`try_normalize`](Self::try_normalize) for a checked version.
    #[inline]
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        debug_assert!(n != T::zero(), "normalizing a zero quaternion");
        let inv = T::one() / n;
        Self {
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
            w: self.w * inv,
        }
    }

    /// Checked [`normalize`](Self::normalize).
    ///
    /// ```
    /// use quatrot::{Quaternion, RotationError};
    ///
    /// let zero = Quaternion::new(0.0_f64, 0.0, 0.0, 0.0);
    /// assert_eq!(zero.try_normalize(), Err(RotationError::ZeroNorm));
    ///
    /// let q = Quaternion::new(3.0_f64, 0.0, 4.0, 0.0).try_normalize().unwrap();
    /// assert!((q.x - 0.6).abs() < 1e-12);
    /// ```
    pub fn try_normalize(&self) -> Result<Self, RotationError> {
        if !self.is_finite() {
            return Err(RotationError::NonFinite);
        }
        if self.norm() <= T::epsilon() {
            return Err(RotationError::ZeroNorm);
        }
        Ok(self.normalize())
    }

    /// Inverse: `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inv_n2 = T::one() / self.norm_squared();
        Self {
            x: (T::zero() - self.x) * inv_n2,
            y: (T::zero() - self.y) * inv_n2,
            z: (T::zero() - self.z) * inv_n2,
            w: self.w * inv_n2,
        }
    }

    /// Raw 4D dot product. No normalization.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// `true` when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Whether `self` and `other` describe the same rotation, up to sign.
    ///
    /// Compares `1 - |dot|` of the normalized inputs against `tolerance`.
    pub fn same_rotation(&self, other: &Self, tolerance: T) -> bool {
        let d = self.normalize().dot(&other.normalize()).abs();
        T::one() - d <= tolerance
    }

    /// Flip the sign so that `w >= 0`. Same rotation.
    #[inline]
    pub(crate) fn with_positive_w(self) -> Self {
        if self.w < T::zero() {
            -self
        } else {
            self
        }
    }
}

// ── Composition ──────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Compose two rotations: the Hamilton product `self ⊗ rhs`.
    ///
    /// The result applies `self` first, then `rhs` in the local frame left by
    /// `self`. Seen from outside this is the same as rotating a vector by `rhs`
    /// and then by `self`:
    /// `a.multiply(&b).rotate_vector(v) == a.rotate_vector(b.rotate_vector(v))`.
    ///
    /// ```
    /// use quatrot::Quaternion;
    ///
    /// let a = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0).normalize();
    /// let b = Quaternion::new(4.0_f64, 3.0, 2.0, 1.0).normalize();
    /// let q = a.multiply(&b);
    /// assert!((q.x - 0.4).abs() < 1e-12);
    /// assert!((q.y - 0.8).abs() < 1e-12);
    /// assert!((q.z - 0.2).abs() < 1e-12);
    /// assert!((q.w + 0.4).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self {
            x: self.x * rhs.w + self.w * rhs.x - self.z * rhs.y + self.y * rhs.z,
            y: self.y * rhs.w + self.z * rhs.x + self.w * rhs.y - self.x * rhs.z,
            z: self.z * rhs.w - self.y * rhs.x + self.x * rhs.y + self.w * rhs.z,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }

    /// Fold [`multiply`](Self::multiply) left to right over a sequence.
    ///
    /// An empty sequence gives the identity; a single element is returned as is.
    pub fn multiply_all<I>(quaternions: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut iter = quaternions.into_iter();
        match iter.next() {
            None => Self::identity(),
            Some(first) => iter.fold(first, |acc, q| acc.multiply(&q)),
        }
    }

    /// Rotate a vector with the sandwich product `q v q*`.
    ///
    /// `self` is normalized first, so any non-zero quaternion can be used.
    pub fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let q = self.normalize();
        let rotated = q.multiply(&Self::from_vector(v).multiply(&q.conjugate()));
        rotated.vector_part()
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product: q1 * q2
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: FloatScalar> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        self.multiply(&rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self.multiply(rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self.multiply(rhs)
    }
}

// Rotate a vector: q * v
impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.rotate_vector(v)
    }
}

impl<T: FloatScalar> Mul<Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.rotate_vector(v)
    }
}

impl<T: FloatScalar> Product for Quaternion<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::multiply_all(iter)
    }
}

impl<'a, T: FloatScalar> Product<&'a Quaternion<T>> for Quaternion<T> {
    fn product<I: Iterator<Item = &'a Quaternion<T>>>(iter: I) -> Self {
        Self::multiply_all(iter.copied())
    }
}

// Negation
impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: T::zero() - self.x,
            y: T::zero() - self.y,
            z: T::zero() - self.z,
            w: T::zero() - self.w,
        }
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}

// ── Display ──────────────────────────────────────────────────────────

/// `(x, y, z, w)` with 5 decimals unless the formatter asks for a precision.
impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let p = f.precision().unwrap_or(5);
        write!(
            f,
            "({:.*}, {:.*}, {:.*}, {:.*})",
            p, self.x, p, self.y, p, self.z, p, self.w
        )
    }
}

#[cfg(feature = "alloc")]
impl<T: core::fmt::Display> Quaternion<T> {
    /// Fixed-point `"(x, y, z, w)"` with `digits` decimals.
    ///
    /// ```
    /// use quatrot::Quaternion;
    ///
    /// let q = Quaternion::new(0.5_f64, -0.25, 0.0, 1.0);
    /// assert_eq!(q.to_string_digits(2), "(0.50, -0.25, 0.00, 1.00)");
    /// ```
    pub fn to_string_digits(&self, digits: usize) -> alloc::string::String {
        alloc::format!("{:.*}", digits, self)
    }
}
