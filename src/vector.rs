use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::quaternion::RotationError;
use crate::traits::{FloatScalar, Scalar};

/// A 3-component vector: axes, directions and points handed to rotations.
///
/// Deliberately thin. It carries what rotation code needs (dot, cross,
/// norms, arithmetic) and nothing of a full linear-algebra vector.
///
/// # Examples
///
/// ```
/// use quatrot::Vector3;
///
/// let x = Vector3::from_array([1.0_f64, 0.0, 0.0]);
/// let y = Vector3::from_array([0.0, 1.0, 0.0]);
/// assert_eq!(x.cross(&y)[2], 1.0); // x × y = z
/// assert_eq!(x.dot(&y), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    data: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    /// Create a vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(data: [T; 3]) -> Self {
        Self { data }
    }

    /// The zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_array([T::zero(); 3])
    }

    /// Unit X axis `(1, 0, 0)`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit Y axis `(0, 1, 0)`, the default "up".
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit Z axis `(0, 0, 1)`, the "forward" of look rotations.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.data
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2]
    }

    /// Cross product of two vectors.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }

    /// Squared L2 norm. No sqrt.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> Vector3<T> {
    /// L2 (Euclidean) norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Return a unit vector in the same direction.
    ///
    /// A zero vector yields NaN components; debug builds assert on it.
    /// Use [`try_normalize`](Self::try_normalize) when the input may be zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        debug_assert!(n != T::zero(), "normalizing a zero-length vector");
        *self * (T::one() / n)
    }

    /// Checked [`normalize`](Self::normalize).
    pub fn try_normalize(&self) -> Result<Self, RotationError> {
        if !self.is_finite() {
            return Err(RotationError::NonFinite);
        }
        let n = self.norm();
        if n <= T::epsilon() {
            return Err(RotationError::ZeroNorm);
        }
        Ok(*self * (T::one() / n))
    }

    /// `true` when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// A unit vector perpendicular to `self` (assumed unit length).
    ///
    /// Deterministic: `self × X`, or `self × Y` when `self` lies within
    /// `|x| >= 0.9` of the X axis.
    pub fn any_orthogonal(&self) -> Self {
        let helper = if self[0].abs() < T::lit(0.9) {
            Self::x_axis()
        } else {
            Self::y_axis()
        };
        self.cross(&helper).normalize()
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(data: [T; 3]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_array([self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2]])
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_array([self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2]])
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_array([self[0] * rhs, self[1] * rhs, self[2] * rhs])
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_array([
            T::zero() - self[0],
            T::zero() - self[1],
            T::zero() - self[2],
        ])
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// `(x, y, z)` with 5 decimals unless the formatter asks for a precision.
impl<T: core::fmt::Display> core::fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let p = f.precision().unwrap_or(5);
        write!(
            f,
            "({:.*}, {:.*}, {:.*})",
            p, self.data[0], p, self.data[1], p, self.data[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_and_index() {
        let v = Vector3::new(1.0_f64, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
    }

    #[test]
    fn index_mut() {
        let mut v = Vector3::<f64>::zeros();
        v[1] = 5.0;
        assert_eq!(v.to_array(), [0.0, 5.0, 0.0]);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::<f64>::x_axis();
        let y = Vector3::<f64>::y_axis();
        assert_eq!(x.cross(&y), Vector3::z_axis());
        assert_eq!(y.cross(&x), -Vector3::z_axis());
    }

    #[test]
    fn norm_and_normalize() {
        let v = Vector3::new(3.0_f64, 0.0, 4.0);
        assert_eq!(v.norm_squared(), 25.0);
        assert!((v.norm() - 5.0).abs() < 1e-12);
        let u = v.normalize();
        assert!((u[0] - 0.6).abs() < 1e-12);
        assert!((u[2] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn try_normalize_rejects_zero_and_nan() {
        assert_eq!(
            Vector3::<f64>::zeros().try_normalize(),
            Err(RotationError::ZeroNorm)
        );
        assert_eq!(
            Vector3::new(f64::NAN, 0.0, 1.0).try_normalize(),
            Err(RotationError::NonFinite)
        );
        assert!(Vector3::new(0.0_f64, 2.0, 0.0).try_normalize().is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-length vector")]
    fn normalize_zero_asserts_in_debug() {
        let _ = Vector3::<f64>::zeros().normalize();
    }

    #[test]
    fn any_orthogonal_is_unit_and_perpendicular() {
        for v in [
            Vector3::new(1.0_f64, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(1.0, 1.0, 1.0).normalize(),
        ] {
            let o = v.any_orthogonal();
            assert!((o.norm() - 1.0).abs() < 1e-12);
            assert!(o.dot(&v).abs() < 1e-12);
        }
    }

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1.0_f64, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        let mut c = a;
        c += b;
        c -= a;
        c *= 0.5;
        assert_eq!(c, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn display() {
        let v = Vector3::new(1.0_f64, -0.5, 2.0);
        assert_eq!(format!("{}", v), "(1.00000, -0.50000, 2.00000)");
        assert_eq!(format!("{:.1}", v), "(1.0, -0.5, 2.0)");
    }
}
