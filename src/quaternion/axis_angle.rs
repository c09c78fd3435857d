use super::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::Vector3;

impl<T: FloatScalar> Quaternion<T> {
    /// Create from an axis (must be unit length) and angle in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let half = angle * T::lit(0.5);
        let (s, c) = half.sin_cos();
        Self {
            x: axis[0] * s,
            y: axis[1] * s,
            z: axis[2] * s,
            w: c,
        }
    }

    /// Rotation of `angle` degrees around `axis`. The axis is normalized here.
    ///
    /// ```
    /// use quatrot::{Quaternion, Vector3};
    ///
    /// let q = Quaternion::<f64>::angle_axis(20.0, Vector3::new(1.0, 2.0, 3.0));
    /// assert!((q.x - 0.0464).abs() < 1e-4);
    /// assert!((q.y - 0.0928).abs() < 1e-4);
    /// assert!((q.z - 0.1392).abs() < 1e-4);
    /// assert!((q.w - 0.9848).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn angle_axis(angle: T, axis: Vector3<T>) -> Self {
        Self::from_axis_angle(axis.normalize(), angle.to_radians())
    }

    /// Convert to axis-angle representation.
    ///
    /// Returns `(axis, angle)` where `axis` is a unit vector and `angle` is in
    /// radians, in `[0, 2π]`. When the vector part vanishes (identity or its
    /// negation) the axis is undefined and `[1, 0, 0]` is returned.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let q = self.normalize();
        let two = T::one() + T::one();
        let v = q.vector_part();
        let n = v.norm();
        let angle = two * n.atan2(q.w);

        if n < T::epsilon() {
            log::trace!("to_axis_angle: no rotation axis, angle = {:?}", angle);
            (Vector3::x_axis(), angle)
        } else {
            (v * (T::one() / n), angle)
        }
    }

    /// Angle in degrees and unit axis of this rotation.
    ///
    /// Inverse of [`angle_axis`](Self::angle_axis); angle is in `[0, 360]`.
    #[inline]
    pub fn to_angle_axis(&self) -> (T, Vector3<T>) {
        let (axis, angle) = self.to_axis_angle();
        (angle.to_degrees(), axis)
    }

    /// Angle in degrees between two rotations, in `[0, 180]`.
    ///
    /// ```
    /// use quatrot::Quaternion;
    ///
    /// let a = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0);
    /// let b = Quaternion::new(4.0_f64, 2.0, 1.0, 3.0);
    /// assert!((a.angle(&b) - 79.889).abs() < 1e-3);
    /// ```
    pub fn angle(&self, other: &Self) -> T {
        let one = T::one();
        let d = self.normalize().dot(&other.normalize()).abs().min(one);
        ((one + one) * d.acos()).to_degrees()
    }
}
