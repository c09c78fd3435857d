use super::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::Vector3;

/// Band around `|sin(x)| = 1` treated as gimbal lock by
/// [`Quaternion::euler_angles`].
pub const GIMBAL_LOCK_EPSILON: f64 = 0.01;

/// Map degrees into `[0, 360)`.
pub(crate) fn wrap_degrees<T: FloatScalar>(deg: T) -> T {
    let full = T::lit(360.0);
    let mut d = deg % full;
    if d < T::zero() {
        d = d + full;
    }
    // -1e-14 + 360 rounds to 360
    if d >= full {
        d = d - full;
    }
    d
}

impl<T: FloatScalar> Quaternion<T> {
    /// Rotation of `z` degrees around Z, then `x` around X, then `y` around Y.
    ///
    /// Same order as Unity's `Quaternion.Euler`, i.e. `q_y ⊗ q_x ⊗ q_z`.
    pub fn euler(x: T, y: T, z: T) -> Self {
        let half = T::lit(0.5);
        let (sx, cx) = (x.to_radians() * half).sin_cos();
        let (sy, cy) = (y.to_radians() * half).sin_cos();
        let (sz, cz) = (z.to_radians() * half).sin_cos();

        Self {
            x: cx * sy * sz + cy * cz * sx,
            y: cx * cz * sy - cy * sx * sz,
            z: cx * cy * sz - cz * sx * sy,
            w: sx * sy * sz + cx * cy * cz,
        }
    }

    /// [`euler`](Self::euler) taking the three angles as a vector.
    #[inline]
    pub fn euler_vector(angles: Vector3<T>) -> Self {
        Self::euler(angles[0], angles[1], angles[2])
    }

    /// Euler angles `(x, y, z)` in degrees, each in `[0, 360)`.
    ///
    /// Inverse of [`euler`](Self::euler) up to the double cover and wrap-around.
    /// Near gimbal lock, when `|sin x| > 1 - GIMBAL_LOCK_EPSILON` (pitch within
    /// about 8.1° of ±90°), the `y` angle is fixed to zero and the remaining
    /// twist is reported in `z`. Inside that band the result is approximate:
    /// rebuilding with [`euler_vector`](Self::euler_vector) lands within
    /// `2 * (90° - |x|)` of the input, at most about 16.2° at the band edge.
    /// Exactly at ±90° the rebuilt rotation is exact.
    ///
    /// ```
    /// use quatrot::Quaternion;
    ///
    /// let e = Quaternion::new(1.0_f64, 0.0, 0.0, 0.0).euler_angles();
    /// assert!(e[0].abs() < 1e-9);
    /// assert!((e[1] - 180.0).abs() < 1e-9);
    /// assert!((e[2] - 180.0).abs() < 1e-9);
    /// ```
    pub fn euler_angles(&self) -> Vector3<T> {
        let q = self.normalize();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let one = T::one();
        let two = one + one;

        // Rotation matrix entry -m[1][2]
        let sin_x = (two * (x * w - y * z)).max(-one).min(one);
        let pitch = sin_x.asin();

        let (yaw, roll) = if sin_x.abs() > one - T::lit(GIMBAL_LOCK_EPSILON) {
            log::trace!("euler_angles: gimbal lock, sin(x) = {:?}", sin_x);
            // Only z - y (or z + y) is observable; pin y to zero.
            let roll = (two * (z * w - x * y)).atan2(one - two * (y * y + z * z));
            (T::zero(), roll)
        } else {
            let yaw = (two * (x * z + y * w)).atan2(one - two * (x * x + y * y));
            let roll = (two * (x * y + z * w)).atan2(one - two * (x * x + z * z));
            (yaw, roll)
        };

        Vector3::new(
            wrap_degrees(pitch.to_degrees()),
            wrap_degrees(yaw.to_degrees()),
            wrap_degrees(roll.to_degrees()),
        )
    }
}
