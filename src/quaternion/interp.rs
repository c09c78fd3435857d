use super::Quaternion;
use crate::traits::FloatScalar;

/// Below `1 - dot` of this, slerp falls back to normalized lerp.
const SLERP_LINEAR_THRESHOLD: f64 = 1e-6;

fn clamp01<T: FloatScalar>(t: T) -> T {
    t.max(T::zero()).min(T::one())
}

impl<T: FloatScalar> Quaternion<T> {
    /// Normalized inputs, with `other` negated if needed so that the pair sits
    /// on the same hemisphere. Returns the (non-negative) dot product too.
    fn short_path(&self, other: &Self) -> (Self, Self, T) {
        let a = self.normalize();
        let b = other.normalize();
        let dot = a.dot(&b);
        if dot < T::zero() {
            (a, -b, T::zero() - dot)
        } else {
            (a, b, dot)
        }
    }

    fn blend(a: &Self, wa: T, b: &Self, wb: T) -> Self {
        Self {
            x: a.x * wa + b.x * wb,
            y: a.y * wa + b.y * wb,
            z: a.z * wa + b.z * wb,
            w: a.w * wa + b.w * wb,
        }
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`, normalized afterwards.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    /// Linear interpolation of the normalized inputs, normalized afterwards.
    ///
    /// Takes the short path: `other` is negated when the inputs lie on
    /// opposite hemispheres. `t` is not clamped.
    pub fn lerp_unclamped(&self, other: &Self, t: T) -> Self {
        let (a, b, _) = self.short_path(other);
        Self::blend(&a, T::one() - t, &b, t).normalize()
    }

    /// Spherical linear interpolation with `t` clamped to `[0, 1]`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other` (up to sign).
    #[inline]
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        self.slerp_unclamped(other, clamp01(t))
    }

    /// Spherical linear interpolation along the shortest great-circle arc.
    ///
    /// Constant angular velocity in `t`; `t` outside `[0, 1]` keeps moving
    /// along the same arc.
    pub fn slerp_unclamped(&self, other: &Self, t: T) -> Self {
        let (a, b, dot) = self.short_path(other);

        if dot > T::one() - T::lit(SLERP_LINEAR_THRESHOLD) {
            // Nearly coincident, sin(theta) is unusable
            return Self::blend(&a, T::one() - t, &b, t).normalize();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let wa = ((T::one() - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        Self::blend(&a, wa, &b, wb)
    }

    /// Rotate from `self` towards `to` by at most `max_degrees_delta` degrees.
    ///
    /// Returns `to` (normalized) when it is already within budget.
    ///
    /// The step is taken with [`slerp_unclamped`](Self::slerp_unclamped) by
    /// `max_degrees_delta / angle`, so it is exactly `max_degrees_delta`
    /// degrees. A negative budget is not clamped to zero: the result moves
    /// away from `to` by that many degrees instead of staying at `self`, as a
    /// clamped [`lerp`](Self::lerp) would.
    ///
    /// ```
    /// use quatrot::{Quaternion, Vector3};
    ///
    /// let from = Quaternion::<f64>::identity();
    /// let to = Quaternion::angle_axis(90.0, Vector3::y_axis());
    /// let step = from.rotate_towards(&to, 30.0);
    /// assert!((from.angle(&step) - 30.0).abs() < 1e-9);
    /// ```
    pub fn rotate_towards(&self, to: &Self, max_degrees_delta: T) -> Self {
        let angle = self.angle(to);
        if angle == T::zero() || angle <= max_degrees_delta {
            return to.normalize();
        }
        self.slerp_unclamped(to, max_degrees_delta / angle)
    }
}
