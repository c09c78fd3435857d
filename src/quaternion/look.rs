use super::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::Vector3;

/// Cross-product length under which two unit directions count as parallel.
const PARALLEL_EPSILON: f64 = 1e-6;

impl<T: FloatScalar> Quaternion<T> {
    /// Shortest-arc rotation taking unit `from` onto unit `to`.
    ///
    /// Antiparallel inputs turn 180° about `fallback_axis` (unit, perpendicular
    /// to `from`).
    fn shortest_arc(from: Vector3<T>, to: Vector3<T>, fallback_axis: Vector3<T>) -> Self {
        let one = T::one();
        let d = from.dot(&to).max(-one).min(one);
        let axis = from.cross(&to);
        let axis_norm = axis.norm();

        if axis_norm > T::lit(PARALLEL_EPSILON) {
            return Self::from_axis_angle(axis * (one / axis_norm), d.acos());
        }
        if d > T::zero() {
            Self::identity()
        } else {
            log::trace!("from_to_rotation: antiparallel, turning about {:?}", fallback_axis);
            Self::from_axis_angle(fallback_axis, T::PI())
        }
    }

    /// Rotation that takes direction `from` onto direction `to`.
    ///
    /// Neither vector needs unit length. Parallel inputs give the identity;
    /// antiparallel inputs give a 180° turn about a fixed perpendicular of
    /// `from` (see [`Vector3::any_orthogonal`]).
    ///
    /// ```
    /// use quatrot::{Quaternion, Vector3};
    ///
    /// let q = Quaternion::<f64>::from_to_rotation(Vector3::x_axis(), Vector3::y_axis());
    /// let h = core::f64::consts::FRAC_1_SQRT_2;
    /// assert!(q.x.abs() < 1e-12 && q.y.abs() < 1e-12);
    /// assert!((q.z - h).abs() < 1e-12 && (q.w - h).abs() < 1e-12);
    /// ```
    pub fn from_to_rotation(from: Vector3<T>, to: Vector3<T>) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        Self::shortest_arc(from, to, from.any_orthogonal())
    }

    /// In-place [`from_to_rotation`](Self::from_to_rotation).
    pub fn set_from_to_rotation(&mut self, from: Vector3<T>, to: Vector3<T>) {
        *self = Self::from_to_rotation(from, to);
    }

    /// Rotation whose local Z axis points along `forward` and whose local Y
    /// axis lies in the plane of `forward` and `upwards`.
    ///
    /// The result has `w >= 0`. When `forward` is parallel to `upwards` the
    /// basis is undefined; the plain shortest arc from Z to `forward` is
    /// returned instead.
    pub fn look_rotation(forward: Vector3<T>, upwards: Vector3<T>) -> Self {
        let right = upwards.cross(&forward);
        let up = forward.cross(&right);

        let (right, up) = match (right.try_normalize(), up.try_normalize()) {
            (Ok(r), Ok(u)) => (r, u),
            _ => {
                log::debug!(
                    "look_rotation: forward {:?} is parallel to upwards {:?}",
                    forward,
                    upwards
                );
                return Self::from_to_rotation(Vector3::z_axis(), forward).with_positive_w();
            }
        };

        // X -> right, then swing the carried Y onto up about `right`
        let first = Self::from_to_rotation(Vector3::x_axis(), right);
        let carried_up = first.rotate_vector(Vector3::y_axis());
        let second = Self::shortest_arc(carried_up, up, right);

        second.multiply(&first).with_positive_w()
    }

    /// [`look_rotation`](Self::look_rotation) with `upwards = (0, 1, 0)`.
    #[inline]
    pub fn look_rotation_y_up(forward: Vector3<T>) -> Self {
        Self::look_rotation(forward, Vector3::y_axis())
    }

    /// In-place [`look_rotation`](Self::look_rotation).
    pub fn set_look_rotation(&mut self, view: Vector3<T>, up: Vector3<T>) {
        *self = Self::look_rotation(view, up);
    }
}
