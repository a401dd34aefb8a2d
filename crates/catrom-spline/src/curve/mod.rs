//! The parametric curve interface and its Catmull-Rom implementation.

mod catmull_rom;

use catrom_math::{Point3, Vector3};

pub use catmull_rom::CatmullRomCurve;

/// A total, infallible view of a 3D curve over a fixed parameter range.
///
/// Implementations clamp out-of-range parameters instead of failing, so the
/// trait suits sampling loops such as [`ArcLengthTable::build`](crate::ArcLengthTable::build).
/// Use [`CatmullRomCurve::evaluate`] when invalid input should be an error.
pub trait Curve: Send + Sync {
    /// Position at `t`, clamped into [`domain`](Self::domain).
    fn point_at(&self, t: f64) -> Point3;

    /// Derivative `dP/dt` at `t`, clamped into [`domain`](Self::domain).
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Parameter range `(t_min, t_max)`; `(0, 1)` for Catmull-Rom curves.
    fn domain(&self) -> (f64, f64);

    /// Whether the last control point wraps back to the first.
    fn is_closed(&self) -> bool {
        false
    }
}
