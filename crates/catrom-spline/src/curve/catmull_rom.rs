//! Catmull-Rom curve through an ordered list of control points.

use catrom_core::{CurveError, Result, Validate};
use catrom_math::{distance_squared, reflect, Point3, Vector3};
use log::trace;
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::check_unit_interval;
use crate::config::CurveConfig;
use crate::poly::CubicPoly;

/// Knot intervals below this are treated as coincident control points.
const MIN_KNOT_INTERVAL: f64 = 1e-4;

/// A Catmull-Rom spline, open or closed, parameterized over `[0, 1]`.
///
/// The curve passes through every control point. Open curves extrapolate a
/// phantom point past each end by reflecting the second (or second-to-last)
/// point; closed curves wrap around.
///
/// The control points are plain data: callers may edit them between calls.
/// Every evaluation builds its segment polynomials on the stack, so a shared
/// `&CatmullRomCurve` can be evaluated from several threads at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatmullRomCurve {
    pub points: Vec<Point3>,
    #[serde(default)]
    pub config: CurveConfig,
}

impl CatmullRomCurve {
    pub fn new(points: Vec<Point3>, config: CurveConfig) -> Self {
        Self { points, config }
    }

    /// Construct and validate in one step.
    pub fn try_new(points: Vec<Point3>, config: CurveConfig) -> Result<Self> {
        let curve = Self::new(points, config);
        curve.validate()?;
        Ok(curve)
    }

    /// Number of polynomial segments: one per point when closed, one fewer when open.
    pub fn segment_count(&self) -> usize {
        if self.config.closed {
            self.points.len()
        } else {
            self.points.len().saturating_sub(1)
        }
    }

    /// Evaluate the curve at `t in [0, 1]`.
    ///
    /// # Errors
    /// `InsufficientPoints` when the curve has too few control points,
    /// `NonFinitePoint` when a control point has a NaN or infinite component,
    /// `InvalidParameter` when `t` is outside `[0, 1]` or not a number.
    pub fn evaluate(&self, t: f64) -> Result<Point3> {
        self.validate()?;
        check_unit_interval("t", t)?;
        Ok(self.point_unchecked(t))
    }

    /// Derivative `dP/dt` at `t in [0, 1]`, with the same errors as [`evaluate`](Self::evaluate).
    pub fn evaluate_tangent(&self, t: f64) -> Result<Vector3> {
        self.validate()?;
        check_unit_interval("t", t)?;
        Ok(self.tangent_unchecked(t))
    }

    /// Point at `t` on a curve already known to be valid, with `t` in `[0, 1]`.
    pub(crate) fn point_unchecked(&self, t: f64) -> Point3 {
        let segment = Segment::locate(&self.points, self.config.closed, t);
        let [px, py, pz] = segment.polys(&self.config);
        Point3::new(
            px.calc(segment.weight),
            py.calc(segment.weight),
            pz.calc(segment.weight),
        )
    }

    pub(crate) fn tangent_unchecked(&self, t: f64) -> Vector3 {
        let segment = Segment::locate(&self.points, self.config.closed, t);
        let [px, py, pz] = segment.polys(&self.config);
        let scale = self.segment_count() as f64;
        Vector3::new(
            px.derivative(segment.weight),
            py.derivative(segment.weight),
            pz.derivative(segment.weight),
        ) * scale
    }
}

impl Validate for CatmullRomCurve {
    fn validate(&self) -> Result<()> {
        self.config.validate()?;
        let required = self.config.min_points();
        if self.points.len() < required {
            return Err(CurveError::InsufficientPoints {
                required,
                actual: self.points.len(),
                closed: self.config.closed,
            });
        }
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFinitePoint { index });
        }
        Ok(())
    }
}

/// Clamps `t` into `[0, 1]`. An invalid curve evaluates to `NaN` components.
impl Curve for CatmullRomCurve {
    fn point_at(&self, t: f64) -> Point3 {
        if self.validate().is_err() {
            return Point3::NAN;
        }
        self.point_unchecked(clamp_parameter(t))
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        if self.validate().is_err() {
            return Vector3::NAN;
        }
        self.tangent_unchecked(clamp_parameter(t))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.config.closed
    }
}

fn clamp_parameter(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// The four-point window around the active segment `[p1, p2]`.
#[derive(Debug, Clone, Copy)]
struct Segment {
    p0: Point3,
    p1: Point3,
    p2: Point3,
    p3: Point3,
    /// Local parameter within the segment.
    weight: f64,
}

impl Segment {
    /// Find the segment containing global parameter `t`.
    ///
    /// Requires `t in [0, 1]` and at least two points (three when closed).
    fn locate(points: &[Point3], closed: bool, t: f64) -> Self {
        let len = points.len();
        let span = if closed { len } else { len - 1 };
        let p = span as f64 * t;
        let mut index = p.floor() as i64;
        let mut weight = p - index as f64;
        let n = len as i64;

        if closed {
            if index <= 0 {
                index += (index.abs() / n + 1) * n;
            }
        } else if weight == 0.0 && index == n - 1 {
            // t == 1 lands on the last point: stay inside the final segment
            index = n - 2;
            weight = 1.0;
        }

        let i = index as usize;

        let p0 = if closed || i > 0 {
            points[(i - 1) % len]
        } else {
            reflect(points[0], points[1])
        };
        let p1 = points[i % len];
        let p2 = points[(i + 1) % len];
        let p3 = if closed || i + 2 < len {
            points[(i + 2) % len]
        } else {
            reflect(points[len - 1], points[len - 2])
        };

        Self {
            p0,
            p1,
            p2,
            p3,
            weight,
        }
    }

    /// Per-axis polynomials for this window.
    fn polys(&self, config: &CurveConfig) -> [CubicPoly; 3] {
        let scheme = TangentScheme::for_segment(self, config);
        let (a, b, c, d) = (
            self.p0.to_array(),
            self.p1.to_array(),
            self.p2.to_array(),
            self.p3.to_array(),
        );
        std::array::from_fn(|axis| scheme.axis_poly(a[axis], b[axis], c[axis], d[axis]))
    }
}

/// Tangent estimation, resolved once per evaluation.
#[derive(Debug, Clone, Copy)]
enum TangentScheme {
    Uniform { tension: f64 },
    NonUniform { dt0: f64, dt1: f64, dt2: f64 },
}

impl TangentScheme {
    fn for_segment(segment: &Segment, config: &CurveConfig) -> Self {
        match config.curve_type.exponent() {
            None => TangentScheme::Uniform {
                tension: config.tension,
            },
            Some(power) => {
                let (dt0, dt1, dt2) = knot_intervals(segment, power);
                TangentScheme::NonUniform { dt0, dt1, dt2 }
            }
        }
    }

    fn axis_poly(self, x0: f64, x1: f64, x2: f64, x3: f64) -> CubicPoly {
        match self {
            TangentScheme::Uniform { tension } => CubicPoly::catmull_rom(x0, x1, x2, x3, tension),
            TangentScheme::NonUniform { dt0, dt1, dt2 } => {
                CubicPoly::nonuniform_catmull_rom(x0, x1, x2, x3, dt0, dt1, dt2)
            }
        }
    }
}

/// Knot intervals `|p_i - p_{i+1}|^(2 * power)` around the segment, with
/// coincident neighbours replaced by the central interval.
fn knot_intervals(segment: &Segment, power: f64) -> (f64, f64, f64) {
    let mut dt0 = distance_squared(segment.p0, segment.p1).powf(power);
    let mut dt1 = distance_squared(segment.p1, segment.p2).powf(power);
    let mut dt2 = distance_squared(segment.p2, segment.p3).powf(power);

    if dt1 < MIN_KNOT_INTERVAL {
        trace!("coincident segment endpoints (dt1 = {:e}), using unit interval", dt1);
        dt1 = 1.0;
    }
    if dt0 < MIN_KNOT_INTERVAL {
        trace!("coincident leading point (dt0 = {:e}), reusing dt1", dt0);
        dt0 = dt1;
    }
    if dt2 < MIN_KNOT_INTERVAL {
        trace!("coincident trailing point (dt2 = {:e}), reusing dt1", dt2);
        dt2 = dt1;
    }

    (dt0, dt1, dt2)
}
