//! Catmull-Rom spline evaluation with arc-length resampling.
//!
//! Open or closed curves through 3D control points, with uniform,
//! centripetal, or chordal tangents. Besides direct evaluation the crate
//! builds cumulative arc-length tables and inverts them, so a curve can be
//! resampled into points evenly spaced by distance travelled.
//!
//! The free functions below are the flat entry points; the same operations
//! are available as methods on [`CatmullRomCurve`] and [`ArcLengthTable`].

pub mod arc_length;
pub mod config;
pub mod curve;
pub mod poly;
pub mod sample;

use catrom_core::{CurveError, Result};
use catrom_math::Point3;

pub use arc_length::ArcLengthTable;
pub use config::{CurveConfig, CurveType};
pub use curve::{CatmullRomCurve, Curve};
pub use poly::CubicPoly;

/// Point on `curve` at parameter `t in [0, 1]`.
pub fn evaluate(curve: &CatmullRomCurve, t: f64) -> Result<Point3> {
    curve.evaluate(t)
}

/// Arc-length table of `curve`, at `divisions` or the configured resolution.
pub fn build_arc_length_table(
    curve: &CatmullRomCurve,
    divisions: Option<usize>,
) -> Result<ArcLengthTable> {
    curve.arc_length_table_with(divisions.unwrap_or(curve.config.arc_length_divisions))
}

/// Curve parameter at which fraction `u` of the table's total length is reached.
pub fn parameter_from_arc_fraction(table: &ArcLengthTable, u: f64) -> Result<f64> {
    table.parameter_at_fraction(u)
}

/// `n` points along `curve`, evenly spaced by arc length when `spaced` is set.
pub fn sample(curve: &CatmullRomCurve, n: usize, spaced: bool) -> Result<Vec<Point3>> {
    curve.sample(n, spaced)
}

pub(crate) fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CurveError::InvalidParameter { name, value })
    }
}
