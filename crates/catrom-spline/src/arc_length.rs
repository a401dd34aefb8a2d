//! Arc-length tables and distance re-parameterization.
//!
//! A table holds the cumulative chord length of a curve sampled at
//! `divisions + 1` evenly spaced parameters. Inverting it maps a fraction of
//! the total length (or an absolute distance) back to a curve parameter, which
//! is what makes evenly spaced resampling possible.

use catrom_core::{CurveError, Result, Validate};
use catrom_math::{distance, Point3};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::check_unit_interval;
use crate::curve::{CatmullRomCurve, Curve};

/// Cumulative distance along a curve at evenly spaced parameters.
///
/// `lengths()[i]` is the distance travelled from `t = 0` to
/// `t = i / divisions`. The first entry is always 0 and the sequence never
/// decreases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Sample `curve` over its domain at `divisions` intervals.
    ///
    /// # Errors
    /// `InvalidDivisions` when `divisions` is 0. `InvalidArcLengthTable` when
    /// the sampled lengths are not finite, which is what an invalid curve
    /// produces through [`Curve::point_at`].
    pub fn build(curve: &dyn Curve, divisions: usize) -> Result<Self> {
        if divisions < 1 {
            return Err(CurveError::InvalidDivisions(divisions));
        }

        let (t_min, t_max) = curve.domain();
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut last = curve.point_at(t_min);
        let mut sum = 0.0;
        lengths.push(sum);

        for i in 1..=divisions {
            let t = t_min + (t_max - t_min) * i as f64 / divisions as f64;
            let current = curve.point_at(t);
            sum += distance(last, current);
            lengths.push(sum);
            last = current;
        }

        debug!(
            "built arc length table: {} divisions, total length {}",
            divisions, sum
        );
        Self::from_lengths(lengths)
    }

    /// Wrap precomputed cumulative lengths.
    ///
    /// # Errors
    /// `InvalidArcLengthTable` unless there are at least two finite entries,
    /// the first is 0, and none decreases.
    pub fn from_lengths(lengths: Vec<f64>) -> Result<Self> {
        if lengths.len() < 2 {
            return Err(CurveError::InvalidArcLengthTable(format!(
                "need at least 2 entries, got {}",
                lengths.len()
            )));
        }
        if lengths[0] != 0.0 {
            return Err(CurveError::InvalidArcLengthTable(format!(
                "first entry must be 0, got {}",
                lengths[0]
            )));
        }
        if let Some(i) = lengths.iter().position(|len| !len.is_finite()) {
            return Err(CurveError::InvalidArcLengthTable(format!(
                "entry {} is not finite",
                i
            )));
        }
        if let Some(i) = lengths.windows(2).position(|w| w[1] < w[0]) {
            return Err(CurveError::InvalidArcLengthTable(format!(
                "entry {} decreases from {} to {}",
                i + 1,
                lengths[i],
                lengths[i + 1]
            )));
        }
        Ok(Self { lengths })
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn divisions(&self) -> usize {
        self.lengths.len() - 1
    }

    pub fn total_length(&self) -> f64 {
        self.lengths[self.lengths.len() - 1]
    }

    /// Curve parameter at which a fraction `u` of the total length has been travelled.
    ///
    /// `u = 0` maps to `t = 0` and `u = 1` to `t = 1` exactly. A table of zero
    /// total length maps `u` to itself.
    ///
    /// # Errors
    /// `InvalidParameter` when `u` is outside `[0, 1]`.
    pub fn parameter_at_fraction(&self, u: f64) -> Result<f64> {
        check_unit_interval("u", u)?;
        let total = self.total_length();
        if total <= 0.0 {
            return Ok(u);
        }
        Ok(self.parameter_for_length(u * total))
    }

    /// Curve parameter at which `distance` has been travelled from the start.
    ///
    /// # Errors
    /// `InvalidParameter` when `distance` is outside `[0, total_length]`.
    pub fn parameter_at_distance(&self, distance: f64) -> Result<f64> {
        if !(0.0..=self.total_length()).contains(&distance) {
            return Err(CurveError::InvalidParameter {
                name: "distance",
                value: distance,
            });
        }
        Ok(self.parameter_for_length(distance))
    }

    /// Distance travelled from the start up to parameter `t`, interpolated
    /// linearly between table samples.
    ///
    /// # Errors
    /// `InvalidParameter` when `t` is outside `[0, 1]`.
    pub fn length_at_parameter(&self, t: f64) -> Result<f64> {
        check_unit_interval("t", t)?;
        let last = self.divisions();
        let x = t * last as f64;
        let i = x.floor() as usize;
        if i >= last {
            return Ok(self.total_length());
        }
        let fraction = x - i as f64;
        Ok(self.lengths[i] + (self.lengths[i + 1] - self.lengths[i]) * fraction)
    }

    /// Fraction of the total length travelled up to parameter `t`.
    pub fn fraction_at_parameter(&self, t: f64) -> Result<f64> {
        let total = self.total_length();
        if total <= 0.0 {
            check_unit_interval("t", t)?;
            return Ok(t);
        }
        Ok(self.length_at_parameter(t)? / total)
    }

    /// Invert the table for `target` in `[0, total_length]`.
    fn parameter_for_length(&self, target: f64) -> f64 {
        let last = self.divisions();
        if target <= 0.0 {
            return 0.0;
        }
        if target >= self.total_length() {
            return 1.0;
        }

        // First entry not below the target. An exact hit returns that sample,
        // taking the earliest index of any run of equal lengths.
        let j = self.lengths.partition_point(|&len| len < target);
        if j == 0 {
            return 0.0;
        }
        if self.lengths[j] == target {
            return j as f64 / last as f64;
        }

        // lengths[j - 1] < target < lengths[j], so the bracket has non-zero width
        let before = self.lengths[j - 1];
        let after = self.lengths[j];
        let fraction = (target - before) / (after - before);
        ((j - 1) as f64 + fraction) / last as f64
    }
}

impl TryFrom<Vec<f64>> for ArcLengthTable {
    type Error = CurveError;

    fn try_from(lengths: Vec<f64>) -> Result<Self> {
        Self::from_lengths(lengths)
    }
}

impl From<ArcLengthTable> for Vec<f64> {
    fn from(table: ArcLengthTable) -> Self {
        table.lengths
    }
}

impl CatmullRomCurve {
    /// Arc-length table at the configured `arc_length_divisions`.
    pub fn arc_length_table(&self) -> Result<ArcLengthTable> {
        self.arc_length_table_with(self.config.arc_length_divisions)
    }

    /// Arc-length table at an explicit resolution.
    pub fn arc_length_table_with(&self, divisions: usize) -> Result<ArcLengthTable> {
        self.validate()?;
        ArcLengthTable::build(self, divisions)
    }

    /// Approximate length of the whole curve at the configured resolution.
    pub fn length(&self) -> Result<f64> {
        Ok(self.arc_length_table()?.total_length())
    }

    /// Point at arc-length fraction `u`, sampling a fresh table.
    pub fn spaced_point(&self, u: f64) -> Result<Point3> {
        let table = self.arc_length_table()?;
        self.spaced_point_with(u, &table)
    }

    /// Point at arc-length fraction `u` against a caller-owned table.
    ///
    /// The table must have been built from this curve in its current state.
    pub fn spaced_point_with(&self, u: f64, table: &ArcLengthTable) -> Result<Point3> {
        let t = table.parameter_at_fraction(u)?;
        self.evaluate(t)
    }

    /// Point at absolute `distance` from the start, against a caller-owned table.
    pub fn point_at_distance(&self, distance: f64, table: &ArcLengthTable) -> Result<Point3> {
        let t = table.parameter_at_distance(distance)?;
        self.evaluate(t)
    }
}
