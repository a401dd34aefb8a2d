//! Curve configuration: closure, tangent scheme, tension and arc-length resolution.

use std::fmt;
use std::str::FromStr;

use catrom_core::{CurveError, Result, Validate};
use serde::{Deserialize, Serialize};

/// Tangent-estimation scheme of a Catmull-Rom curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// Classic Catmull-Rom with tangents scaled by `tension`.
    #[default]
    #[serde(alias = "catmullrom")]
    Uniform,
    /// Knot intervals are the square root of the inter-point distance.
    Centripetal,
    /// Knot intervals are the inter-point distance.
    Chordal,
}

impl CurveType {
    /// Power applied to the squared distance between neighbouring control
    /// points to obtain a knot interval. `None` for the uniform scheme.
    pub fn exponent(self) -> Option<f64> {
        match self {
            CurveType::Uniform => None,
            CurveType::Centripetal => Some(0.25),
            CurveType::Chordal => Some(0.5),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurveType::Uniform => "uniform",
            CurveType::Centripetal => "centripetal",
            CurveType::Chordal => "chordal",
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveType {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "catmullrom" => Ok(CurveType::Uniform),
            "centripetal" => Ok(CurveType::Centripetal),
            "chordal" => Ok(CurveType::Chordal),
            other => Err(CurveError::InvalidConfig(format!(
                "unknown curve type '{}'",
                other
            ))),
        }
    }
}

/// Evaluation options shared by every operation on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Wrap from the last control point back to the first.
    pub closed: bool,
    #[serde(rename = "type")]
    pub curve_type: CurveType,
    /// Tangent scale, only read by [`CurveType::Uniform`].
    pub tension: f64,
    /// Sampling resolution of arc-length tables.
    pub arc_length_divisions: usize,
}

impl CurveConfig {
    pub const DEFAULT_TENSION: f64 = 0.5;
    pub const DEFAULT_ARC_LENGTH_DIVISIONS: usize = 200;

    pub fn new(closed: bool, curve_type: CurveType) -> Self {
        Self {
            closed,
            curve_type,
            ..Self::default()
        }
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_type(mut self, curve_type: CurveType) -> Self {
        self.curve_type = curve_type;
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_arc_length_divisions(mut self, divisions: usize) -> Self {
        self.arc_length_divisions = divisions;
        self
    }

    /// Minimum number of control points this configuration can evaluate.
    pub fn min_points(&self) -> usize {
        if self.closed {
            3
        } else {
            2
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            closed: false,
            curve_type: CurveType::Uniform,
            tension: Self::DEFAULT_TENSION,
            arc_length_divisions: Self::DEFAULT_ARC_LENGTH_DIVISIONS,
        }
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Result<()> {
        if self.arc_length_divisions < 1 {
            return Err(CurveError::InvalidDivisions(self.arc_length_divisions));
        }
        if !self.tension.is_finite() {
            return Err(CurveError::InvalidConfig(format!(
                "tension must be finite, got {}",
                self.tension
            )));
        }
        Ok(())
    }
}
