//! Resampling a curve into `n` points, spaced by parameter or by arc length.

use catrom_core::{Result, Validate};
use catrom_math::Point3;
use log::debug;

use crate::arc_length::ArcLengthTable;
use crate::curve::CatmullRomCurve;

/// Parameters of `n` samples: `i / n` for closed curves, so the seam is not
/// emitted twice, and `i / (n - 1)` for open curves, so both ends are included.
pub fn sample_parameters(n: usize, closed: bool) -> impl Iterator<Item = f64> {
    let denominator = if closed { n } else { n.saturating_sub(1) };
    (0..n).map(move |i| {
        if denominator == 0 {
            0.0
        } else {
            i as f64 / denominator as f64
        }
    })
}

impl CatmullRomCurve {
    /// Produce `n` points along the curve.
    ///
    /// With `spaced` set, consecutive points are evenly spaced by arc length,
    /// measured against a table built at the configured resolution. Otherwise
    /// they are evenly spaced in the curve parameter.
    pub fn sample(&self, n: usize, spaced: bool) -> Result<Vec<Point3>> {
        self.validate()?;
        debug!(
            "sampling {} points (spaced: {}, closed: {}, type: {})",
            n, spaced, self.config.closed, self.config.curve_type
        );

        if spaced {
            let table = self.arc_length_table()?;
            return self.sample_spaced(n, &table);
        }

        Ok(sample_parameters(n, self.config.closed)
            .map(|t| self.point_unchecked(t))
            .collect())
    }

    /// Produce `n` points evenly spaced by arc length, against a caller-owned table.
    ///
    /// The table must have been built from this curve in its current state.
    pub fn sample_spaced(&self, n: usize, table: &ArcLengthTable) -> Result<Vec<Point3>> {
        self.validate()?;
        sample_parameters(n, self.config.closed)
            .map(|u| -> Result<Point3> {
                let t = table.parameter_at_fraction(u)?;
                Ok(self.point_unchecked(t))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CurveConfig;
    use catrom_core::CurveError;
    use catrom_math::dvec3;

    #[test]
    fn test_sample_parameters_open() {
        let ts: Vec<f64> = sample_parameters(5, false).collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_sample_parameters_closed_skips_seam() {
        let ts: Vec<f64> = sample_parameters(4, true).collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_sample_parameters_small_counts() {
        assert_eq!(sample_parameters(0, false).count(), 0);
        assert_eq!(sample_parameters(1, false).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(sample_parameters(1, true).collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn test_sample_counts() {
        let curve = CatmullRomCurve::new(
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 2.0, 0.0), dvec3(3.0, 0.0, 0.0)],
            CurveConfig::default(),
        );
        assert_eq!(curve.sample(0, false).unwrap().len(), 0);
        assert_eq!(curve.sample(1, true).unwrap().len(), 1);
        assert_eq!(curve.sample(17, false).unwrap().len(), 17);
        assert_eq!(curve.sample(17, true).unwrap().len(), 17);
    }

    #[test]
    fn test_sample_rejects_invalid_curve() {
        let curve = CatmullRomCurve::new(vec![dvec3(0.0, 0.0, 0.0)], CurveConfig::default());
        assert!(matches!(
            curve.sample(4, false),
            Err(CurveError::InsufficientPoints { .. })
        ));

        let curve = CatmullRomCurve::new(
            vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)],
            CurveConfig::default().with_arc_length_divisions(0),
        );
        assert_eq!(curve.sample(4, true), Err(CurveError::InvalidDivisions(0)));
    }
}
