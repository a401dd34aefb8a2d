//! One-dimensional cubic Hermite segment.

/// A cubic polynomial `p(s) = c0 + c1*s + c2*s^2 + c3*s^3` over `s in [0, 1]`.
///
/// Built from the two segment endpoints and their tangents, so that
/// `p(0) = x1`, `p(1) = x2`, `p'(0) = t0` and `p'(1) = t1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CubicPoly {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

impl CubicPoly {
    /// Hermite form from endpoint values `x1`, `x2` and endpoint tangents `t0`, `t1`.
    pub fn hermite(x1: f64, x2: f64, t0: f64, t1: f64) -> Self {
        Self {
            c0: x1,
            c1: t0,
            c2: -3.0 * x1 + 3.0 * x2 - 2.0 * t0 - t1,
            c3: 2.0 * x1 - 2.0 * x2 + t0 + t1,
        }
    }

    /// Uniform Catmull-Rom segment between `x1` and `x2`.
    ///
    /// Tangents are `tension * (x2 - x0)` and `tension * (x3 - x1)`;
    /// a tension of 0.5 gives the classic Catmull-Rom spline.
    pub fn catmull_rom(x0: f64, x1: f64, x2: f64, x3: f64, tension: f64) -> Self {
        Self::hermite(x1, x2, tension * (x2 - x0), tension * (x3 - x1))
    }

    /// Non-uniform Catmull-Rom segment between `x1` and `x2`.
    ///
    /// `dt0`, `dt1` and `dt2` are the knot intervals before, across and after
    /// the segment. All three must be positive.
    pub fn nonuniform_catmull_rom(
        x0: f64,
        x1: f64,
        x2: f64,
        x3: f64,
        dt0: f64,
        dt1: f64,
        dt2: f64,
    ) -> Self {
        // Tangents with respect to the knot parameter on [t1, t2]
        let m1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let m2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;

        // Rescale to the local [0, 1] parameter
        Self::hermite(x1, x2, m1 * dt1, m2 * dt1)
    }

    /// Evaluate at local parameter `s`.
    #[inline]
    pub fn calc(&self, s: f64) -> f64 {
        let s2 = s * s;
        let s3 = s2 * s;
        self.c0 + self.c1 * s + self.c2 * s2 + self.c3 * s3
    }

    /// First derivative with respect to the local parameter `s`.
    #[inline]
    pub fn derivative(&self, s: f64) -> f64 {
        self.c1 + 2.0 * self.c2 * s + 3.0 * self.c3 * s * s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hermite_endpoints_and_tangents() {
        let p = CubicPoly::hermite(2.0, 5.0, 1.5, -0.5);
        assert_relative_eq!(p.calc(0.0), 2.0);
        assert_relative_eq!(p.calc(1.0), 5.0);
        assert_relative_eq!(p.derivative(0.0), 1.5);
        assert_relative_eq!(p.derivative(1.0), -0.5);
    }

    #[test]
    fn test_catmull_rom_collinear_is_linear() {
        // Evenly spaced values: the segment degenerates to x1 + s
        let p = CubicPoly::catmull_rom(0.0, 1.0, 2.0, 3.0, 0.5);
        assert_relative_eq!(p.c2, 0.0);
        assert_relative_eq!(p.c3, 0.0);
        assert_relative_eq!(p.calc(0.25), 1.25);
    }

    #[test]
    fn test_zero_tension_flattens_tangents() {
        let p = CubicPoly::catmull_rom(-4.0, 0.0, 1.0, 9.0, 0.0);
        assert_relative_eq!(p.derivative(0.0), 0.0);
        assert_relative_eq!(p.derivative(1.0), 0.0);
        assert_relative_eq!(p.calc(0.5), 0.5);
    }

    #[test]
    fn test_nonuniform_with_unit_intervals_matches_uniform() {
        let (x0, x1, x2, x3) = (0.3, -1.0, 2.5, 4.0);
        let uniform = CubicPoly::catmull_rom(x0, x1, x2, x3, 0.5);
        let nonuniform = CubicPoly::nonuniform_catmull_rom(x0, x1, x2, x3, 1.0, 1.0, 1.0);
        for i in 0..=10 {
            let s = i as f64 / 10.0;
            assert!(
                (uniform.calc(s) - nonuniform.calc(s)).abs() < 1e-12,
                "mismatch at s={}",
                s
            );
        }
    }

    #[test]
    fn test_nonuniform_interpolates_endpoints() {
        let p = CubicPoly::nonuniform_catmull_rom(0.0, 1.0, 3.0, 3.5, 0.7, 1.4, 0.5);
        assert_relative_eq!(p.calc(0.0), 1.0);
        assert_relative_eq!(p.calc(1.0), 3.0, epsilon = 1e-12);
    }
}
