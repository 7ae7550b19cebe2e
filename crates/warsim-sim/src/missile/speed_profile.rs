//! Empirical speed vs. time-since-launch curve.
//!
//! The control points are fitted with a quadratic interpolating B-spline
//! whose interior knots sit at the midpoints between consecutive control
//! times (first and last midpoints omitted). The curve passes through every
//! control point and is C1 continuous. Outside the control time range the
//! boundary speed is held flat.

use warsim_core::config::ProfilePoint;
use warsim_core::errors::ProfileError;

const DEGREE: usize = 2;

/// Immutable, fitted speed profile. Built once and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedProfile {
    times: Vec<f64>,
    speeds: Vec<f64>,
    knots: Vec<f64>,
    coeffs: Vec<f64>,
}

impl SpeedProfile {
    /// Fit a profile through `points`. Times must be strictly increasing.
    pub fn new(points: &[ProfilePoint]) -> Result<Self, ProfileError> {
        if points.len() < DEGREE + 1 {
            return Err(ProfileError::TooFewPoints(points.len()));
        }
        for (i, p) in points.iter().enumerate() {
            if !p.time_secs.is_finite() || !p.speed_kts.is_finite() {
                return Err(ProfileError::NonFinite(i));
            }
            if i > 0 && p.time_secs <= points[i - 1].time_secs {
                return Err(ProfileError::NotIncreasing(i));
            }
        }

        let times: Vec<f64> = points.iter().map(|p| p.time_secs).collect();
        let speeds: Vec<f64> = points.iter().map(|p| p.speed_kts).collect();
        let knots = build_knots(&times);
        let coeffs = solve_coefficients(&times, &speeds, &knots);

        Ok(Self {
            times,
            speeds,
            knots,
            coeffs,
        })
    }

    /// Speed in knots at `life_time_secs` after launch.
    pub fn speed_at(&self, life_time_secs: f64) -> f64 {
        let first = self.times[0];
        let last = self.times[self.times.len() - 1];
        if life_time_secs.is_nan() || life_time_secs <= first {
            return self.speeds[0];
        }
        if life_time_secs >= last {
            return self.speeds[self.speeds.len() - 1];
        }

        let span = find_span(&self.knots, self.coeffs.len(), life_time_secs);
        let basis = basis_functions(&self.knots, span, life_time_secs);
        basis
            .iter()
            .enumerate()
            .map(|(r, b)| self.coeffs[span - DEGREE + r] * b)
            .sum()
    }

    /// Control point times (seconds since launch).
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// First control time after launch. Marks the end of the motor burn
    /// and guidance window.
    pub fn first_breakpoint(&self) -> f64 {
        self.times[1]
    }

    /// Last control time.
    pub fn last_breakpoint(&self) -> f64 {
        self.times[self.times.len() - 1]
    }
}

/// Clamped knot vector: the end points repeated `DEGREE + 1` times and the
/// interior midpoints in between.
fn build_knots(times: &[f64]) -> Vec<f64> {
    let n = times.len();
    let mut knots = Vec::with_capacity(n + DEGREE + 1);
    knots.extend(std::iter::repeat(times[0]).take(DEGREE + 1));
    for j in 1..n - 2 {
        knots.push((times[j] + times[j + 1]) / 2.0);
    }
    knots.extend(std::iter::repeat(times[n - 1]).take(DEGREE + 1));
    knots
}

/// Knot span index `l` with `knots[l] <= x < knots[l + 1]`, clamped to the
/// last non-empty span.
fn find_span(knots: &[f64], n_coeffs: usize, x: f64) -> usize {
    let mut span = DEGREE;
    while span < n_coeffs - 1 && knots[span + 1] <= x {
        span += 1;
    }
    span
}

/// Non-zero B-spline basis values at `x` for knot span `span`.
fn basis_functions(knots: &[f64], span: usize, x: f64) -> [f64; DEGREE + 1] {
    let mut values = [0.0; DEGREE + 1];
    let mut left = [0.0; DEGREE + 1];
    let mut right = [0.0; DEGREE + 1];
    values[0] = 1.0;
    for j in 1..=DEGREE {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = values[r] / (right[r + 1] + left[j - r]);
            values[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        values[j] = saved;
    }
    values
}

/// Solve the collocation system so the spline interpolates every point.
fn solve_coefficients(times: &[f64], speeds: &[f64], knots: &[f64]) -> Vec<f64> {
    let n = times.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for (row, &t) in times.iter().enumerate() {
        let span = find_span(knots, n, t);
        let basis = basis_functions(knots, span, t);
        for (r, b) in basis.iter().enumerate() {
            matrix[row][span - DEGREE + r] = *b;
        }
    }
    gaussian_elimination(matrix, speeds.to_vec())
}

/// Dense Gaussian elimination with partial pivoting. The collocation matrix
/// is non-singular because every control time lies inside the support of
/// its basis function.
fn gaussian_elimination(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    x
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use warsim_core::config::{pac3_speed_profile, ProfilePoint};
    use warsim_core::errors::ProfileError;

    use super::SpeedProfile;

    fn pac3() -> SpeedProfile {
        SpeedProfile::new(&pac3_speed_profile()).unwrap()
    }

    #[test]
    fn test_passes_through_control_points() {
        let profile = pac3();
        for p in pac3_speed_profile() {
            assert_relative_eq!(profile.speed_at(p.time_secs), p.speed_kts, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_flat_outside_domain() {
        let profile = pac3();
        assert_eq!(profile.speed_at(-5.0), profile.speed_at(0.0));
        assert_eq!(profile.speed_at(-5.0), 150.0);
        assert_eq!(profile.speed_at(10_000.0), profile.speed_at(profile.last_breakpoint()));
        assert_eq!(profile.speed_at(10_000.0), 350.0);
    }

    #[test]
    fn test_burn_phase_accelerates() {
        let profile = pac3();
        let mut previous = profile.speed_at(0.0);
        for t in 1..=10 {
            let speed = profile.speed_at(t as f64);
            assert!(speed > previous, "speed should rise at t={t}");
            previous = speed;
        }
    }

    #[test]
    fn test_deterministic() {
        let a = pac3();
        let b = pac3();
        for t in [0.5, 13.0, 42.7, 200.0, 335.9] {
            assert_eq!(a.speed_at(t).to_bits(), b.speed_at(t).to_bits());
        }
    }

    #[test]
    fn test_three_points_is_a_parabola() {
        // With three points the spline is the unique quadratic through them.
        let points = [
            ProfilePoint { time_secs: 0.0, speed_kts: 0.0 },
            ProfilePoint { time_secs: 1.0, speed_kts: 1.0 },
            ProfilePoint { time_secs: 2.0, speed_kts: 4.0 },
        ];
        let profile = SpeedProfile::new(&points).unwrap();
        assert_relative_eq!(profile.speed_at(0.5), 0.25, epsilon = 1e-9);
        assert_relative_eq!(profile.speed_at(1.5), 2.25, epsilon = 1e-9);
    }

    #[test]
    fn test_breakpoints() {
        let profile = pac3();
        assert_eq!(profile.first_breakpoint(), 20.0);
        assert_eq!(profile.last_breakpoint(), 336.0);
        assert_eq!(profile.times().len(), 8);
    }

    #[test]
    fn test_rejects_bad_points() {
        let two = [
            ProfilePoint { time_secs: 0.0, speed_kts: 1.0 },
            ProfilePoint { time_secs: 1.0, speed_kts: 1.0 },
        ];
        assert_eq!(SpeedProfile::new(&two), Err(ProfileError::TooFewPoints(2)));

        let unsorted = [
            ProfilePoint { time_secs: 0.0, speed_kts: 1.0 },
            ProfilePoint { time_secs: 2.0, speed_kts: 1.0 },
            ProfilePoint { time_secs: 2.0, speed_kts: 1.0 },
        ];
        assert_eq!(SpeedProfile::new(&unsorted), Err(ProfileError::NotIncreasing(2)));

        let nan = [
            ProfilePoint { time_secs: 0.0, speed_kts: 1.0 },
            ProfilePoint { time_secs: 1.0, speed_kts: f64::NAN },
            ProfilePoint { time_secs: 2.0, speed_kts: 1.0 },
        ];
        assert_eq!(SpeedProfile::new(&nan), Err(ProfileError::NonFinite(1)));
    }
}
