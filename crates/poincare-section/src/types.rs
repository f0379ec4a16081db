//! Input and output types for section computation.

use std::fmt;

use glam::DVec3;

use crate::error::SectionError;

/// Default plane slope.
pub const DEFAULT_A: f64 = 1.0;
/// Default plane intercept.
pub const DEFAULT_B: f64 = 0.0;

/// Coordinate axis of a trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Section surface `y = a·x + b`.
///
/// With `a = 0` the plane is the horizontal threshold `y = b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPlane {
    pub a: f64,
    pub b: f64,
}

impl SectionPlane {
    /// Create a plane, rejecting non-finite coefficients.
    pub fn new(a: f64, b: f64) -> Result<Self, SectionError> {
        let plane = Self { a, b };
        plane.validate()?;
        Ok(plane)
    }

    pub(crate) fn validate(&self) -> Result<(), SectionError> {
        if self.a.is_finite() && self.b.is_finite() {
            Ok(())
        } else {
            Err(SectionError::NonFinitePlane {
                a: self.a,
                b: self.b,
            })
        }
    }

    /// Plane height at `x`.
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.a * x + self.b
    }

    /// Signed vertical distance `y - (a·x + b)`. Positive above the plane.
    #[inline]
    pub fn signed_distance(&self, x: f64, y: f64) -> f64 {
        y - (self.a * x + self.b)
    }
}

impl Default for SectionPlane {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

impl fmt::Display for SectionPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}·x + {}", self.a, self.b)
    }
}

/// Borrowed view of a sampled 3D trajectory.
///
/// Construction checks that the three sequences have equal length and hold
/// only finite values. Fewer than two samples is allowed; such a trajectory
/// simply has no crossings.
#[derive(Debug, Clone, Copy)]
pub struct Trajectory<'a> {
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [f64],
}

impl<'a> Trajectory<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64], z: &'a [f64]) -> Result<Self, SectionError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(SectionError::length_mismatch(x.len(), y.len(), z.len()));
        }

        for (axis, values) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(SectionError::non_finite_sample(axis, index, value));
            }
        }

        Ok(Self { x, y, z })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    pub fn z(&self) -> &'a [f64] {
        self.z
    }

    /// Sample `i` as a point.
    #[inline]
    pub fn point(&self, i: usize) -> DVec3 {
        DVec3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Iterate over samples in time order.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }
}

/// Interpolated `(x, z)` coordinates of plane crossings, in time order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossingSet {
    pub x: Vec<f64>,
    pub z: Vec<f64>,
}

impl CrossingSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, x: f64, z: f64) {
        self.x.push(x);
        self.z.push(z);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, z)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.z.iter().copied())
    }

    pub(crate) fn extend_from(&mut self, other: CrossingSet) {
        self.x.extend(other.x);
        self.z.extend(other.z);
    }
}

/// Where along the trajectory a crossing happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingEvent {
    /// Index `i` of the straddling pair `(i, i + 1)`.
    pub pair_index: usize,
    /// Interpolation fraction in `(0, 1)` from sample `i` toward `i + 1`.
    pub t: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plane_is_diagonal() {
        let plane = SectionPlane::default();
        assert_eq!(plane.a, 1.0);
        assert_eq!(plane.b, 0.0);
        assert_eq!(plane.signed_distance(2.0, 2.0), 0.0);
        assert_eq!(plane.y_at(-3.0), -3.0);
    }

    #[test]
    fn plane_rejects_non_finite_coefficients() {
        assert!(SectionPlane::new(0.0, 1.5).is_ok());
        assert!(matches!(
            SectionPlane::new(f64::NAN, 0.0),
            Err(SectionError::NonFinitePlane { .. })
        ));
        assert!(SectionPlane::new(1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn trajectory_rejects_mismatched_lengths() {
        let err = Trajectory::new(&[0.0, 1.0], &[0.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, SectionError::length_mismatch(2, 1, 2));
    }

    #[test]
    fn trajectory_reports_first_non_finite_sample() {
        let y = [0.0, 1.0, f64::INFINITY, f64::NAN];
        let err = Trajectory::new(&[0.0; 4], &y, &[0.0; 4]).unwrap_err();
        match err {
            SectionError::NonFiniteSample { axis, index, .. } => {
                assert_eq!(axis, Axis::Y);
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_trajectories_are_valid() {
        assert!(Trajectory::new(&[], &[], &[]).unwrap().is_empty());
        assert_eq!(Trajectory::new(&[1.0], &[2.0], &[3.0]).unwrap().len(), 1);
    }

    #[test]
    fn points_follow_sample_order() {
        let traj = Trajectory::new(&[0.0, 1.0], &[2.0, 3.0], &[4.0, 5.0]).unwrap();
        let points: Vec<DVec3> = traj.points().collect();
        assert_eq!(points, vec![DVec3::new(0.0, 2.0, 4.0), DVec3::new(1.0, 3.0, 5.0)]);
    }
}
