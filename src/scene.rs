//! Plot data for the attractor and its Poincaré section.
//!
//! A `Scene` is everything a renderer needs: the 3D polyline of the
//! attractor, the outline of the section plane over the attractor's extent,
//! and the 2D scatter of crossing points in the `(x, z)` plane.

use glam::DVec3;
use poincare_section::{CrossingSet, SectionOutput, SectionPlane, Trajectory};

use crate::config::ViewConfig;

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds3 {
    /// Bounds of `points`, or `None` when empty.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: b.min.min(p),
                max: b.max.max(p),
            },
        ))
    }
}

/// Four edges outlining `plane` over the x-range and z-range of `bounds`.
///
/// Two edges run along the plane at `z_min` and `z_max`; the other two are
/// verticals at `x_min` and `x_max`.
pub fn section_frame(plane: SectionPlane, bounds: Bounds3) -> [[DVec3; 2]; 4] {
    let (x_min, x_max) = (bounds.min.x, bounds.max.x);
    let (z_min, z_max) = (bounds.min.z, bounds.max.z);
    let y_min = plane.y_at(x_min);
    let y_max = plane.y_at(x_max);

    let corner = |x, y, z| DVec3::new(x, y, z);
    [
        [corner(x_min, y_min, z_min), corner(x_max, y_max, z_min)],
        [corner(x_min, y_min, z_max), corner(x_max, y_max, z_max)],
        [corner(x_min, y_min, z_min), corner(x_min, y_min, z_max)],
        [corner(x_max, y_max, z_min), corner(x_max, y_max, z_max)],
    ]
}

/// Renderable attractor and section.
#[derive(Debug, Clone)]
pub struct Scene {
    pub view: ViewConfig,
    /// Trajectory samples in time order.
    pub attractor: Vec<DVec3>,
    pub bounds: Option<Bounds3>,
    /// Section plane outline. Empty when the trajectory is empty.
    pub frame: Vec<[DVec3; 2]>,
    /// Crossing points, plotted as `(x, z)` with the x and z labels.
    pub section: CrossingSet,
    /// Samples skipped because they lie exactly on the plane.
    pub on_plane_samples: usize,
}

impl Scene {
    pub fn build(trajectory: &Trajectory<'_>, output: &SectionOutput, view: &ViewConfig) -> Self {
        let attractor: Vec<DVec3> = trajectory.points().collect();
        let bounds = Bounds3::from_points(attractor.iter().copied());
        let frame = bounds
            .map(|b| section_frame(view.plane, b).to_vec())
            .unwrap_or_default();

        Self {
            view: view.clone(),
            attractor,
            bounds,
            frame,
            section: output.crossings.clone(),
            on_plane_samples: output.diagnostics.on_plane_samples.len(),
        }
    }

    pub fn num_crossings(&self) -> usize {
        self.section.len()
    }
}
