//! Adjacent-pair scan for plane crossings.
//!
//! A pair `(i, i + 1)` crosses the plane when the signed distances of its
//! endpoints have strictly opposite signs (`f1 * f2 < 0`). A sample lying
//! exactly on the plane (`f == 0.0`) never produces a crossing for either
//! adjacent pair.

use glam::DVec3;

use crate::types::{CrossingEvent, CrossingSet, SectionPlane, Trajectory};

/// Find plane crossings without validating the input.
///
/// Scans the shortest common prefix of `x`, `y`, `z`. Fewer than two
/// samples yields an empty set. Non-finite input produces unspecified (but
/// memory-safe) output; use [`crate::compute`] for checked input.
pub fn find_crossings(x: &[f64], y: &[f64], z: &[f64], plane: SectionPlane) -> CrossingSet {
    let n = x.len().min(y.len()).min(z.len());
    let mut crossings = CrossingSet::default();

    for i in 0..n.saturating_sub(1) {
        let f1 = plane.signed_distance(x[i], y[i]);
        let f2 = plane.signed_distance(x[i + 1], y[i + 1]);

        if f1 * f2 < 0.0 {
            let t = -f1 / (f2 - f1);
            crossings.push(x[i] + t * (x[i + 1] - x[i]), z[i] + t * (z[i + 1] - z[i]));
        }
    }

    crossings
}

/// Interpolation fraction of the zero of the signed distance between two
/// samples. Only meaningful when `f1 * f2 < 0`.
#[inline]
pub fn crossing_fraction(f1: f64, f2: f64) -> f64 {
    -f1 / (f2 - f1)
}

/// Point at fraction `t` along the segment `p1 -> p2`.
#[inline]
pub fn interpolate(p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    p1 + (p2 - p1) * t
}

/// Results of scanning one contiguous range of pairs.
#[derive(Debug, Default)]
pub(crate) struct ScanChunk {
    pub crossings: CrossingSet,
    pub events: Vec<CrossingEvent>,
    /// Samples in the range with signed distance exactly zero.
    pub on_plane: Vec<usize>,
}

/// Scan pairs `start..end` of `traj`.
///
/// Records on-plane samples among `start..end` (the first sample of each
/// pair), so disjoint ranges never report the same sample twice.
pub(crate) fn scan_pairs(
    traj: &Trajectory<'_>,
    plane: SectionPlane,
    start: usize,
    end: usize,
) -> ScanChunk {
    debug_assert!(end < traj.len() || start == end);
    let mut chunk = ScanChunk::default();
    if start >= end {
        return chunk;
    }

    let mut p1 = traj.point(start);
    let mut f1 = plane.signed_distance(p1.x, p1.y);

    for i in start..end {
        let p2 = traj.point(i + 1);
        let f2 = plane.signed_distance(p2.x, p2.y);

        if f1 == 0.0 {
            chunk.on_plane.push(i);
        }

        if f1 * f2 < 0.0 {
            let t = crossing_fraction(f1, f2);
            let p = interpolate(p1, p2, t);
            chunk.crossings.push(p.x, p.z);
            chunk.events.push(CrossingEvent { pair_index: i, t });
        }

        p1 = p2;
        f1 = f2;
    }

    chunk
}
