//! Poincaré sections of sampled 3D trajectories.
//!
//! This crate finds where a discretely sampled trajectory crosses the plane
//! `y = a·x + b` and linearly interpolates the `(x, z)` coordinates of each
//! crossing between the two straddling samples.
//!
//! # Example
//!
//! ```
//! use poincare_section::{compute, SectionPlane, Trajectory};
//!
//! let x = [0.0, 1.0];
//! let y = [-1.0, 1.0];
//! let z = [0.0, 1.0];
//! let trajectory = Trajectory::new(&x, &y, &z).expect("valid trajectory");
//!
//! let output = compute(&trajectory, SectionPlane { a: 0.0, b: 0.0 }).expect("valid plane");
//! assert_eq!(output.crossings.x, vec![0.5]);
//! assert_eq!(output.crossings.z, vec![0.5]);
//! ```

mod error;
mod scan;
mod types;

pub use error::SectionError;
pub use scan::{crossing_fraction, find_crossings, interpolate};
pub use types::{
    Axis, CrossingEvent, CrossingSet, SectionPlane, Trajectory, DEFAULT_A, DEFAULT_B,
};

/// Default sample count above which the scan is split across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Output from section computation, including crossings and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SectionOutput {
    /// Interpolated crossing coordinates.
    pub crossings: CrossingSet,
    /// Pair index and fraction for each crossing, parallel to `crossings`.
    pub events: Vec<CrossingEvent>,
    /// Diagnostic information about the computation.
    pub diagnostics: SectionDiagnostics,
}

/// Diagnostic information from section computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionDiagnostics {
    /// Sample indices lying exactly on the plane. These never count as
    /// crossings, so a trajectory passing through the plane at a sample is
    /// not represented in the crossing set.
    pub on_plane_samples: Vec<usize>,
}

impl SectionDiagnostics {
    /// Returns true if no sample touched the plane exactly.
    pub fn is_clean(&self) -> bool {
        self.on_plane_samples.is_empty()
    }
}

/// Configuration for section computation.
#[derive(Debug, Clone, Copy)]
pub struct SectionConfig {
    /// Trajectories with at least this many samples are scanned in parallel.
    pub parallel_threshold: usize,
}

impl SectionConfig {
    /// Always scan on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Compute the Poincaré section with default settings.
///
/// Errors are reserved for an invalid plane. A trajectory with fewer than
/// two samples, or one that never crosses the plane, yields an empty set.
pub fn compute(
    trajectory: &Trajectory<'_>,
    plane: SectionPlane,
) -> Result<SectionOutput, SectionError> {
    compute_with(trajectory, plane, SectionConfig::default())
}

/// Compute the Poincaré section with explicit configuration.
///
/// The parallel path splits the pair range into contiguous chunks and
/// concatenates their results in chunk order, so the output is identical to
/// the sequential scan.
pub fn compute_with(
    trajectory: &Trajectory<'_>,
    plane: SectionPlane,
    config: SectionConfig,
) -> Result<SectionOutput, SectionError> {
    use rayon::prelude::*;

    plane.validate()?;

    let n = trajectory.len();
    if n == 0 {
        return Ok(SectionOutput::default());
    }
    let pairs = n - 1;

    let chunks: Vec<scan::ScanChunk> = if n >= config.parallel_threshold && pairs > 0 {
        let threads = rayon::current_num_threads().max(1);
        let chunk_size = (pairs / (threads * 8)).clamp(1024, 1 << 16).max(1);
        let mut ranges = Vec::with_capacity(pairs.div_ceil(chunk_size));
        let mut start = 0;
        while start < pairs {
            let end = (start + chunk_size).min(pairs);
            ranges.push((start, end));
            start = end;
        }
        log::debug!(
            "section scan: {} pairs in {} chunks across {} threads",
            pairs,
            ranges.len(),
            threads
        );

        ranges
            .par_iter()
            .map(|&(start, end)| scan::scan_pairs(trajectory, plane, start, end))
            .collect()
    } else {
        vec![scan::scan_pairs(trajectory, plane, 0, pairs)]
    };

    let total: usize = chunks.iter().map(|c| c.crossings.len()).sum();
    let mut output = SectionOutput {
        crossings: CrossingSet::with_capacity(total),
        events: Vec::with_capacity(total),
        diagnostics: SectionDiagnostics::default(),
    };
    for chunk in chunks {
        output.crossings.extend_from(chunk.crossings);
        output.events.extend(chunk.events);
        output.diagnostics.on_plane_samples.extend(chunk.on_plane);
    }

    // The last sample starts no pair, so no chunk checked it.
    let last = trajectory.point(pairs);
    if plane.signed_distance(last.x, last.y) == 0.0 {
        output.diagnostics.on_plane_samples.push(pairs);
    }

    log::trace!(
        "section scan: {} crossings, {} on-plane samples",
        output.crossings.len(),
        output.diagnostics.on_plane_samples.len()
    );

    Ok(output)
}
