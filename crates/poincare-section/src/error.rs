//! Error types for section computation.

use thiserror::Error;

use crate::types::Axis;

/// Invalid input to a section computation.
///
/// Every variant is a precondition violation. An empty crossing set is a
/// valid result and is never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SectionError {
    /// The three coordinate sequences have different lengths.
    #[error("coordinate lengths differ: x={x}, y={y}, z={z}")]
    LengthMismatch { x: usize, y: usize, z: usize },

    /// A coordinate sample is NaN or infinite.
    #[error("non-finite {axis} sample at index {index}: {value}")]
    NonFiniteSample {
        axis: Axis,
        index: usize,
        value: f64,
    },

    /// A plane coefficient is NaN or infinite.
    #[error("non-finite plane coefficients: a={a}, b={b}")]
    NonFinitePlane { a: f64, b: f64 },
}

impl SectionError {
    pub fn length_mismatch(x: usize, y: usize, z: usize) -> Self {
        Self::LengthMismatch { x, y, z }
    }

    pub fn non_finite_sample(axis: Axis, index: usize, value: f64) -> Self {
        Self::NonFiniteSample { axis, index, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SectionError::length_mismatch(3, 4, 3);
        assert_eq!(err.to_string(), "coordinate lengths differ: x=3, y=4, z=3");

        let err = SectionError::non_finite_sample(Axis::Z, 7, f64::NAN);
        assert_eq!(err.to_string(), "non-finite z sample at index 7: NaN");

        let err = SectionError::NonFinitePlane {
            a: f64::INFINITY,
            b: 0.0,
        };
        assert!(err.to_string().contains("a=inf"));
    }
}
