//! Time-delay embedding of a scalar signal into three dimensions.
//!
//! Sample `k` of the embedded series is `(s[k], s[k + τ], s[k + 2τ])`.
//! The delay is chosen by the user.

use poincare_section::{SectionError, Trajectory};
use thiserror::Error;

/// Errors while embedding a signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmbedError {
    #[error("embedding delay must be at least 1")]
    ZeroDelay,

    #[error("signal of {len} samples is too short for delay {tau} (need at least {required})")]
    SignalTooShort {
        len: usize,
        tau: usize,
        required: usize,
    },
}

/// A signal embedded as three coordinate sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedSeries {
    pub tau: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl EmbeddedSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Borrow as a validated trajectory.
    pub fn trajectory(&self) -> Result<Trajectory<'_>, SectionError> {
        Trajectory::new(&self.x, &self.y, &self.z)
    }
}

/// Embed `signal` with delay `tau`.
pub fn delay_embed(signal: &[f64], tau: usize) -> Result<EmbeddedSeries, EmbedError> {
    if tau == 0 {
        return Err(EmbedError::ZeroDelay);
    }
    let span = tau.saturating_mul(2);
    let required = span.saturating_add(1);
    if signal.len() < required {
        return Err(EmbedError::SignalTooShort {
            len: signal.len(),
            tau,
            required,
        });
    }

    let n = signal.len() - span;
    let series = EmbeddedSeries {
        tau,
        x: signal[..n].to_vec(),
        y: signal[tau..tau + n].to_vec(),
        z: signal[span..].to_vec(),
    };
    log::debug!("embedded {} samples with tau={} into {} points", signal.len(), tau, n);
    Ok(series)
}
