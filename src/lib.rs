//! Delay-embedded attractors and their Poincaré sections.
//!
//! The crossing computation lives in the `poincare-section` crate. This
//! crate holds everything around it:
//!
//! - `data` - Plain-text numeric tables (3-column trajectories or scalar signals)
//! - `embedding` - Time-delay embedding `(K, K + τ, K + 2τ)` of a scalar signal
//! - `config` - Axis labels and section plane, with their defaults
//! - `prompt` - Interactive questions for the configuration
//! - `scene` - Plot data for a renderer: attractor, section frame, section scatter
//! - `export` - Scene export to JSON (optionally gzipped)

pub mod config;
pub mod data;
pub mod embedding;
pub mod export;
pub mod prompt;
pub mod scene;
pub mod util;

pub use poincare_section as section;
