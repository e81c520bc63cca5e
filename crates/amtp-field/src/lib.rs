//! # amtp-field
//!
//! Deterministic numeric field representation of text and bytes.
//!
//! ## Pipeline
//! 1. **Mapper**: codepoint (+ language) → (tension, curvature, phase)
//! 2. **Coherence**: pairwise sequence coherence, circular statistics
//! 3. **Modules**: internal / external / snapshot states
//! 4. **Density**: one scalar over energy, phase diversity, curvature spread
//!
//! Every function here is pure and total over its inputs.

pub mod coherence;
pub mod density;
pub mod mapper;
pub mod modules;
pub mod stats;

pub use coherence::{circular_mean, phase_coherence, sequence_coherence};
pub use density::{density_breakdown, semantic_density, DensityBreakdown};
pub use mapper::{map_byte, map_bytes, map_codepoint, map_text};
pub use modules::{aggregate, external_state, internal_state, snapshot_state};
