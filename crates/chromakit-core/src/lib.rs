//! Chromakit Core — normalized RGBA colors and pluggable transformation backends.
//!
//! Build a [`Color`], describe a transform with an [`Operation`], and hand both
//! to [`process`] (or to your own [`ProcessorChain`]). The chain picks the
//! first available [`ColorProcessor`] and returns a new color; with no
//! available backend the input comes back unchanged.

pub mod color;
pub mod config;
pub mod error;
pub mod interop;
pub mod operation;
pub mod processor;

use std::sync::OnceLock;

// Re-exports for convenience.
pub use color::{Color, Hsb};
pub use config::{ProcessorConfig, ProcessorKind};
pub use error::ColorError;
pub use operation::{BlendMode, Operation};
pub use processor::ColorProcessor;
pub use processor::chain::ProcessorChain;
pub use processor::cpu::CpuProcessor;

fn default_chain() -> &'static ProcessorChain {
    static CHAIN: OnceLock<ProcessorChain> = OnceLock::new();
    CHAIN.get_or_init(ProcessorChain::default)
}

/// Apply `operation` to `color` with the default backend chain.
///
/// Never fails. Out-of-range parameters are clamped by the backend rather
/// than rejected; see [`Operation::is_valid`] for an advisory check.
pub fn process(color: Color, operation: &Operation) -> Color {
    default_chain().process(color, operation)
}
