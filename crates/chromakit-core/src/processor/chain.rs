//! Prioritized backend selection.
//!
//! A [`ProcessorChain`] holds backends in priority order. Each call picks the
//! first backend that reports itself available; the choice is never cached.
//! If nothing is available the input color is returned unchanged.

use crate::color::Color;
use crate::config::{ProcessorConfig, ProcessorKind};
use crate::operation::Operation;
use crate::processor::ColorProcessor;
use crate::processor::cpu::CpuProcessor;

/// Ordered list of backends. Earlier entries take priority.
#[derive(Debug)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn ColorProcessor>>,
}

impl ProcessorChain {
    pub fn new(processors: Vec<Box<dyn ColorProcessor>>) -> Self {
        Self { processors }
    }

    /// A chain with no backends. Every call is an identity.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Append a backend at the lowest priority.
    #[must_use]
    pub fn with_processor(mut self, processor: impl ColorProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Build the backends listed in `config`, in order.
    pub fn from_config(config: &ProcessorConfig) -> Self {
        let processors: Vec<Box<dyn ColorProcessor>> = config
            .backends
            .iter()
            .map(|kind| -> Box<dyn ColorProcessor> {
                match kind {
                    ProcessorKind::Cpu => Box::new(CpuProcessor),
                }
            })
            .collect();

        if processors.is_empty() {
            tracing::warn!("processor config lists no backends; operations will be identities");
        } else {
            tracing::info!(
                backends = ?config.backends,
                "built color processor chain"
            );
        }
        Self::new(processors)
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// The first available backend, if any.
    pub fn select(&self) -> Option<&dyn ColorProcessor> {
        self.processors
            .iter()
            .map(|p| p.as_ref())
            .find(|p| p.is_available())
    }
}

impl Default for ProcessorChain {
    /// The CPU reference backend alone.
    fn default() -> Self {
        Self::empty().with_processor(CpuProcessor)
    }
}

impl ColorProcessor for ProcessorChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    /// Available when any of its own backends is.
    fn is_available(&self) -> bool {
        self.select().is_some()
    }

    fn process(&self, color: Color, operation: &Operation) -> Color {
        match self.select() {
            Some(processor) => {
                tracing::debug!(
                    processor = processor.name(),
                    operation = %operation,
                    "dispatching color operation"
                );
                processor.process(color, operation)
            }
            None => {
                tracing::debug!(
                    operation = %operation,
                    "no color processor available, returning input unchanged"
                );
                color
            }
        }
    }
}
