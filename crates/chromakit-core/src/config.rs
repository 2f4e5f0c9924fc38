//! Processor chain configuration.
//!
//! Backends are listed in priority order. The JSON form is
//! `{"backends": ["cpu"]}`; an absent `backends` key means the default chain.

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Backend implementations that can be named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    /// [`CpuProcessor`](crate::processor::cpu::CpuProcessor).
    Cpu,
}

/// Ordered backend list for a [`ProcessorChain`](crate::ProcessorChain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    #[serde(default = "ProcessorConfig::default_backends")]
    pub backends: Vec<ProcessorKind>,
}

impl ProcessorConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        Ok(serde_json::from_str(json)?)
    }

    fn default_backends() -> Vec<ProcessorKind> {
        vec![ProcessorKind::Cpu]
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            backends: Self::default_backends(),
        }
    }
}
