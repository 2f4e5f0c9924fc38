//! Processing backends and the dispatcher that selects between them.

pub mod chain;
pub mod cpu;

use std::fmt;

use crate::color::Color;
use crate::operation::Operation;

/// A backend that can execute [`Operation`]s.
///
/// Availability is queried on every dispatch, so implementations may change
/// their answer at runtime.
pub trait ColorProcessor: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Whether this backend can run right now.
    fn is_available(&self) -> bool;

    /// Apply `operation` to `color`, returning a new color.
    fn process(&self, color: Color, operation: &Operation) -> Color;
}
