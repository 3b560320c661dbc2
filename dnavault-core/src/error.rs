//! Error types for registry loading and step selection.

use crate::content::StepId;
use thiserror::Error;

/// Errors raised while loading the step registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The configuration is not valid JSON for a list of steps
    #[error("failed to parse step registry: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration holds no steps at all
    #[error("step registry is empty")]
    Empty,
    /// A step's id does not match its 1-based position
    #[error("step at position {position} has id {found}, expected {position}")]
    NonContiguous {
        /// 1-based position in the list
        position: usize,
        /// Id found at that position
        found: StepId,
    },
}

/// Errors raised by the stepper state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepperError {
    /// The requested step is outside `1..=len`
    #[error("step {id} is out of range (1..={len})")]
    OutOfRange {
        /// Requested step
        id: StepId,
        /// Number of steps in the registry
        len: usize,
    },
}
