//! Current-step state machine for the "How We Did It" explainer.
//!
//! The stepper owns a single value, the selected [`StepId`]. It starts at the
//! first step and changes only on user selection; any step can be reached from
//! any other. Indicator and connector state are pure functions of that value:
//!
//! - indicator `s` is active when `current >= s` (current and all prior steps)
//! - the connector after `s` is active when `current > s` (strictly past it)

use crate::content::{Step, StepId};
use crate::error::StepperError;
use crate::registry::StepRegistry;

/// Selected step plus the registry size it is bounded by.
///
/// `Copy` so it can live directly inside a reactive signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stepper {
    current: StepId,
    len: usize,
}

/// Snapshot of one position in the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Step this indicator selects
    pub id: StepId,
    /// Whether the step has been reached
    pub active: bool,
    /// State of the line to the next indicator; `None` for the last step
    pub connector: Option<bool>,
}

impl Stepper {
    /// Stepper over `registry`, positioned on the first step.
    pub fn new(registry: &StepRegistry) -> Self {
        Self {
            current: registry.first_id(),
            len: registry.len(),
        }
    }

    /// Currently selected step
    pub fn current(&self) -> StepId {
        self.current
    }

    /// Number of steps the stepper walks over
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a registry is never empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn in_range(&self, id: StepId) -> bool {
        id.get() >= 1 && id.index() < self.len
    }

    /// Select a step.
    ///
    /// Returns `Ok(true)` when the selection changed and `Ok(false)` when `id`
    /// was already selected. Out-of-range ids leave the state untouched.
    pub fn select(&mut self, id: StepId) -> Result<bool, StepperError> {
        if !self.in_range(id) {
            tracing::warn!("Rejected step selection {} (have {} steps)", id, self.len);
            return Err(StepperError::OutOfRange { id, len: self.len });
        }
        if self.current == id {
            return Ok(false);
        }
        tracing::debug!("Step {} -> {}", self.current, id);
        self.current = id;
        Ok(true)
    }

    /// Move to the following step. Stays put on the last step.
    pub fn select_next(&mut self) -> bool {
        let next = self.current.next();
        self.in_range(next) && self.select(next).unwrap_or(false)
    }

    /// Move to the preceding step. Stays put on the first step.
    pub fn select_previous(&mut self) -> bool {
        match self.current.previous() {
            Some(previous) => self.select(previous).unwrap_or(false),
            None => false,
        }
    }

    /// Whether indicator `id` is marked as reached
    pub fn is_reached(&self, id: StepId) -> bool {
        self.current >= id
    }

    /// Whether the connector between `id` and the next step is active.
    ///
    /// The last step has no connector, so this is always false for it.
    pub fn connector_active(&self, id: StepId) -> bool {
        self.has_connector(id) && self.current > id
    }

    /// Whether a connector follows indicator `id`
    pub fn has_connector(&self, id: StepId) -> bool {
        id.get() >= 1 && id.index() + 1 < self.len
    }

    /// State of every indicator in display order
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len)
            .map(StepId::from_index)
            .map(|id| Indicator {
                id,
                active: self.is_reached(id),
                connector: self.has_connector(id).then(|| self.connector_active(id)),
            })
            .collect()
    }

    /// The step whose content should be displayed
    pub fn current_step<'a>(&self, registry: &'a StepRegistry) -> Option<&'a Step> {
        registry.get(self.current)
    }
}
