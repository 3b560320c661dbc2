//! The fixed, ordered list of explainer steps.
//!
//! Steps are configuration, not derived data: they are parsed once from JSON,
//! validated, and never mutated afterwards. Lookups are by [`StepId`], which
//! doubles as the 1-based index into the list.

use crate::content::{Step, StepId};
use crate::error::RegistryError;

/// Step configuration compiled into the binary.
const BUILTIN_STEPS: &str = include_str!("../content/steps.json");

/// Validated, immutable list of steps indexed by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRegistry {
    steps: Vec<Step>,
}

impl StepRegistry {
    /// Load the steps shipped with the landing page.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_STEPS)
    }

    /// Parse and validate a JSON array of steps.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let steps: Vec<Step> = serde_json::from_str(json)?;
        Self::from_steps(steps)
    }

    /// Validate an already-built list of steps.
    ///
    /// The list must be non-empty and ids must run `1, 2, .., N` in order.
    pub fn from_steps(steps: Vec<Step>) -> Result<Self, RegistryError> {
        if steps.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (index, step) in steps.iter().enumerate() {
            if step.id != StepId::from_index(index) {
                return Err(RegistryError::NonContiguous {
                    position: index + 1,
                    found: step.id,
                });
            }
        }

        tracing::debug!("Loaded step registry with {} steps", steps.len());
        Ok(Self { steps })
    }

    /// Step with the given id, if it exists
    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.get(id.index()).filter(|step| step.id == id)
    }

    /// Whether `id` names a step in this registry
    pub fn contains(&self, id: StepId) -> bool {
        id.index() < self.steps.len() && id.get() > 0
    }

    /// Number of steps. Never zero.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Id of the first step
    pub fn first_id(&self) -> StepId {
        StepId::FIRST
    }

    /// Id of the last step
    pub fn last_id(&self) -> StepId {
        StepId::from_index(self.steps.len() - 1)
    }

    /// All ids in display order
    pub fn ids(&self) -> impl Iterator<Item = StepId> + '_ {
        self.steps.iter().map(|step| step.id)
    }

    /// All steps in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepRegistry {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
