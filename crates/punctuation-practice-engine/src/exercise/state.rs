use serde::Serialize;

use crate::exercise::{Inventory, PlacementError, PlacementEvent, WordSlot, placement, validator};
use crate::text::tokenize;

/// Result of the most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Correct,
    Incorrect,
}

/// Complete model of one exercise attempt.
///
/// States are values: every transition returns a new `ExerciseState` and
/// leaves the one it was applied to untouched, so a failed transition never
/// leaves a half-applied state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseState {
    pub(crate) slots: Vec<WordSlot>,
    pub(crate) usage: Inventory,
    pub(crate) outcome: Outcome,
}

impl ExerciseState {
    /// Fresh state for a reference sentence: tokenized slots and zeroed usage counters
    pub fn new(reference: &str) -> Self {
        Self {
            slots: tokenize(reference),
            usage: Inventory::from_reference(reference),
            outcome: Outcome::InProgress,
        }
    }

    pub fn slots(&self) -> &[WordSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&WordSlot> {
        self.slots.get(index)
    }

    pub fn usage(&self) -> &Inventory {
        &self.usage
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Submission is only offered once every mark has been placed
    pub fn is_submission_enabled(&self) -> bool {
        self.usage.is_complete()
    }

    /// The sentence as currently assembled by the user
    pub fn candidate(&self) -> String {
        validator::reconstruct(&self.slots)
    }

    /// Apply one completed or cancelled drag gesture
    pub fn apply_placement(&self, event: &PlacementEvent) -> Result<Self, PlacementError> {
        placement::apply_placement(self, event)
    }

    /// Judge the current placement against the reference and record the outcome
    pub fn submit(&self, reference: &str) -> Self {
        Self {
            outcome: validator::check_answer(self, reference),
            ..self.clone()
        }
    }
}
