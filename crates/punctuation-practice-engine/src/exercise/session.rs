use crate::exercise::{
    ExerciseState, Outcome, PlacementError, PlacementEvent, Snapshot, snapshot,
};
use crate::interaction::{DragPayload, DragSource, GestureAdapter, GestureError};

/// One user's attempt at one reference sentence.
///
/// The session exclusively owns its `ExerciseState` and the gesture adapter
/// feeding it. Every successful mutation (placement, submission, reset)
/// replaces the state wholesale and bumps `version`.
#[derive(Debug, Clone)]
pub struct Session {
    reference: String,
    state: ExerciseState,
    gestures: GestureAdapter,
    version: u64,
}

impl Session {
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let state = ExerciseState::new(&reference);
        log::debug!(
            "session started: {} slots, {} distinct marks",
            state.slots().len(),
            state.usage().len()
        );

        Self {
            reference,
            state,
            gestures: GestureAdapter::new(),
            version: 0,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn state(&self) -> &ExerciseState {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    pub fn active_drag(&self) -> Option<DragPayload> {
        self.gestures.active()
    }

    pub fn is_submission_enabled(&self) -> bool {
        self.state.is_submission_enabled()
    }

    /// Pick a mark up from the palette or from a filled slot
    pub fn start_drag(&mut self, source: DragSource) -> Result<DragPayload, GestureError> {
        self.gestures.begin(source, &self.state).inspect_err(|e| {
            log::warn!("drag from {source:?} refused: {e}");
        })
    }

    /// Drop the active mark on `target`, or outside every target when `None`.
    ///
    /// The gesture is over once this returns, whether or not the resulting
    /// placement was accepted.
    pub fn end_drag(&mut self, target: Option<usize>) -> Result<&ExerciseState, GestureError> {
        let event = self.gestures.finish(target)?;
        Ok(self.apply(&event)?)
    }

    /// Drop the active mark outside every target
    pub fn cancel_drag(&mut self) -> Result<&ExerciseState, GestureError> {
        self.end_drag(None)
    }

    /// Apply a canonical placement event directly
    pub fn apply(&mut self, event: &PlacementEvent) -> Result<&ExerciseState, PlacementError> {
        match self.state.apply_placement(event) {
            Ok(next) => {
                self.state = next;
                self.version += 1;
                if event.is_cancellation() {
                    log::debug!(
                        "'{}' dropped outside every slot at version {}",
                        event.source_mark,
                        self.version
                    );
                }
                Ok(&self.state)
            }
            Err(e) => {
                log::warn!("placement {event:?} rejected: {e}");
                Err(e)
            }
        }
    }

    /// Judge the current placement, if every mark has been placed
    pub fn submit(&mut self) -> Option<Outcome> {
        if !self.state.is_submission_enabled() {
            log::debug!("submission ignored: marks still unplaced");
            return None;
        }

        self.state = self.state.submit(&self.reference);
        self.version += 1;
        log::debug!("submission judged {:?}", self.state.outcome());
        Some(self.state.outcome())
    }

    /// Start the attempt over from the reference sentence
    pub fn reset(&mut self) {
        self.state = ExerciseState::new(&self.reference);
        self.gestures.clear();
        self.version += 1;
        log::debug!("session reset to version {}", self.version);
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot::create_snapshot(&self.state, self.version, self.gestures.is_dragging())
    }
}
