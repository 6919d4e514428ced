//! Boundary between a drag-and-drop gesture engine and the exercise core.
//!
//! A front-end reports where a drag started ([`DragSource`]) and where it
//! ended (a slot index, or nothing). The [`GestureAdapter`] turns that pair
//! into exactly one [`PlacementEvent`] and refuses overlapping gestures, so
//! the core only ever sees canonical events.

use crate::exercise::{ExerciseState, PlacementError, PlacementEvent};
use crate::text::PunctuationMark;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    #[error("A drag is already in progress")]
    AlreadyDragging,
    #[error("No drag is in progress")]
    NotDragging,
    #[error("Slot {0} holds no punctuation to drag")]
    EmptySlot(usize),
    #[error("Every '{0}' mark is already placed")]
    MarkExhausted(PunctuationMark),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Where the user picked a mark up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A fresh instance from the palette
    Palette(PunctuationMark),
    /// The mark currently attached to the slot at this index
    Slot(usize),
}

/// Stable payload carried by an active drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub mark: PunctuationMark,
    pub origin: Option<usize>,
}

/// Tracks the single active gesture, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureAdapter {
    active: Option<DragPayload>,
}

impl GestureAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<DragPayload> {
        self.active
    }

    /// Start a gesture, resolving the source against the current state.
    ///
    /// Palette marks that are exhausted or absent from the reference cannot
    /// be picked up, and neither can an empty slot.
    pub fn begin(
        &mut self,
        source: DragSource,
        state: &ExerciseState,
    ) -> Result<DragPayload, GestureError> {
        if self.active.is_some() {
            return Err(GestureError::AlreadyDragging);
        }

        let payload = match source {
            DragSource::Palette(mark) => {
                let counter = state
                    .usage()
                    .get(mark)
                    .ok_or(PlacementError::UnknownMark(mark))?;
                if counter.is_exhausted() {
                    return Err(GestureError::MarkExhausted(mark));
                }
                DragPayload { mark, origin: None }
            }
            DragSource::Slot(index) => {
                let slot = state.slot(index).ok_or(PlacementError::SlotOutOfRange {
                    index,
                    len: state.slots().len(),
                })?;
                let mark = slot.punctuation().ok_or(GestureError::EmptySlot(index))?;
                DragPayload {
                    mark,
                    origin: Some(index),
                }
            }
        };

        self.active = Some(payload);
        Ok(payload)
    }

    /// End the active gesture over `target` (or outside every target)
    pub fn finish(&mut self, target: Option<usize>) -> Result<PlacementEvent, GestureError> {
        let payload = self.active.take().ok_or(GestureError::NotDragging)?;

        Ok(PlacementEvent {
            source_mark: payload.mark,
            source_slot: payload.origin,
            target_slot: target,
        })
    }

    /// Forget any active gesture without producing an event
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_period_on(slot: usize) -> ExerciseState {
        ExerciseState::new("Hi there. You ok?")
            .apply_placement(&PlacementEvent::from_palette(
                PunctuationMark::Period,
                Some(slot),
            ))
            .unwrap()
    }

    #[test]
    fn test_palette_gesture_produces_palette_event() {
        let state = ExerciseState::new("Hi there. You ok?");
        let mut adapter = GestureAdapter::new();

        let payload = adapter
            .begin(DragSource::Palette(PunctuationMark::QuestionMark), &state)
            .unwrap();
        assert_eq!(payload.origin, None);
        assert!(adapter.is_dragging());

        let event = adapter.finish(Some(3)).unwrap();
        assert_eq!(
            event,
            PlacementEvent::from_palette(PunctuationMark::QuestionMark, Some(3))
        );
        assert!(!adapter.is_dragging());
    }

    #[test]
    fn test_slot_gesture_carries_origin_and_mark() {
        let state = state_with_period_on(1);
        let mut adapter = GestureAdapter::new();

        adapter.begin(DragSource::Slot(1), &state).unwrap();
        let event = adapter.finish(None).unwrap();

        assert_eq!(
            event,
            PlacementEvent::from_slot(PunctuationMark::Period, 1, None)
        );
        assert!(event.is_cancellation());
    }

    #[test]
    fn test_overlapping_gestures_are_refused() {
        let state = ExerciseState::new("Hi there. You ok?");
        let mut adapter = GestureAdapter::new();
        adapter
            .begin(DragSource::Palette(PunctuationMark::Period), &state)
            .unwrap();

        let result = adapter.begin(DragSource::Palette(PunctuationMark::QuestionMark), &state);

        assert_eq!(result, Err(GestureError::AlreadyDragging));
        assert_eq!(
            adapter.active().map(|payload| payload.mark),
            Some(PunctuationMark::Period)
        );
    }

    #[test]
    fn test_finish_without_begin_is_refused() {
        let mut adapter = GestureAdapter::new();
        assert_eq!(adapter.finish(Some(0)), Err(GestureError::NotDragging));
    }

    #[test]
    fn test_exhausted_palette_mark_cannot_be_picked_up() {
        let state = state_with_period_on(1);
        let mut adapter = GestureAdapter::new();

        let result = adapter.begin(DragSource::Palette(PunctuationMark::Period), &state);

        assert_eq!(
            result,
            Err(GestureError::MarkExhausted(PunctuationMark::Period))
        );
        assert!(!adapter.is_dragging());
    }

    #[test]
    fn test_unknown_palette_mark_cannot_be_picked_up() {
        let state = ExerciseState::new("Hi there.");
        let mut adapter = GestureAdapter::new();

        let result = adapter.begin(DragSource::Palette(PunctuationMark::Comma), &state);

        assert_eq!(
            result,
            Err(GestureError::Placement(PlacementError::UnknownMark(
                PunctuationMark::Comma
            )))
        );
    }

    #[test]
    fn test_empty_slot_cannot_be_picked_up() {
        let state = ExerciseState::new("Hi there.");
        let mut adapter = GestureAdapter::new();

        assert_eq!(
            adapter.begin(DragSource::Slot(0), &state),
            Err(GestureError::EmptySlot(0))
        );
        assert_eq!(
            adapter.begin(DragSource::Slot(5), &state),
            Err(GestureError::Placement(PlacementError::SlotOutOfRange {
                index: 5,
                len: 2
            }))
        );
    }
}
