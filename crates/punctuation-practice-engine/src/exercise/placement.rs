use crate::exercise::{Adjustment, ExerciseState, Outcome, PlacementError};
use crate::text::PunctuationMark;

/// Canonical event produced by one finished drag gesture
///
/// - `source_slot == None`: a fresh instance dragged from the palette
/// - `source_slot == Some(i)`: the mark attached to slot `i` is being moved
/// - `target_slot == None`: the gesture ended outside every drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEvent {
    pub source_mark: PunctuationMark,
    pub source_slot: Option<usize>,
    pub target_slot: Option<usize>,
}

impl PlacementEvent {
    pub fn from_palette(mark: PunctuationMark, target_slot: Option<usize>) -> Self {
        Self {
            source_mark: mark,
            source_slot: None,
            target_slot,
        }
    }

    pub fn from_slot(mark: PunctuationMark, origin: usize, target_slot: Option<usize>) -> Self {
        Self {
            source_mark: mark,
            source_slot: Some(origin),
            target_slot,
        }
    }

    pub fn is_cancellation(&self) -> bool {
        self.target_slot.is_none()
    }
}

/// The placement transition.
///
/// Runs detach, cancellation, attach and capitalization in that order on a
/// copy of `state`. Any outcome from an earlier submission is cleared because
/// the sentence it judged no longer exists.
pub fn apply_placement(
    state: &ExerciseState,
    event: &PlacementEvent,
) -> Result<ExerciseState, PlacementError> {
    let len = state.slots.len();
    for index in [event.source_slot, event.target_slot].into_iter().flatten() {
        if index >= len {
            return Err(PlacementError::SlotOutOfRange { index, len });
        }
    }
    if !state.usage.contains(event.source_mark) {
        return Err(PlacementError::UnknownMark(event.source_mark));
    }

    let mut next = state.clone();
    next.outcome = Outcome::InProgress;

    if let Some(origin) = event.source_slot {
        detach(&mut next, origin, event.source_mark)?;
    }

    let Some(target) = event.target_slot else {
        return Ok(next);
    };

    attach(&mut next, target, event.source_mark)?;

    debug_assert!(
        next.usage
            .iter()
            .all(|(_, counter)| counter.placed <= counter.required),
        "usage counter escaped its bounds after {event:?}"
    );
    log::debug!("placement applied: {event:?}");
    Ok(next)
}

fn detach(
    state: &mut ExerciseState,
    origin: usize,
    mark: PunctuationMark,
) -> Result<(), PlacementError> {
    let found = state.slots[origin].clear_punctuation();
    if found != Some(mark) {
        return Err(PlacementError::OriginMismatch {
            index: origin,
            expected: mark,
            found,
        });
    }

    // The following word loses its sentence-initial casing whatever the mark was
    if let Some(next_slot) = state.slots.get_mut(origin + 1) {
        next_slot.lowercase();
    }

    state.usage.adjust(mark, Adjustment::Decrement)
}

fn attach(
    state: &mut ExerciseState,
    target: usize,
    mark: PunctuationMark,
) -> Result<(), PlacementError> {
    if let Some(displaced) = state.slots[target].set_punctuation(mark) {
        state.usage.adjust(displaced, Adjustment::Decrement)?;
    }
    state.usage.adjust(mark, Adjustment::Increment)?;

    if mark.is_terminal()
        && let Some(next_slot) = state.slots.get_mut(target + 1)
    {
        next_slot.capitalize();
    }

    Ok(())
}
