use serde::Serialize;

use crate::exercise::{ExerciseState, Outcome};
use crate::text::PunctuationMark;

/// Immutable view of a session for rendering
///
/// Renderers read snapshots and never touch `ExerciseState` directly; all
/// changes go back through the session as gestures, submissions or resets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Session version for change detection
    pub version: u64,
    pub slots: Vec<SlotView>,
    /// Draggable mark sources, in order of first appearance in the reference
    pub palette: Vec<PaletteEntry>,
    pub outcome: Outcome,
    pub submission_enabled: bool,
    /// While true every slot is a drop target and should be highlighted
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub word: String,
    pub punctuation: Option<PunctuationMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub mark: PunctuationMark,
    pub placed: usize,
    pub required: usize,
    pub remaining: usize,
    /// False once every instance is placed; the source is then disabled
    pub available: bool,
}

pub(crate) fn create_snapshot(state: &ExerciseState, version: u64, dragging: bool) -> Snapshot {
    let slots = state
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| SlotView {
            index,
            word: slot.word().to_string(),
            punctuation: slot.punctuation(),
        })
        .collect();

    let palette = state
        .usage()
        .iter()
        .map(|(mark, counter)| PaletteEntry {
            mark,
            placed: counter.placed,
            required: counter.required,
            remaining: counter.remaining(),
            available: !counter.is_exhausted(),
        })
        .collect();

    Snapshot {
        version,
        slots,
        palette,
        outcome: state.outcome(),
        submission_enabled: state.is_submission_enabled(),
        dragging,
    }
}
