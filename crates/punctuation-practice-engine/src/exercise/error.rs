use crate::text::PunctuationMark;

/// Invariant violations detected while applying a placement event.
///
/// None of these are reachable through a well-behaved interaction adapter;
/// they indicate a broken event contract. The state the event was applied to
/// is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("Slot index {index} is out of range for {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
    #[error("Mark '{0}' does not appear in the reference sentence")]
    UnknownMark(PunctuationMark),
    #[error("Slot {index} was expected to hold '{expected}' but holds {found:?}")]
    OriginMismatch {
        index: usize,
        expected: PunctuationMark,
        found: Option<PunctuationMark>,
    },
    #[error("All {required} '{mark}' marks are already placed")]
    CounterOverflow {
        mark: PunctuationMark,
        required: usize,
    },
    #[error("No '{mark}' marks are placed")]
    CounterUnderflow { mark: PunctuationMark },
}
