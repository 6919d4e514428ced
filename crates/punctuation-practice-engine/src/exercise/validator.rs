use crate::exercise::{ExerciseState, Outcome, WordSlot};

/// Flatten slots into a sentence: each word followed by its mark, joined by single spaces
pub fn reconstruct(slots: &[WordSlot]) -> String {
    slots
        .iter()
        .map(|slot| slot.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compare the assembled sentence with the reference.
///
/// Exact string equality: case and whitespace both matter and there is no
/// partial credit. Only ever returns `Correct` or `Incorrect`. Callers are
/// expected to check [`ExerciseState::is_submission_enabled`] first; judging an
/// incomplete placement is allowed but will normally be `Incorrect`.
pub fn check_answer(state: &ExerciseState, reference: &str) -> Outcome {
    let candidate = reconstruct(state.slots());
    if candidate == reference {
        log::debug!("answer accepted: {candidate:?}");
        Outcome::Correct
    } else {
        log::debug!("answer rejected: {candidate:?} != {reference:?}");
        Outcome::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::PlacementEvent;
    use crate::text::PunctuationMark;

    fn place(state: ExerciseState, mark: PunctuationMark, target: usize) -> ExerciseState {
        state
            .apply_placement(&PlacementEvent::from_palette(mark, Some(target)))
            .unwrap()
    }

    #[test]
    fn test_reconstruct_joins_words_and_marks() {
        let state = place(
            ExerciseState::new("Hi there. you ok?"),
            PunctuationMark::Period,
            1,
        );

        assert_eq!(reconstruct(state.slots()), "Hi there. You ok");
    }

    #[test]
    fn test_reconstruct_empty_reference() {
        let state = ExerciseState::new("");
        assert_eq!(reconstruct(state.slots()), "");
        assert_eq!(check_answer(&state, ""), Outcome::Correct);
    }

    #[test]
    fn test_correct_answer() {
        let reference = "Hi there. You ok?";
        let state = ExerciseState::new(reference);
        let state = place(state, PunctuationMark::Period, 1);
        let state = place(state, PunctuationMark::QuestionMark, 3);

        assert!(state.is_submission_enabled());
        assert_eq!(check_answer(&state, reference), Outcome::Correct);
    }

    #[test]
    fn test_wrong_position_is_incorrect() {
        let reference = "Hi there. You ok?";
        let state = ExerciseState::new(reference);
        let state = place(state, PunctuationMark::Period, 0);
        let state = place(state, PunctuationMark::QuestionMark, 3);

        assert!(state.is_submission_enabled());
        assert_eq!(state.candidate(), "Hi. There you ok?");
        assert_eq!(check_answer(&state, reference), Outcome::Incorrect);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        // The reference keeps a capital that tokenizing lowered and nothing restores
        let reference = "Ask Bob.";
        let state = place(ExerciseState::new(reference), PunctuationMark::Period, 1);

        assert_eq!(state.candidate(), "Ask bob.");
        assert_eq!(check_answer(&state, reference), Outcome::Incorrect);
    }

    #[test]
    fn test_incomplete_placement_is_incorrect() {
        let reference = "Hi there. You ok?";
        let state = place(ExerciseState::new(reference), PunctuationMark::Period, 1);

        assert!(!state.is_submission_enabled());
        assert_eq!(check_answer(&state, reference), Outcome::Incorrect);
    }
}
