//! End-to-end exercise scenarios driven through the gesture adapter.

use crate::exercise::{ExerciseState, Inventory, Outcome, Session, UsageCounter, WordSlot};
use crate::interaction::DragSource;
use crate::text::{PunctuationMark, tokenize};
use pretty_assertions::assert_eq;

fn drag(session: &mut Session, source: DragSource, target: Option<usize>) {
    session.start_drag(source).unwrap();
    session.end_drag(target).unwrap();
}

fn words(session: &Session) -> Vec<String> {
    session
        .state()
        .slots()
        .iter()
        .map(|slot| slot.word().to_string())
        .collect()
}

#[test]
fn test_walkthrough_capitalizes_then_reverts() {
    let mut session = Session::new("Hi there. you ok?");
    assert_eq!(words(&session), vec!["Hi", "there", "you", "ok"]);

    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Period),
        Some(1),
    );
    assert_eq!(session.state().slot(2).unwrap().word(), "You");

    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::QuestionMark),
        Some(3),
    );
    assert_eq!(session.state().candidate(), "Hi there. You ok?");

    // Detaching the period brings the lowercase word back
    drag(&mut session, DragSource::Slot(1), None);
    assert_eq!(session.state().slot(2).unwrap().word(), "you");
    assert_eq!(
        session
            .state()
            .usage()
            .get(PunctuationMark::Period)
            .unwrap()
            .placed,
        0
    );
}

#[test]
fn test_full_exercise_is_judged_correct() {
    let mut session = Session::new("Hi there. You ok?");
    assert!(!session.is_submission_enabled());

    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Period),
        Some(1),
    );
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::QuestionMark),
        Some(3),
    );

    assert!(session.is_submission_enabled());
    assert_eq!(session.submit(), Some(Outcome::Correct));
    assert_eq!(session.snapshot().outcome, Outcome::Correct);
}

#[test]
fn test_edit_after_submission_returns_to_in_progress() {
    let mut session = Session::new("Yes, no.");
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Period),
        Some(0),
    );
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Comma),
        Some(1),
    );
    assert_eq!(session.submit(), Some(Outcome::Incorrect));

    // Swap the two marks into place
    drag(&mut session, DragSource::Slot(0), None);
    assert_eq!(session.state().outcome(), Outcome::InProgress);
    drag(&mut session, DragSource::Slot(1), Some(0));
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Period),
        Some(1),
    );

    assert_eq!(session.state().candidate(), "Yes, no.");
    assert_eq!(session.submit(), Some(Outcome::Correct));
}

#[test]
fn test_reset_matches_fresh_tokenize_and_inventory() {
    let reference = "Well, yes. No, really? Fine!";
    let mut session = Session::new(reference);
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Comma),
        Some(0),
    );
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::ExclamationMark),
        Some(2),
    );

    session.reset();
    let once = session.state().clone();
    session.reset();

    let expected = ExerciseState::new(reference);
    assert_eq!(once, expected);
    assert_eq!(session.state(), &expected);
    assert_eq!(expected.slots(), tokenize(reference).as_slice());
    assert_eq!(expected.usage(), &Inventory::from_reference(reference));
}

#[test]
fn test_empty_reference_is_a_single_empty_slot_exercise() {
    let mut session = Session::new("");

    assert_eq!(session.state().slots(), &[WordSlot::new("")]);
    assert!(session.state().usage().is_empty());
    assert!(session.is_submission_enabled());
    assert_eq!(session.submit(), Some(Outcome::Correct));
}

#[test]
fn test_exhausted_mark_cannot_be_dragged_until_one_is_removed() {
    let mut session = Session::new("Hi there.");
    drag(
        &mut session,
        DragSource::Palette(PunctuationMark::Period),
        Some(0),
    );

    assert!(
        session
            .start_drag(DragSource::Palette(PunctuationMark::Period))
            .is_err()
    );

    drag(&mut session, DragSource::Slot(0), None);
    let counter = *session
        .state()
        .usage()
        .get(PunctuationMark::Period)
        .unwrap();
    assert_eq!(
        counter,
        UsageCounter {
            required: 1,
            placed: 0
        }
    );
    assert!(
        session
            .start_drag(DragSource::Palette(PunctuationMark::Period))
            .is_ok()
    );
}
