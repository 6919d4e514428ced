/*!
 * # Exercise Core
 *
 * The model of one punctuation exercise and the transition that edits it.
 *
 * ## Architecture Overview
 *
 * ### 1. Value State
 * - An **`ExerciseState`** holds the ordered word slots, the per-mark usage
 *   counters and the outcome of the last submission
 * - Transitions never mutate in place: they return a new state, so a rejected
 *   event leaves the previous state exactly as it was
 *
 * ### 2. One Transition
 * - Every drag gesture ends in one **`PlacementEvent`**
 * - `apply_placement` runs detach, cancellation, attach and capitalization
 *   in that order; slot order never changes
 *
 * ### 3. Usage Accounting
 * - The **`Inventory`** keeps `{required, placed}` per mark found in the
 *   reference and refuses to leave `[0, required]`
 * - Submission is enabled only when every counter is full
 *
 * ### 4. Read API
 * - A **`Session`** owns the state and the gesture adapter, and exposes
 *   immutable **`Snapshot`**s for rendering
 *
 * ## Usage Pattern
 *
 * ```rust
 * use punctuation_practice_engine::exercise::{Outcome, Session};
 * use punctuation_practice_engine::interaction::DragSource;
 * use punctuation_practice_engine::text::PunctuationMark;
 *
 * let mut session = Session::new("Hi there. You ok?");
 *
 * session.start_drag(DragSource::Palette(PunctuationMark::Period)).unwrap();
 * session.end_drag(Some(1)).unwrap();
 * session.start_drag(DragSource::Palette(PunctuationMark::QuestionMark)).unwrap();
 * session.end_drag(Some(3)).unwrap();
 *
 * assert!(session.snapshot().submission_enabled);
 * assert_eq!(session.submit(), Some(Outcome::Correct));
 * ```
 */

pub mod error;
pub mod inventory;
pub mod placement;
pub mod session;
pub mod slot;
pub mod snapshot;
pub mod state;
pub mod validator;

pub use error::PlacementError;
pub use inventory::{Adjustment, Inventory, UsageCounter};
pub use placement::{PlacementEvent, apply_placement};
pub use session::Session;
pub use slot::WordSlot;
pub use snapshot::{PaletteEntry, SlotView, Snapshot};
pub use state::{ExerciseState, Outcome};
pub use validator::{check_answer, reconstruct};
