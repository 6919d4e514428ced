use serde::Serialize;

use crate::exercise::PlacementError;
use crate::text::{PunctuationMark, extract_marks};

/// How many instances of one mark the reference requires versus how many are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageCounter {
    pub required: usize,
    pub placed: usize,
}

impl UsageCounter {
    pub fn remaining(&self) -> usize {
        self.required - self.placed
    }

    /// An exhausted mark can no longer be dragged from the palette
    pub fn is_exhausted(&self) -> bool {
        self.placed == self.required
    }
}

/// Direction of a usage counter change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increment,
    Decrement,
}

/// Per-mark usage counters for one exercise.
///
/// Entries are kept in order of the mark's first appearance in the reference,
/// which is also the order the palette offers them in. Marks absent from the
/// reference have no entry at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    entries: Vec<(PunctuationMark, UsageCounter)>,
}

impl Inventory {
    /// Seed the counters from the reference: `required` is the mark's occurrence count
    pub fn from_reference(reference: &str) -> Self {
        let mut entries: Vec<(PunctuationMark, UsageCounter)> = Vec::new();

        for mark in extract_marks(reference) {
            match entries.iter_mut().find(|(m, _)| *m == mark) {
                Some((_, counter)) => counter.required += 1,
                None => entries.push((
                    mark,
                    UsageCounter {
                        required: 1,
                        placed: 0,
                    },
                )),
            }
        }

        Self { entries }
    }

    pub fn get(&self, mark: PunctuationMark) -> Option<&UsageCounter> {
        self.entries
            .iter()
            .find(|(m, _)| *m == mark)
            .map(|(_, counter)| counter)
    }

    pub fn contains(&self, mark: PunctuationMark) -> bool {
        self.get(mark).is_some()
    }

    /// Move `placed` for `mark` by one, refusing to leave `[0, required]`
    pub fn adjust(
        &mut self,
        mark: PunctuationMark,
        adjustment: Adjustment,
    ) -> Result<(), PlacementError> {
        let counter = self
            .entries
            .iter_mut()
            .find(|(m, _)| *m == mark)
            .map(|(_, counter)| counter)
            .ok_or(PlacementError::UnknownMark(mark))?;

        counter.placed = match adjustment {
            Adjustment::Increment if counter.placed < counter.required => counter.placed + 1,
            Adjustment::Increment => {
                return Err(PlacementError::CounterOverflow {
                    mark,
                    required: counter.required,
                });
            }
            Adjustment::Decrement => counter
                .placed
                .checked_sub(1)
                .ok_or(PlacementError::CounterUnderflow { mark })?,
        };

        Ok(())
    }

    /// True once every mark has been placed as many times as the reference uses it
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, counter)| counter.is_exhausted())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PunctuationMark, &UsageCounter)> {
        self.entries.iter().map(|(mark, counter)| (*mark, counter))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_placed(&self) -> usize {
        self.entries.iter().map(|(_, counter)| counter.placed).sum()
    }

    pub fn total_required(&self) -> usize {
        self.entries.iter().map(|(_, counter)| counter.required).sum()
    }
}
