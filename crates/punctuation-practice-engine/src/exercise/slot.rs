use serde::Serialize;
use std::fmt;

use crate::text::{PunctuationMark, capitalize_first, lowercase_first};

/// One word position in the reconstructed sentence
///
/// A slot holds at most one punctuation mark, rendered directly after the
/// word. Its identity is its index in the exercise, which never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSlot {
    word: String,
    punctuation: Option<PunctuationMark>,
}

impl WordSlot {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            punctuation: None,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn punctuation(&self) -> Option<PunctuationMark> {
        self.punctuation
    }

    pub fn is_filled(&self) -> bool {
        self.punctuation.is_some()
    }

    pub(crate) fn set_punctuation(&mut self, mark: PunctuationMark) -> Option<PunctuationMark> {
        self.punctuation.replace(mark)
    }

    pub(crate) fn clear_punctuation(&mut self) -> Option<PunctuationMark> {
        self.punctuation.take()
    }

    pub(crate) fn capitalize(&mut self) {
        self.word = capitalize_first(&self.word);
    }

    pub(crate) fn lowercase(&mut self) {
        self.word = lowercase_first(&self.word);
    }
}

impl fmt::Display for WordSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        if let Some(mark) = self.punctuation {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}
