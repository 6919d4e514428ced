//! Text handling for reference sentences: the recognized punctuation set,
//! the tokenizer that produces editable word slots, and casing helpers used
//! by the placement transition.

pub mod casing;
pub mod marks;
pub mod tokenizer;

pub use casing::{capitalize_first, lowercase_first};
pub use marks::PunctuationMark;
pub use tokenizer::{extract_marks, plain_text, strip_punctuation, tokenize};
