use serde::{Serialize, Serializer};
use std::fmt;

/// A punctuation mark recognized by the tokenizer.
///
/// The set is closed: every character the tokenizer strips from a reference
/// sentence maps to exactly one variant. Only the sentence-ending marks
/// (period, question mark, exclamation mark) affect word casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PunctuationMark {
    Period,          // "."
    Comma,           // ","
    QuestionMark,    // "?"
    ExclamationMark, // "!"
    Semicolon,       // ";"
    Colon,           // ":"
    Hyphen,          // "-"
    Underscore,      // "_"
    Slash,           // "/"
    Hash,            // "#"
    Dollar,          // "$"
    Percent,         // "%"
    Caret,           // "^"
    Ampersand,       // "&"
    Asterisk,        // "*"
    Equals,          // "="
    Backtick,        // "`"
    Tilde,           // "~"
    OpenBrace,       // "{"
    CloseBrace,      // "}"
    OpenParen,       // "("
    CloseParen,      // ")"
}

impl PunctuationMark {
    pub const ALL: [PunctuationMark; 22] = [
        PunctuationMark::Period,
        PunctuationMark::Comma,
        PunctuationMark::QuestionMark,
        PunctuationMark::ExclamationMark,
        PunctuationMark::Semicolon,
        PunctuationMark::Colon,
        PunctuationMark::Hyphen,
        PunctuationMark::Underscore,
        PunctuationMark::Slash,
        PunctuationMark::Hash,
        PunctuationMark::Dollar,
        PunctuationMark::Percent,
        PunctuationMark::Caret,
        PunctuationMark::Ampersand,
        PunctuationMark::Asterisk,
        PunctuationMark::Equals,
        PunctuationMark::Backtick,
        PunctuationMark::Tilde,
        PunctuationMark::OpenBrace,
        PunctuationMark::CloseBrace,
        PunctuationMark::OpenParen,
        PunctuationMark::CloseParen,
    ];

    /// Look up the mark for a character, if it belongs to the recognized set
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|mark| mark.as_char() == c)
    }

    pub fn as_char(self) -> char {
        match self {
            PunctuationMark::Period => '.',
            PunctuationMark::Comma => ',',
            PunctuationMark::QuestionMark => '?',
            PunctuationMark::ExclamationMark => '!',
            PunctuationMark::Semicolon => ';',
            PunctuationMark::Colon => ':',
            PunctuationMark::Hyphen => '-',
            PunctuationMark::Underscore => '_',
            PunctuationMark::Slash => '/',
            PunctuationMark::Hash => '#',
            PunctuationMark::Dollar => '$',
            PunctuationMark::Percent => '%',
            PunctuationMark::Caret => '^',
            PunctuationMark::Ampersand => '&',
            PunctuationMark::Asterisk => '*',
            PunctuationMark::Equals => '=',
            PunctuationMark::Backtick => '`',
            PunctuationMark::Tilde => '~',
            PunctuationMark::OpenBrace => '{',
            PunctuationMark::CloseBrace => '}',
            PunctuationMark::OpenParen => '(',
            PunctuationMark::CloseParen => ')',
        }
    }

    /// Sentence-ending marks capitalize the word that follows them
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PunctuationMark::Period
                | PunctuationMark::QuestionMark
                | PunctuationMark::ExclamationMark
        )
    }
}

impl fmt::Display for PunctuationMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for PunctuationMark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
