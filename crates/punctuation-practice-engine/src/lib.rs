pub mod exercise;
pub mod interaction;
pub mod io;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use exercise::*;
pub use interaction::{DragPayload, DragSource, GestureAdapter, GestureError};
pub use io::IoError;
pub use text::{PunctuationMark, tokenize};
