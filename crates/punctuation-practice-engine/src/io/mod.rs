use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No exercises in {0}")]
    EmptyExerciseSet(PathBuf),
}

/// Parse an exercise set: one reference sentence per line.
///
/// Blank lines and lines starting with `#` are skipped. Surrounding
/// whitespace is trimmed; whitespace inside a sentence is kept verbatim
/// because answers are compared exactly.
pub fn parse_exercise_set(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read an exercise set file and return its reference sentences
pub fn read_exercise_set(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    let exercises = parse_exercise_set(&content);
    if exercises.is_empty() {
        return Err(IoError::EmptyExerciseSet(path.to_path_buf()));
    }

    log::debug!("loaded {} exercises from {}", exercises.len(), path.display());
    Ok(exercises)
}
