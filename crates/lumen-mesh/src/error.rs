use std::path::PathBuf;

/// Failure while reading or parsing an OBJ model.
///
/// Line numbers are 1-based source lines.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("obj line {line}: expected {expected} values after `{directive}`, found {found}")]
    MissingValues {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("obj line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },

    #[error(
        "obj line {line}: index {index} does not refer to any of the {vertex_count} vertices \
         defined so far"
    )]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

impl ObjError {
    /// Source line the error was reported on, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Io { .. } => None,
            ObjError::MissingValues { line, .. }
            | ObjError::InvalidNumber { line, .. }
            | ObjError::IndexOutOfRange { line, .. } => Some(*line),
        }
    }
}
