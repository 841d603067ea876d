use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a benchmark table or deriving statistics from it.
#[derive(Error, Debug)]
pub enum Error {
  #[error("failed to read {path:?}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("line {line}: {token:?} is not a number")]
  Parse { line: usize, token: String },

  #[error("line {line}: expected {expected} columns, found {found}")]
  Ragged { line: usize, expected: usize, found: usize },

  /// Rows need at least iteration, time and cycles.
  #[error("expected at least 3 columns, found {found}")]
  TooFewColumns { found: usize },

  #[error("insufficient data: {rows} rows, at least {required} required")]
  InsufficientData { rows: usize, required: usize },

  /// Empty series, zero total time, or a non-finite statistic.
  #[error("degenerate statistics: {0}")]
  Degenerate(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
