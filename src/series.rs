use crate::{
  error::{Error, Result},
  table::BenchmarkTable,
};

/// Rows dropped from each end of the table before computing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
  /// Warm-up frames at the start.
  pub head: usize,
  /// Frames at the end, the last one may be incomplete.
  pub tail: usize,
}

impl Default for Window {
  fn default() -> Self {
    Self { head: 2, tail: 1 }
  }
}

/// Per-frame columns of a benchmark table with the warm-up and trailing rows
/// removed. All three sequences have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedSeries {
  pub iterations: Vec<f64>,
  pub time: Vec<f64>,
  pub cycles: Vec<f64>,
}

impl TrimmedSeries {
  pub fn trim(table: &BenchmarkTable, window: Window) -> Result<Self> {
    let rows = table.len();
    let required = window.head.saturating_add(window.tail);
    if rows < required {
      return Err(Error::InsufficientData { rows, required });
    }

    let kept = &table.rows()[window.head..rows - window.tail];

    Ok(Self {
      iterations: kept.iter().map(|row| row[0]).collect(),
      time: kept.iter().map(|row| row[1]).collect(),
      cycles: kept.iter().map(|row| row[2]).collect(),
    })
  }

  pub fn len(&self) -> usize {
    self.iterations.len()
  }
}
