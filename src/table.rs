use std::{fs, path::Path, str::FromStr};

use crate::error::{Error, Result};

/// Minimum number of columns in a row: iteration, time and cycles.
pub const MIN_COLUMNS: usize = 3;

/// A benchmark results table, one row per frame in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
  rows: Vec<Vec<f64>>,
}

impl BenchmarkTable {
  /// Reads and parses the table at `path`.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;

    text.parse()
  }

  pub fn rows(&self) -> &[Vec<f64>] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }
}

impl FromStr for BenchmarkTable {
  type Err = Error;

  /// Parses whitespace separated numeric rows. Blank lines and `#` comments are
  /// skipped; every row must have as many columns as the first one.
  fn from_str(text: &str) -> Result<Self> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (i, line) in text.lines().enumerate() {
      let line_no = i + 1;
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let row = line
        .split_whitespace()
        .map(|token| {
          token.parse::<f64>().map_err(|_| Error::Parse {
            line: line_no,
            token: token.to_string(),
          })
        })
        .collect::<Result<Vec<_>>>()?;

      match rows.first() {
        None if row.len() < MIN_COLUMNS => return Err(Error::TooFewColumns { found: row.len() }),
        Some(first) if first.len() != row.len() => {
          return Err(Error::Ragged {
            line: line_no,
            expected: first.len(),
            found: row.len(),
          })
        }
        _ => {}
      }

      rows.push(row);
    }

    Ok(Self { rows })
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use super::*;

  #[test]
  fn parses_tab_and_space_separated_rows() {
    let table: BenchmarkTable = "0\t16.5\t40.1\n1 17  41.25\n".parse().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0], vec![0.0, 16.5, 40.1]);
    assert_eq!(table.rows()[1], vec![1.0, 17.0, 41.25]);
  }

  #[test]
  fn skips_blank_lines_and_comments() {
    let table: BenchmarkTable = "# it ms mcycles\n\n0 1 2\n   \n1 2 3\n".parse().unwrap();

    assert_eq!(table.len(), 2);
  }

  #[test]
  fn keeps_extra_columns() {
    let table: BenchmarkTable = "0 1 2 3\n1 2 3 4\n".parse().unwrap();

    assert_eq!(table.rows()[1], vec![1.0, 2.0, 3.0, 4.0]);
  }

  #[test]
  fn rejects_non_numeric_token() {
    let err = "0 1 2\n1 fast 3\n".parse::<BenchmarkTable>().unwrap_err();

    assert!(matches!(err, Error::Parse { line: 2, ref token } if token == "fast"));
  }

  #[test]
  fn rejects_ragged_rows() {
    let err = "0 1 2\n1 2\n".parse::<BenchmarkTable>().unwrap_err();

    assert!(matches!(err, Error::Ragged { line: 2, expected: 3, found: 2 }));
  }

  #[test]
  fn rejects_narrow_table() {
    let err = "0 1\n1 2\n".parse::<BenchmarkTable>().unwrap_err();

    assert!(matches!(err, Error::TooFewColumns { found: 2 }));
  }

  #[test]
  fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BenchmarkTable::load(dir.path().join("benchmark.txt")).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
  }

  #[test]
  fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "0\t1.5\t2.5\n1\t1.5\t2.5\n").unwrap();

    let table = BenchmarkTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 2);
  }
}
