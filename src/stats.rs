use crate::{
  error::{Error, Result},
  series::TrimmedSeries,
};

/// Summary statistics for a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
  /// Mean mega-cycles per frame.
  pub mean_cycles: f64,
  /// Last iteration index divided by the total time in seconds.
  ///
  /// This uses the last iteration index rather than the number of frames, so it
  /// only matches the real frame rate when indices count frames from zero.
  pub mean_fps: f64,
  /// Mean of the per-frame time column.
  pub mean_ms_per_frame: f64,
}

impl SummaryStats {
  pub fn compute(series: &TrimmedSeries) -> Result<Self> {
    let Some(&last_iteration) = series.iterations.last() else {
      return Err(Error::Degenerate("empty series"));
    };

    let total_time: f64 = series.time.iter().sum();
    if total_time == 0.0 {
      return Err(Error::Degenerate("total time is zero"));
    }

    let stats = Self {
      mean_cycles: mean(&series.cycles)?,
      mean_fps: last_iteration / (total_time * 1e-3),
      mean_ms_per_frame: mean(&series.time)?,
    };

    if ![stats.mean_cycles, stats.mean_fps, stats.mean_ms_per_frame]
      .iter()
      .all(|v| v.is_finite())
    {
      return Err(Error::Degenerate("non-finite result"));
    }

    Ok(stats)
  }
}

fn mean(values: &[f64]) -> Result<f64> {
  if values.is_empty() {
    return Err(Error::Degenerate("mean of empty sequence"));
  }

  Ok(values.iter().sum::<f64>() / values.len() as f64)
}
