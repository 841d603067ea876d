use std::fmt::Write;

use anyhow::Result;

use crate::stats::SummaryStats;

/// Formats `stats` as the three summary lines shown under the charts.
pub fn summary(stats: &SummaryStats) -> Result<String> {
  let mut text = String::new();

  writeln!(text, "Mean MegaCycles per frame = {:.3}", stats.mean_cycles)?;
  writeln!(text, "Mean FPS = {:.3}", stats.mean_fps)?;
  writeln!(text, "Mean Milliseconds per frame = {:.3}", stats.mean_ms_per_frame)?;

  Ok(text)
}
