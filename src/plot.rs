use std::{ops::Range, path::PathBuf};

use anyhow::{Context, Result};
use plotters::{coord::Shift, prelude::*};

use crate::{format, series::TrimmedSeries, stats::SummaryStats};

const AXIS_DESC_FONT_SIZE: u32 = 18;
const SUMMARY_FONT_SIZE: u32 = 18;
const SUMMARY_LINE_HEIGHT: i32 = 26;

/// Share of the figure height given to the two charts, the rest holds the
/// summary text.
const CHARTS_HEIGHT_RATIO: f64 = 0.7;

const TIME_COLOR: RGBColor = RGBColor(31, 119, 180);
const CYCLES_COLOR: RGBColor = RGBColor(255, 127, 14);

pub struct Options {
  pub output: PathBuf,
  pub width: u32,
  pub height: u32,
}

/// Draws time and cycles per iteration side by side, with the summary
/// statistics underneath, into an SVG at `options.output`.
pub fn render(series: &TrimmedSeries, stats: &SummaryStats, options: &Options) -> Result<()> {
  let root = SVGBackend::new(&options.output, (options.width, options.height)).into_drawing_area();
  root.fill(&WHITE).context("fill")?;

  let (charts, footer) = root.split_vertically((options.height as f64 * CHARTS_HEIGHT_RATIO) as i32);
  let panels = charts.split_evenly((1, 2));

  draw_panel(&panels[0], &series.iterations, &series.time, "Microseconds", TIME_COLOR).context("time panel")?;
  draw_panel(&panels[1], &series.iterations, &series.cycles, "Mega Cycles", CYCLES_COLOR).context("cycles panel")?;

  let (width, _) = footer.dim_in_pixel();
  let left = width as i32 / 10;
  for (i, line) in format::summary(stats)?.lines().enumerate() {
    footer
      .draw(&Text::new(
        line.to_string(),
        (left, SUMMARY_LINE_HEIGHT * (i as i32 + 1)),
        ("sans-serif", SUMMARY_FONT_SIZE),
      ))
      .context("summary text")?;
  }

  root.present().with_context(|| format!("write {:?}", options.output))?;

  Ok(())
}

fn draw_panel(
  area: &DrawingArea<SVGBackend<'_>, Shift>,
  xs: &[f64],
  ys: &[f64],
  y_desc: &str,
  color: RGBColor,
) -> Result<()> {
  let mut chart = ChartBuilder::on(area)
    .margin(15)
    .x_label_area_size(45)
    .y_label_area_size(65)
    .build_cartesian_2d(axis_range(xs, 0.0), axis_range(ys, 0.05))?;

  chart
    .configure_mesh()
    .x_desc("Iterations")
    .y_desc(y_desc)
    .axis_desc_style(("sans-serif", AXIS_DESC_FONT_SIZE))
    .draw()?;

  chart.draw_series(LineSeries::new(
    xs.iter().copied().zip(ys.iter().copied()),
    color.stroke_width(2),
  ))?;

  Ok(())
}

/// Returns `min..max` of `values`, widened by `margin` of the span on both
/// sides. Never returns an empty range.
fn axis_range(values: &[f64], margin: f64) -> Range<f64> {
  let (min, max) = values
    .iter()
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

  if min > max {
    return 0.0..1.0;
  }

  let span = max - min;
  if span == 0.0 {
    let pad = (min.abs() * 0.05).max(1.0);
    return min - pad..max + pad;
  }

  min - span * margin..max + span * margin
}
