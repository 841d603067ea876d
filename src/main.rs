mod display;
mod error;
mod ext;
mod format;
mod plot;
mod series;
mod stats;
mod table;

use std::{io::IsTerminal, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use self::{
  series::{TrimmedSeries, Window},
  stats::SummaryStats,
  table::BenchmarkTable,
};

#[derive(Parser)]
#[command(version, about = "Summarize and plot per-frame benchmark results")]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Plot time and cycles per iteration and open the figure.
  Plot {
    #[command(flatten)]
    input: Input,
    /// Where to write the SVG figure.
    #[arg(short, long, default_value = "benchmark.svg")]
    output: PathBuf,
    #[arg(long, default_value_t = 1280)]
    width: u32,
    #[arg(long, default_value_t = 720)]
    height: u32,
    /// Only write the figure, don't open a viewer.
    #[arg(long)]
    no_open: bool,
  },
  /// Print the summary statistics only.
  Summary {
    #[command(flatten)]
    input: Input,
  },
}

#[derive(ClapArgs, Debug)]
struct Input {
  /// Benchmark results: one `iteration time cycles` row per frame.
  #[arg(env = "BENCH_VIZ_INPUT", default_value = "benchmark.txt")]
  path: PathBuf,
  /// Warm-up rows to skip at the start.
  #[arg(long, default_value_t = Window::default().head)]
  warmup: usize,
  /// Rows to skip at the end.
  #[arg(long, default_value_t = Window::default().tail)]
  tail: usize,
}

impl Input {
  fn load(&self) -> Result<(TrimmedSeries, SummaryStats)> {
    let table = BenchmarkTable::load(&self.path).with_context(|| format!("load {:?}", self.path))?;
    tracing::info!("loaded {} rows from {:?}", table.len(), self.path);

    let window = Window {
      head: self.warmup,
      tail: self.tail,
    };
    let series = TrimmedSeries::trim(&table, window).context("trim")?;
    tracing::debug!(?window, frames = series.len(), "trimmed");

    let stats = SummaryStats::compute(&series).context("stats")?;
    tracing::debug!(?stats, "computed");

    Ok((series, stats))
  }
}

fn setup_logger() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::WARN.into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .init();
}

fn main() -> Result<()> {
  setup_logger();

  match Args::parse().command {
    Command::Plot {
      input,
      output,
      width,
      height,
      no_open,
    } => {
      let (series, stats) = input.load()?;
      print!("{}", format::summary(&stats).context("format")?);

      let options = plot::Options { output, width, height };
      plot::render(&series, &stats, &options).context("render")?;
      tracing::info!("wrote {:?}", options.output);

      if !no_open {
        display::open(&options.output)?;
      }
    }
    Command::Summary { input } => {
      let (_, stats) = input.load()?;
      print!("{}", format::summary(&stats).context("format")?);
    }
  }

  Ok(())
}
