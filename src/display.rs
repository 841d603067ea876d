use std::{path::Path, process::Command};

use anyhow::{Context, Result};

use crate::ext::CommandExt;

/// Opens `path` in the platform's default viewer and waits for the launcher to
/// exit.
pub fn open(path: &Path) -> Result<()> {
  tracing::info!("opening {path:?}");

  viewer(path).check_success().with_context(|| format!("open {path:?}"))
}

fn viewer(path: &Path) -> Command {
  let mut command = if cfg!(target_os = "macos") {
    Command::new("open")
  } else if cfg!(windows) {
    let mut start = Command::new("cmd");
    start.args(["/C", "start", ""]);
    start
  } else {
    Command::new("xdg-open")
  };
  command.arg(path);

  command
}
