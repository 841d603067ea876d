use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

#[extend::ext]
pub impl ExitStatus {
  /// Returns an error if the exit status was non-zero.
  fn check_success(&self) -> Result<()> {
    if !self.success() {
      anyhow::bail!("exited with non-zero status {self}");
    }

    Ok(())
  }
}

#[extend::ext]
pub impl Command {
  /// Runs the command to completion, returning an error on non-zero exit.
  fn check_success(&mut self) -> Result<()> {
    self.status().context("status")?.check_success()
  }
}
