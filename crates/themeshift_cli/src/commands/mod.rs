//! Command dispatch.

pub mod apply;
pub mod check;
pub mod rules;

use anyhow::Result;

use crate::cli::{Cli, Command};
use crate::config::resolve_target;

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        None => apply::handle(resolve_target(None)),
        Some(Command::Apply { path }) => apply::handle(resolve_target(path)),
        Some(Command::Check { path }) => check::handle(resolve_target(path), cli.verbose),
        Some(Command::Rules { conflicts }) => rules::handle(conflicts),
    }
}
