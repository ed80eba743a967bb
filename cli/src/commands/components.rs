//! Components command implementation.

use clap::Parser;

/// Components command arguments.
#[derive(Parser)]
pub struct ComponentsCommand {}

use anyhow::Result as AnyhowResult;
use bagwords_core::Registry;

pub fn run(_cmd: ComponentsCommand) -> AnyhowResult<()> {
    for name in Registry::builtin().names() {
        println!("{}", name);
    }
    Ok(())
}
