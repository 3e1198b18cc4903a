mod cli;
mod parse;
mod render;
mod report;

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    cli::run()
}
