use anyhow::Context;
use std::process::ExitCode;

use mandelterm::{ExplorerConfig, RunTerminalCommand};

fn run() -> anyhow::Result<()> {
    RunTerminalCommand::new(ExplorerConfig::default())
        .run()
        .context("mandelterm session failed")
}

fn main() -> ExitCode {
    // Anything below warn would draw over the alternate screen.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
