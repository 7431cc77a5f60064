use clap::Parser;
use cpr::config::Cli;
use cpr::{commands, Config, Logger};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = Config::from(Cli::parse());
    let logger = Logger::new(config.verbose);

    match commands::copy::run(&config, &logger) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_copy_violation() => {
            logger.error(&err.to_string());
            Ok(ExitCode::FAILURE)
        }
        // Plain IO failures are not reported as ERROR: lines
        Err(err) => Err(err.into()),
    }
}
