//! Entry point for dir-probe.
use std::{env, process::ExitCode};

use dir_probe::{
    cli::{self, CliOutcome},
    lib::telemetry,
};

fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{err:#}");
        return ExitCode::from(2);
    }

    let argv: Vec<String> = env::args().collect();
    let outcome = cli::run(&argv);
    let exit = ExitCode::from(outcome.exit_code());

    match outcome {
        CliOutcome::Verdict(message) | CliOutcome::Info(message) => println!("{message}"),
        CliOutcome::Usage(message) | CliOutcome::Fault(message) => eprintln!("{message}"),
    }

    exit
}
