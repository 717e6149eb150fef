use std::io::{self, ErrorKind};
use std::process::ExitCode;

use casevar_cli::logging::{get_subscriber, init_subscriber};
use casevar_cli::{run, Args};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = get_subscriber(args.log_level(), io::stderr);
    if let Err(e) = init_subscriber(subscriber) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(
        word = args.word.is_some(),
        wordlist = ?args.wordlist,
        destination = ?args.destination(),
        "starting"
    );

    match run(&args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (`casevar word | head`); nothing left to report.
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |e| e.kind() == ErrorKind::BrokenPipe)
    })
}
