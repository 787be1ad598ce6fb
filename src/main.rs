use std::process::ExitCode;

use clap::Parser;
use roster_client::cli::{describe, run, Cli};
use roster_client::logging::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "command failed");
            eprintln!("Error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}
