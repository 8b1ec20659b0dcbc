use std::process::ExitCode;

use clap::Parser;

use explore::cli::{Args, run};
use explore::progress;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the rendered document; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            progress::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
