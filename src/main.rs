//! urlprovider - download URL resolution CLI tool
//!
//! Runs one URL provider with the given input variables and prints the
//! resolved download URL.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use urlprovider::cli::CliArgs;
use urlprovider::orchestrator::Orchestrator;
use urlprovider::output::{create_formatter, error_message, OutputConfig, OutputFormatter};
use urlprovider::provider::create_provider;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    let formatter = create_formatter(
        OutputConfig::from_cli(args.json, args.verbose, args.quiet).with_color(!args.no_color),
    );

    match run(&args, formatter.as_ref()).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            // JSON errors go to stdout so callers can parse a single stream
            let written = if args.json {
                formatter.format_error(&e, &mut io::stdout().lock())
            } else {
                formatter.format_error(&e, &mut io::stderr().lock())
            };
            if written.is_err() {
                eprintln!("Error: {}", error_message(&e));
            }
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: &CliArgs, formatter: &dyn OutputFormatter) -> anyhow::Result<ExitCode> {
    let provider = create_provider(args.provider);
    let mut stdout = io::stdout().lock();

    if args.describe {
        formatter.describe(provider.as_ref(), &mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut env = args.input_environment()?;

    if args.verbose {
        eprintln!("urlprovider v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Provider: {}", provider.name());
        for (name, value) in env.iter() {
            eprintln!("  {} = {}", name, value);
        }
    }

    let orchestrator = Orchestrator::new(args.timeout())?.show_progress(!args.quiet && !args.json);
    let report = orchestrator.run(provider.as_ref(), &mut env).await?;

    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
