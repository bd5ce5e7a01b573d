//! # Jagga CLI
//!
//! Terminal interface to `land_core`: one-shot subcommands for scripting,
//! and an interactive prompt when run with no arguments.

use clap::Parser;
use land_core::format::format_error;
use land_core::LandError;

mod cli;
mod commands;
mod interactive;

use cli::{Cli, Commands};
use commands::Context;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("jagga error: {error:#}");
        std::process::exit(1);
    }

    let mut ctx = Context::init(&cli);
    if let Err(error) = run(cli, &mut ctx) {
        report_error(&ctx, &error);
        std::process::exit(1);
    }
}

fn run(cli: Cli, ctx: &mut Context) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        return interactive::run(ctx);
    };

    match command {
        Commands::Area { length, breadth, unit, output } => commands::area(ctx, &length, &breadth, unit, output),
        Commands::Convert { value, from, to, swap } => commands::convert_value(ctx, &value, from, to, swap),
        Commands::Breakdown { square_feet, system } => commands::breakdown(ctx, &square_feet, system),
        Commands::History { clear } => commands::history(ctx, clear),
        Commands::Language { choice } => commands::language(ctx, choice.as_deref()),
    }
}

/// Print an error in the user's language; with `--json`, also as JSON.
pub(crate) fn report_error(ctx: &Context, error: &anyhow::Error) {
    match error.downcast_ref::<LandError>() {
        Some(land_error) => {
            eprintln!("{}", format_error(land_error, ctx.language));
            if ctx.json {
                if let Ok(json) = serde_json::to_string_pretty(land_error) {
                    eprintln!("{}", json);
                }
            }
        }
        None => eprintln!("jagga error: {error:#}"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LAND_CALC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
