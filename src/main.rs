use clap::Parser;
use env_logger::Env;

use console_charts::cli::{Cli, Commands};
use console_charts::commands::{run_bar, run_init, run_line, run_render, run_trend};

/// Default log filter for the given verbosity flags; `RUST_LOG` overrides it.
const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(log_level(cli.verbose, cli.quiet)),
    )
    .format_timestamp(None)
    .init();

    let exit_code = match &cli.command {
        Commands::Bar(args) => run_bar(args),
        Commands::Line(args) => run_line(args),
        Commands::Trend(args) => run_trend(args),
        Commands::Render(args) => run_render(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
