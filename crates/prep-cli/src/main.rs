use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod store;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("prep error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Sanitize(args) => return commands::text::sanitize(args, &flags),
        cli::Commands::Split(args) => return commands::text::split(args, &flags),
        cli::Commands::Normalize(args) => return commands::text::normalize(args, &flags),
        cli::Commands::Generic(args) => return commands::text::generic(args, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;
    bootstrap::warn_unconfigured(&config);

    commands::dispatch::dispatch(cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PREPDECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
