use clap::Parser;
use keyart::cli::{Cli, Commands};
use keyart::discovery::find_manifest;
use keyart::output::Printer;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "keyart=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let printer = Printer::new();
    let manifest = find_manifest(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => keyart::cli::render::run(args, &manifest, &printer)?,
        Commands::Parse(args) => keyart::cli::parse::run(args, &manifest, &printer)?,
        Commands::Check(args) => keyart::cli::check::run(args, &manifest, &printer)?,
        Commands::Layouts => keyart::cli::layouts::run(&manifest, &printer)?,
        Commands::Completions(args) => keyart::cli::completions::run(args)?,
    }

    Ok(())
}
