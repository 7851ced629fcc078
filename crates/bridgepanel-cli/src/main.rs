//! CLI entry point.

use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use bridgepanel_cli::{Cli, Commands, handlers, panel_config};

fn init_tracing(verbose: bool) {
    // --verbose wins over RUST_LOG
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match panel_config(&cli) {
        Ok(config) => match command {
            Commands::Render { snapshot } => handlers::render::execute(&config, snapshot),
            Commands::Replay { scenario } => handlers::replay::execute(&config, scenario).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}
