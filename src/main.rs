use clap::Parser;
use orgdir::cli::{self, Cli, Commands};
use orgdir::error::AppError;
use orgdir::logger::init_logger;
use orgdir::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match cli::load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_logger(&settings.logger)?;

    if let Err(e) = cli::execute_command(&cli, settings.clone()).await {
        eprintln!("Error: {}", e);
        if matches!(e, AppError::Validation { .. }) {
            eprintln!("{}", Cli::get_validation_help());
        }
        std::process::exit(1);
    }

    // No subcommand defaults to serving; a dry run stops after validation
    let should_serve = match &cli.command {
        None => true,
        Some(Commands::Serve { dry_run, .. }) => !dry_run,
        Some(Commands::Seed { .. }) => false,
    };

    if should_serve {
        Server::new(settings).run().await?;
    }

    Ok(())
}
