use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("licita error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config()?;
    let mut ctx = context::AppContext::init(config)?;

    match &cli.command {
        cli::Commands::Auth { action } => commands::auth::handle(action, &flags, &mut ctx).await,
        cli::Commands::Company { action } => {
            commands::company::handle(action, &flags, &mut ctx).await
        }
        cli::Commands::Document { action } => {
            commands::document::handle(action, &flags, &mut ctx).await
        }
        cli::Commands::Catalog { action } => {
            commands::catalog::handle(action, &flags, &mut ctx).await
        }
        cli::Commands::Dashboard(args) => commands::dashboard::handle(args, &flags, &mut ctx).await,
        cli::Commands::Onboard { action } => {
            commands::onboard::handle(action, &flags, &mut ctx).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let default_directive = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
