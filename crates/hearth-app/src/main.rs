mod boot;
mod cli;
mod terminal;

use hearth_common::HearthError;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(e) = run(args).await {
        eprintln!("hearth: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> Result<(), HearthError> {
    // Config comes first so its log level can seed the filter.
    let config = boot::load_config(&args)?;
    boot::init_logging(&args, &config);

    tracing::info!("Hearth v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let session = boot::build_session(&args, &config)?;
    terminal::run(session).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
