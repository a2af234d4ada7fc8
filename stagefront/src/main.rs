use clap::Parser;
use stagefront::config::Config;
use std::path::PathBuf;
use std::process::ExitCode;

/// Web front for a remote artist tour catalog.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "example_config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli).await {
        tracing::error!(error = %err, "server exited");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_file(&cli.config)?;
    config.validate()?;
    stagefront::run(config).await?;
    Ok(())
}
