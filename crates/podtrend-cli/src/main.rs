mod pipeline;
mod report;

use clap::Parser;
use pipeline::RunOutcome;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "podtrend")]
#[command(about = "Find trending print-on-demand niches and log them to Google Sheets")]
#[command(version)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = podtrend_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(?config, "loaded configuration");
    match pipeline::run_pipeline(&config).await {
        RunOutcome::NoTrends => tracing::info!("run ended early: no trends"),
        RunOutcome::NoRecords { analysis } => {
            tracing::info!(analysis_chars = analysis.len(), "run ended early: no records");
        }
        RunOutcome::Completed { records, persisted } => {
            tracing::info!(records = records.len(), ?persisted, "run complete");
        }
    }
    Ok(())
}
