use anyhow::{Context, Result};
use clap::Parser;
use handcapture::capture::{CaptureConfig, Sampler};
use handcapture::engine::{CaptureSession, StopReason};
use handcapture::hal::ProviderRegistry;
use handcapture::observability::CaptureMonitor;
use log::info;
use std::path::PathBuf;
use tokio::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "handcapture", about = "Record hand-joint positions to CSV")]
struct Cli {
    /// JSON capture configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame provider: simulated or recorded
    #[arg(long, default_value = "simulated")]
    provider: String,

    /// JSON passed to the provider's configure step
    #[arg(long)]
    provider_config: Option<String>,

    /// Output file (default: <data dir>/handcapture/GestureData.csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run N ticks back to back, then shut down
    #[arg(long)]
    ticks: Option<u64>,

    /// Exit once the capture limit pauses sampling
    #[arg(long)]
    quit_when_paused: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handcapture=info".into()),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => CaptureConfig::load(path)?,
        None => CaptureConfig::default(),
    };
    if cli.quit_when_paused {
        config.quit_when_paused = true;
    }

    let registry = ProviderRegistry::with_defaults();
    let mut provider = registry.create(&cli.provider)?;
    let provider_config = match &cli.provider_config {
        Some(raw) => serde_json::from_str(raw).context("Failed to parse --provider-config")?,
        None => serde_json::json!({}),
    };
    provider.configure(provider_config).await?;

    let mut sampler = Sampler::new(config.clone())?;
    if let Some(output) = cli.output {
        sampler = sampler.with_output_path(output);
    }
    let monitor = CaptureMonitor::new(sampler.metrics());

    let mut session = CaptureSession::new(provider, sampler)
        .with_tick_interval(Duration::from_millis(config.tick_interval_ms.max(1)))
        .quit_when_paused(config.quit_when_paused)
        .with_metrics(monitor.metrics().clone());

    session.start().await?;

    match cli.ticks {
        Some(n) => session.run_ticks(n).await?,
        None => {
            let reason = session
                .run_until(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        log::warn!("Failed to listen for Ctrl-C: {}", e);
                        std::future::pending::<()>().await;
                    }
                })
                .await?;
            if reason != StopReason::Shutdown {
                info!("Stopping: {:?}", reason);
            }
        }
    }

    session.shutdown().await?;
    info!("\n{}", monitor.generate_report());

    Ok(())
}
