//! Serves the business name generator form.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use namegen_config::AppConfig;
use namegen_web::{App, run, telemetry};
use tracing::{info, warn};

/// Business name generator web server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to serve the form on.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Model identifier sent upstream.
    #[arg(long)]
    model: Option<String>,

    /// API root of an OpenAI-compatible service.
    #[arg(long)]
    base_url: Option<String>,

    /// Deadline for one upstream call, in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Output token ceiling per request.
    #[arg(long)]
    max_output_tokens: Option<u32>,

    /// Sampling temperature.
    #[arg(long)]
    temperature: Option<f32>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(model) = &self.model {
            config.model.model.clone_from(model);
        }
        if let Some(base_url) = &self.base_url {
            config.model.base_url.clone_from(base_url);
        }
        if let Some(secs) = self.timeout_secs {
            config.model.timeout_secs = secs;
        }
        if let Some(tokens) = self.max_output_tokens {
            config.model.max_output_tokens = tokens;
        }
        if self.temperature.is_some() {
            config.model.temperature = self.temperature;
        }

        let config = config.with_api_key_from_env();
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = cli.load_config().context("invalid configuration")?;
    info!(
        model = %config.model.model,
        base_url = %config.model.base_url,
        max_output_tokens = config.model.max_output_tokens,
        api_key = config.api_key().is_some(),
        "configuration loaded"
    );

    let app = App::from_config(&config).context("failed to build upstream adapter")?;
    run(app, config.server.bind, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
