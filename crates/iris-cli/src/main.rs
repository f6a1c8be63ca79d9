//! IRIS payout command line client

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use iris::IrisGateway;
use iris_http_client::{Environment, HttpClient};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use url::Url;

mod sub_commands;

/// Command line client for the Midtrans IRIS payout API
#[derive(Parser)]
#[command(name = "iris-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// IRIS API key (creator key for payouts and beneficiaries, approver key for approvals)
    #[arg(long, env = "IRIS_API_KEY", hide_env_values = true)]
    api_key: String,
    /// Environment: sandbox or production
    #[arg(short, long, env = "IRIS_ENVIRONMENT", default_value = "sandbox")]
    environment: Environment,
    /// Override the IRIS base URL
    #[arg(long, env = "IRIS_BASE_URL")]
    base_url: Option<Url>,
    /// Proxy all requests through this URL
    #[arg(short, long)]
    proxy: Option<Url>,
    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Logging level
    #[arg(short, long, default_value = "error")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List banks payouts can be sent to
    Banks,
    /// Manage beneficiaries
    #[command(subcommand)]
    Beneficiaries(sub_commands::beneficiaries::BeneficiariesSubCommand),
    /// Create and approve payouts
    #[command(subcommand)]
    Payouts(sub_commands::payouts::PayoutsSubCommand),
}

impl Cli {
    fn http_client(&self) -> Result<HttpClient> {
        let mut builder = HttpClient::builder()
            .environment(self.environment)
            .api_key(self.api_key.clone());

        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.clone());
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}

/// Filter directives for `--log-level`, with `RUST_LOG` directives appended
/// so they override the defaults for the targets they name.
fn log_directives(log_level: Level, rust_log: Option<&str>) -> String {
    let hyper_filter = "hyper=warn,reqwest=warn";

    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => format!("{},{},{}", log_level, hyper_filter, directives),
        None => format!("{},{}", log_level, hyper_filter),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = EnvFilter::new(log_directives(args.log_level, rust_log.as_deref()));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let gateway = IrisGateway::new(Arc::new(args.http_client()?));

    match &args.command {
        Commands::Banks => sub_commands::banks::banks(&gateway).await,
        Commands::Beneficiaries(sub_command_args) => {
            sub_commands::beneficiaries::beneficiaries(&gateway, sub_command_args).await
        }
        Commands::Payouts(sub_command_args) => {
            sub_commands::payouts::payouts(&gateway, sub_command_args).await
        }
    }
}
