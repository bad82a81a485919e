#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use flagship::{
    config::Config, telemetry, DecisionClient, DecisionRequest, Mode, ReqwestTransport,
    VisitorContext,
};
use uuid::Uuid;

/// Query the Flagship decision API from the command line
#[derive(Parser)]
#[command(name = "flagship")]
#[command(about = "Query the Flagship decision API from the command line")]
#[command(version)]
struct Cli {
    /// Path to configuration file (default: flagship.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Response mode override (normal, simple, full)
    #[arg(long)]
    mode: Option<Mode>,

    /// Print the request instead of sending it
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the decision for one campaign
    SingleCampaign {
        /// Visitor id (random UUID when omitted)
        #[arg(long)]
        visitor: Option<String>,

        #[arg(long)]
        campaign: String,

        /// Context attribute as key=value, repeatable
        #[arg(long = "context", value_name = "KEY=VALUE")]
        context: Vec<String>,
    },
    /// Fetch the decisions for every campaign
    AllCampaigns {
        /// Visitor id (random UUID when omitted)
        #[arg(long)]
        visitor: Option<String>,

        /// Context attribute as key=value, repeatable
        #[arg(long = "context", value_name = "KEY=VALUE")]
        context: Vec<String>,
    },
    /// Report a campaign activation
    Activate {
        #[arg(long)]
        visitor: String,

        #[arg(long)]
        variation_group: String,

        #[arg(long)]
        variation: String,
    },
}

fn build_request(
    client: &DecisionClient<ReqwestTransport>,
    command: &Commands,
) -> Result<DecisionRequest> {
    let request = match command {
        Commands::SingleCampaign {
            visitor,
            campaign,
            context,
        } => {
            let visitor = visitor_or_random(visitor.as_deref());
            let context = VisitorContext::from_pairs(context)?;
            client.single_campaign_request(&visitor, campaign, &context)
        }
        Commands::AllCampaigns { visitor, context } => {
            let visitor = visitor_or_random(visitor.as_deref());
            let context = VisitorContext::from_pairs(context)?;
            client.all_campaigns_request(&visitor, &context)
        }
        Commands::Activate {
            visitor,
            variation_group,
            variation,
        } => client.campaign_activation_request(visitor, variation_group, variation),
    };
    Ok(request)
}

fn visitor_or_random(visitor: Option<&str>) -> String {
    visitor.map_or_else(
        || {
            let id = Uuid::new_v4().to_string();
            tracing::info!(visitor_id = %id, "no visitor id given, generated one");
            id
        },
        ToString::to_string,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Load and validate configuration first (fail-fast)
    let mut config = match &cli.config {
        Some(path) => Config::load_from(&path.to_string_lossy()),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    if let Some(mode) = cli.mode {
        config.request.mode = mode;
    }

    telemetry::init(&config.logging.level);

    tracing::debug!(
        base_url = %config.api.base_url,
        environment_id = %config.api.environment_id,
        mode = %config.request.mode,
        "configuration loaded"
    );

    let client = config.build_client()?;
    let request = build_request(&client, &cli.command)?;

    if cli.dry_run {
        println!("{} {}", request.method, request.url);
        println!("{}", serde_json::to_string_pretty(&request.body)?);
        return Ok(());
    }

    let response = client
        .send(request)
        .await
        .context("decision API request failed")?;

    let status = response.status();
    let body = response.text().await?;

    println!("{status}");
    println!("{body}");

    Ok(())
}
