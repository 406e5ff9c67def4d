mod quote;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use repricer_core::RateParameters;
use repricer_sync::JobOutcome;

#[derive(Debug, Parser)]
#[command(name = "repricer-cli")]
#[command(about = "Recompute and push catalog prices to a Shopify store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reprice every active product in the configured store.
    Sync {
        #[command(flatten)]
        rates: RateArgs,
    },
    /// Print the price for the given attributes without contacting the store.
    Quote {
        #[command(flatten)]
        rates: RateArgs,
        #[command(flatten)]
        attributes: quote::AttributeArgs,
    },
}

#[derive(Debug, Clone, Args)]
struct RateArgs {
    /// Price per unit of weight of the base material.
    #[arg(long, alias = "gold-rate")]
    material_rate: Decimal,
    /// Labor charge per unit of weight.
    #[arg(long, alias = "labour-rate")]
    labor_rate: Decimal,
    /// Tax as a percentage, e.g. `3` for 3%.
    #[arg(long, alias = "gst-rate")]
    tax_rate: Decimal,
}

impl From<RateArgs> for RateParameters {
    fn from(args: RateArgs) -> Self {
        RateParameters::new(args.material_rate, args.labor_rate, args.tax_rate)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sync { rates } => run_sync_command(rates.into()).await,
        Commands::Quote { rates, attributes } => {
            init_tracing("warn")?;
            let price = quote::quote(&attributes, &rates.into());
            println!("{price}");
            Ok(())
        }
    }
}

fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

async fn run_sync_command(rates: RateParameters) -> anyhow::Result<()> {
    let config = repricer_core::load_app_config_from_env()?;
    init_tracing(&config.log_level)?;

    let store = repricer_shopify::ShopifyAdminClient::new(&config.store_config())
        .map_err(|e| anyhow::anyhow!("failed to build Shopify client: {e}"))?;

    tracing::info!(
        env = %config.env,
        store = %config.shopify_store_name,
        "running catalog price sync from cli"
    );
    match repricer_sync::run_sync(&store, rates).await {
        JobOutcome::Done => {
            tracing::info!(store = %config.shopify_store_name, "cli sync finished");
            println!("sync complete for {}", config.shopify_store_name);
            Ok(())
        }
        JobOutcome::Aborted { cause } => {
            tracing::error!(store = %config.shopify_store_name, cause = %cause, "cli sync aborted");
            anyhow::bail!("sync aborted: {cause}")
        }
    }
}
