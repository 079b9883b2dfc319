use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use stockwatch_api::{
    config::{self, AppConfig},
    db::{self, DbPool},
    services::{
        inventory::InventoryService,
        low_stock::{LowStockAlert, LowStockAlertService},
    },
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = CliContext::initialize().await?;

    match cli.command {
        Commands::Alerts(args) => handle_alerts_command(&context, args, cli.json).await?,
        Commands::SetThreshold(args) => {
            handle_set_threshold_command(&context, args, cli.json).await?
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "stockwatch-cli",
    version,
    about = "Inspect low-stock alerts and tune inventory thresholds from the terminal"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the low-stock report of a company
    Alerts(AlertsArgs),
    /// Override the low-stock threshold of an inventory record
    SetThreshold(SetThresholdArgs),
}

#[derive(Args)]
struct AlertsArgs {
    #[arg(long)]
    company: Uuid,
}

#[derive(Args)]
struct SetThresholdArgs {
    #[arg(long)]
    inventory: Uuid,
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
    threshold: i32,
}

async fn handle_alerts_command(context: &CliContext, args: AlertsArgs, json: bool) -> Result<()> {
    let service = LowStockAlertService::new(context.db.clone(), context.config.alert_policy());
    let report = service
        .low_stock_alerts(args.company)
        .await
        .context("failed to compute low-stock alerts")?;

    if json {
        return print_json(&report);
    }

    if report.alerts.is_empty() {
        println!("No low-stock alerts for company {}", args.company);
        return Ok(());
    }

    println!("{} low-stock alert(s):", report.total_alerts);
    for alert in &report.alerts {
        render_alert(alert, context.config.alerts.stockout_sentinel_days);
    }
    Ok(())
}

async fn handle_set_threshold_command(
    context: &CliContext,
    args: SetThresholdArgs,
    json: bool,
) -> Result<()> {
    let service = InventoryService::new(context.db.clone());
    let update = service
        .set_low_stock_threshold(args.inventory, args.threshold)
        .await
        .context("failed to update threshold")?;

    if json {
        print_json(&serde_json::json!({ "inventory": update }))
    } else {
        println!(
            "Inventory {} now alerts at or below {} units",
            update.id, update.threshold
        );
        Ok(())
    }
}

struct CliContext {
    config: AppConfig,
    db: Arc<DbPool>,
}

impl CliContext {
    async fn initialize() -> Result<Self> {
        let config = config::load_config().context("failed to load application config")?;
        config::init_tracing(config.log_level(), config.log_json);

        let db_pool = db::establish_connection_from_app_config(&config)
            .await
            .context("failed to connect to database")?;

        Ok(Self {
            config,
            db: Arc::new(db_pool),
        })
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_alert(alert: &LowStockAlert, sentinel: i64) {
    let runway = if alert.days_until_stockout >= sentinel {
        "no recent velocity".to_string()
    } else {
        format!("{} day(s) left", alert.days_until_stockout)
    };
    let supplier = alert
        .supplier
        .as_ref()
        .map(|s| match &s.contact_email {
            Some(email) => format!("{} <{}>", s.name, email),
            None => s.name.clone(),
        })
        .unwrap_or_else(|| "no primary supplier".to_string());

    println!(
        "- {} ({}) @ {} • stock {}/{} • {} • {}",
        alert.product_name,
        alert.sku,
        alert.warehouse_name,
        alert.current_stock,
        alert.threshold,
        runway,
        supplier
    );
}
